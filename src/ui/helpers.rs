use ratatui::layout::Rect;

/// What: Rectangle of at most `w` x `h` centered inside `area`.
#[must_use]
pub fn centered_rect(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

/// What: Text for a record's batch, e.g. `Batch 2015`.
#[must_use]
pub fn batch_label(batch: i32) -> String {
    format!("Batch {batch}")
}
