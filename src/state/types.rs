//! Core value types shared across state, workers, and UI.

use serde::{Deserialize, Serialize};

use crate::error::FeedError;

/// One alumnus as returned by the listing and search endpoints.
///
/// Wire keys are upper-case; optional detail fields are only present for some records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlumniRecord {
    /// Full display name.
    #[serde(rename = "NAME", default)]
    pub name: String,
    /// Current employer.
    #[serde(rename = "COMPANY", default)]
    pub company: String,
    /// Graduation year.
    #[serde(rename = "BATCH", default)]
    pub batch: i32,
    /// Profile picture URL.
    #[serde(rename = "PIC", default)]
    pub picture_url: String,
    /// Public profile URL.
    #[serde(rename = "PROFILE", default)]
    pub profile_url: String,
    /// Contact email; also the identity key for de-duplication.
    #[serde(rename = "EMAIL", default)]
    pub email: String,
    /// Professional field.
    #[serde(rename = "FIELD", default)]
    pub field: String,
    /// Academic branch, when known.
    #[serde(rename = "BRANCH", default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Phone number.
    #[serde(rename = "PHONE", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// City or region.
    #[serde(rename = "LOCATION", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// `LinkedIn` profile link.
    #[serde(rename = "LINKEDIN", default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    /// Personal website.
    #[serde(rename = "WEBSITE", default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Free-form biography.
    #[serde(rename = "BIO", default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl AlumniRecord {
    /// What: Stable key used to identify a record in a rendered list.
    ///
    /// Inputs:
    /// - `position`: Index of the record in the list it is rendered from.
    ///
    /// Output:
    /// - The email when non-empty, otherwise `#<position>`.
    ///
    /// Details:
    /// - The positional fallback is not stable across list changes; upstream data should
    ///   always carry an email.
    #[must_use]
    pub fn identity_key(&self, position: usize) -> String {
        let email = self.email.trim();
        if email.is_empty() {
            format!("#{position}")
        } else {
            email.to_ascii_lowercase()
        }
    }
}

/// One page delivered by the listing endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FeedPage {
    /// Records that were never delivered before in this session.
    #[serde(default)]
    pub items: Vec<AlumniRecord>,
    /// Identifiers consumed by this page; resent as exclusions on the next call.
    #[serde(rename = "indexes", default)]
    pub new_identifiers: Vec<u64>,
    /// How many records the server still holds back.
    #[serde(default)]
    pub remaining: i64,
}

/// Paginated fetch request sent to the feed worker.
#[derive(Clone, Debug)]
pub struct PageRequest {
    /// Monotonic identifier used to correlate the response.
    pub id: u64,
    /// Every identifier already delivered this session.
    pub excluded: Vec<u64>,
}

/// Outcome of a [`PageRequest`], echoed back to the event loop.
#[derive(Clone, Debug)]
pub struct PageOutcome {
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// Page on success; the failure otherwise.
    pub result: Result<FeedPage, FeedError>,
}

/// Search query sent to the background search worker.
#[derive(Clone, Debug)]
pub struct QueryInput {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Raw query text entered by the user.
    pub text: String,
}

/// Progress notifications emitted by the search worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchEvent {
    /// The debounce window elapsed and a request for `id` is now in flight.
    Started {
        /// Identifier of the query being searched.
        id: u64,
    },
    /// The request for `id` finished.
    Finished {
        /// Identifier of the query that produced this outcome.
        id: u64,
        /// Matching records, or the failure.
        result: Result<Vec<AlumniRecord>, FeedError>,
    },
}
