// End-to-end runtime smoke test (headless)
// - Starts alumni_tui::app::run in the background with ALUMNI_TUI_TEST_HEADLESS=1.
// - Points HOME at a temp dir so settings and the UI state file stay isolated.
// - Points the directory at a closed local port; the initial page fails and is logged.
// - If still running after the wait, aborts the task and asserts the join was a clean cancel.

use std::time::Duration;

use alumni_tui::app::RunOptions;

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_initializes_and_runs_without_panic() {
    let home = tempfile::tempdir().expect("tempdir");
    unsafe {
        std::env::set_var("ALUMNI_TUI_TEST_HEADLESS", "1");
        std::env::set_var("HOME", home.path());
    }
    let port = {
        let l = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        l.local_addr().expect("addr").port()
    };
    let options = RunOptions {
        base_url: Some(format!("http://127.0.0.1:{port}")),
        initial_search: Some("Jane".into()),
        no_mouse: true,
    };

    let handle = tokio::spawn(async move { alumni_tui::app::run(options).await });
    tokio::time::sleep(Duration::from_millis(150)).await;

    if handle.is_finished() {
        match handle.await {
            Ok(run_result) => {
                if let Err(e) = run_result {
                    panic!("app::run returned error early: {e:?}");
                }
                return;
            }
            Err(join_err) => panic!("app::run task panicked: {join_err}"),
        }
    }

    handle.abort();
    match handle.await {
        Ok(run_result) => {
            if let Err(e) = run_result {
                panic!("app::run completed with error on abort race: {e:?}");
            }
        }
        Err(join_err) => {
            assert!(
                join_err.is_cancelled(),
                "app::run join error should be cancellation, got: {join_err}"
            );
        }
    }
}
