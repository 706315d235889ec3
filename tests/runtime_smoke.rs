#![cfg(test)]
// End-to-end runtime smoke test (headless)
// - Starts refdeck::app::run in the background with REFDECK_TEST_HEADLESS=1.
// - Waits briefly to allow initialization and a few ticks.
// - If it finished, it must have returned Ok(()); otherwise the abort must be a clean cancel.

use std::time::Duration;

use refdeck::app::{RunOptions, run};
use refdeck::nav::Route;

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_initializes_and_runs_without_panic() {
    unsafe {
        std::env::set_var("REFDECK_TEST_HEADLESS", "1");
    }

    let opts = RunOptions {
        start: Route::Methods,
        search: Some("push".to_string()),
        ..RunOptions::default()
    };
    let handle = tokio::spawn(async move { run(opts).await });

    tokio::time::sleep(Duration::from_millis(250)).await;

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
