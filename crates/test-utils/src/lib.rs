//! Helpers shared by hookshell's integration tests.
//!
//! - [`builders`] assembles configs and trigger bindings.
//! - [`fake_launcher`] stands in for the OS process launcher.
//! - [`log_capture`] records log lines so tests can assert on message texts.

pub mod builders;
pub mod fake_launcher;
pub mod log_capture;

use std::future::Future;
use std::time::Duration;

pub use log_capture::{capture_logs, LogBuffer};

/// Upper bound for anything a test awaits.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Await `f`, failing the test if it takes longer than [`TEST_TIMEOUT`].
pub async fn with_timeout<F: Future>(f: F) -> F::Output {
    match tokio::time::timeout(TEST_TIMEOUT, f).await {
        Ok(output) => output,
        Err(_) => panic!("test timed out after {TEST_TIMEOUT:?}"),
    }
}

/// Poll `condition` until it holds, letting spawned tasks (the runtime loop,
/// process watchers) make progress in between.
pub async fn wait_until(mut condition: impl FnMut() -> bool) {
    with_timeout(async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
}
