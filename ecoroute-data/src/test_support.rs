//! Shared helpers for fixture source tests.

use std::future::Future;

/// Drive `future` to completion on a current-thread runtime with timers.
///
/// # Panics
///
/// Panics when the Tokio runtime cannot be built.
pub fn block_on_for_tests<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("test runtime should build")
        .block_on(future)
}
