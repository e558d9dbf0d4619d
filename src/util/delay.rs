//! Runtime-appropriate sleep.
//!
//! WASM builds wait on a `setTimeout` via `gloo-timers`. Native builds (SSR,
//! tests, other rlib consumers) use the tokio timer and must be polled inside
//! a tokio runtime with time enabled.

#[cfg(test)]
#[path = "delay_test.rs"]
mod delay_test;

use std::time::Duration;

/// Suspend the current task for `duration`.
pub async fn sleep(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(duration).await;
    }
}
