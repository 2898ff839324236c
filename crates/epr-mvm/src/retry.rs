//! Retry with exponential back-off and jitter for MVM API calls.
//!
//! The MVM API enforces strict per-token rate limits, so 429 responses are
//! routine during a full sweep. [`retry_with_backoff`] retries those and the
//! usual transient 5xx statuses; everything else is returned immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::MvmError;

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// **Retriable:**
/// - [`MvmError::RateLimited`]: HTTP 429.
/// - [`MvmError::UnexpectedStatus`] with 500, 501, 502, 503 or 504.
/// - [`MvmError::Http`] timeouts and connection failures.
///
/// **Not retriable:** every other status, deserialization failures and
/// malformed custom fields. Retrying won't change the payload.
pub(crate) fn is_retriable(err: &MvmError) -> bool {
    match err {
        MvmError::RateLimited { .. } => true,
        MvmError::UnexpectedStatus { status, .. } => (500..=504).contains(status),
        MvmError::Http(e) => e.is_timeout() || e.is_connect(),
        MvmError::Deserialize { .. }
        | MvmError::MalformedCustomFields { .. }
        | MvmError::InvalidConfig(_) => false,
    }
}

const MAX_DELAY_MS: u64 = 60_000;

/// Delay before retry number `attempt` (1-based): `base_ms × 2^(attempt-1)`,
/// capped at 60 s, then scaled by `jitter` in `[0, 1)` to ±25 %.
fn backoff_delay(base_ms: u64, attempt: u32, jitter: f64) -> Duration {
    let exponent = attempt.saturating_sub(1).min(10);
    let capped = base_ms.saturating_mul(1u64 << exponent).min(MAX_DELAY_MS);
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let ms = (capped as f64 * (0.75 + jitter * 0.5)) as u64;
    Duration::from_millis(ms)
}

/// Runs `operation`, retrying transient MVM failures up to `max_retries` times.
///
/// With `backoff_base_ms = 250` the sleeps are roughly 250 ms, 500 ms, 1 s,
/// ... each ±25 %, never above 60 s. The failing URL and status are logged
/// before every sleep so rate-limit pressure shows up per endpoint.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, MvmError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, MvmError>>,
{
    let mut retries_used = 0u32;
    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        if retries_used == max_retries || !is_retriable(&err) {
            if retries_used > 0 {
                tracing::debug!(
                    url = err.request_url().unwrap_or("-"),
                    retries = retries_used,
                    "MVM request still failing, giving up"
                );
            }
            return Err(err);
        }

        retries_used += 1;
        let delay = backoff_delay(backoff_base_ms, retries_used, rand::random::<f64>());
        tracing::warn!(
            url = err.request_url().unwrap_or("-"),
            status = ?err.status(),
            retry = retries_used,
            max_retries,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            "MVM request failed transiently, backing off"
        );
        tokio::time::sleep(delay).await;
    }
}
