use std::future::Future;

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;

use picflick_types::{AppError, Result};

/// Race `future` against a browser timer.
///
/// `None` waits for `future` however long it takes. When the timer wins the
/// request is dropped and `AppError::Timeout(ms)` is returned.
pub async fn with_timeout<T, F>(future: F, timeout_ms: Option<u64>) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let Some(ms) = timeout_ms else {
        return future.await;
    };

    let timer = TimeoutFuture::new(u32::try_from(ms).unwrap_or(u32::MAX));
    futures::pin_mut!(future, timer);

    match select(future, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            log::warn!("Provider request timed out after {} ms", ms);
            Err(AppError::Timeout(ms))
        }
    }
}
