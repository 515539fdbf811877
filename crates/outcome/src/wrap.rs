use std::panic::AssertUnwindSafe;

use crate::{Outcome, Panic};

/// Calls `operation`, turning a panic into an `Err` holding its payload.
///
/// `wrap` never panics itself. The default panic hook still runs, so the
/// panic message is printed unless the hook was replaced.
///
/// `operation` is treated as unwind safe: state it borrows may be observed
/// half-updated after an `Err` is returned.
pub fn wrap<T, F>(operation: F) -> Outcome<T, Panic>
where
    F: FnOnce() -> T,
{
    match std::panic::catch_unwind(AssertUnwindSafe(operation)) {
        Ok(val) => Outcome::Ok(val),
        Err(payload) => Outcome::Err(captured(payload)),
    }
}

/// Calls `operation` and awaits the future it returns, turning a panic in
/// either step into an `Err` holding its payload.
///
/// The returned future resolves once the inner future does; there is no
/// timeout.
#[cfg(feature = "async")]
pub async fn wrap_async<T, F, Fut>(operation: F) -> Outcome<T, Panic>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = T>,
{
    use futures::FutureExt as _;

    let fut = match std::panic::catch_unwind(AssertUnwindSafe(operation)) {
        Ok(fut) => fut,
        Err(payload) => return Outcome::Err(captured(payload)),
    };

    match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(val) => Outcome::Ok(val),
        Err(payload) => Outcome::Err(captured(payload)),
    }
}

fn captured(payload: Box<dyn std::any::Any + Send + 'static>) -> Panic {
    let panic = Panic::new(payload);
    log::debug!("captured panic: {panic}");
    panic
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[derive(Debug)]
    struct Rejection {
        code: u16,
    }

    #[test]
    fn wrap_ok() {
        let result = wrap(|| 42);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), 42);

        let result = wrap(|| "yes!");
        assert_eq!(result.expect("no panic"), "yes!");
    }

    #[test]
    fn wrap_err() {
        let result = wrap(|| -> &str { panic!("no!") });
        assert!(result.is_err());

        let panic = result.expect_err("operation panicked");
        assert_eq!(panic.message(), Some("no!"));
    }

    #[test]
    fn wrap_err_formatted_message() {
        let id = 9;
        let result = wrap(|| -> u8 { panic!("missing id: {id}") });
        assert_eq!(
            result.expect_err("operation panicked").message(),
            Some("missing id: 9")
        );
    }

    #[test]
    fn wrap_keeps_payload_identity() {
        let payload = Arc::new(Rejection { code: 503 });
        let raised = Arc::clone(&payload);

        let result = wrap(move || -> u8 { std::panic::panic_any(raised) });
        let panic = result.expect_err("operation panicked");

        let captured = panic
            .downcast_ref::<Arc<Rejection>>()
            .expect("payload type is preserved");
        assert!(Arc::ptr_eq(captured, &payload));
        assert_eq!(captured.code, 503);
    }

    #[test]
    fn wrap_does_not_flatten() {
        let result = wrap(|| Outcome::<(), _>::Err("inner"));
        assert_eq!(result.unwrap(), Outcome::Err("inner"));
    }

    #[test]
    fn wrap_unwrap_reports_panic_message() {
        let result = wrap(|| -> u8 { panic!("no!") });
        assert_eq!(
            crate::test::panic_message(|| result.unwrap()).as_deref(),
            Some("unwrap() called on Error: no!")
        );
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn wrap_async_ok() {
        let result = wrap_async(|| async { "yes!" }).await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "yes!");
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn wrap_async_err() {
        let result = wrap_async(|| async { panic!("no!") }).await;
        assert!(result.is_err());

        let result: Outcome<(), _> = result;
        assert_eq!(result.expect_err("future panicked").message(), Some("no!"));
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn wrap_async_err_after_suspending() {
        let result = wrap_async(|| async {
            tokio::task::yield_now().await;
            std::panic::panic_any(Rejection { code: 500 })
        })
        .await;

        let result: Outcome<(), _> = result;
        let panic = result.expect_err("future panicked");
        assert_eq!(panic.downcast_ref::<Rejection>().map(|r| r.code), Some(500));
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn wrap_async_sync_panic_is_captured() {
        fn operation() -> std::future::Ready<u8> {
            panic!("before the future")
        }

        let result = wrap_async(operation).await;
        assert_eq!(
            result.expect_err("operation panicked").message(),
            Some("before the future")
        );
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn wrap_async_does_not_flatten() {
        let result = wrap_async(|| async { Outcome::<(), _>::Err("inner") }).await;
        assert_eq!(result.unwrap(), Outcome::Err("inner"));
    }
}
