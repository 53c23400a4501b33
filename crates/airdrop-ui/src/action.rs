//! Async callbacks handed to the registration screen.

use std::future::Future;
use std::rc::Rc;

use airdrop_core::ActionError;
use futures::future::{FutureExt, LocalBoxFuture};

pub type ActionFuture = LocalBoxFuture<'static, Result<(), ActionError>>;

/// A zero-argument callback that returns a future.
///
/// Dioxus' `EventHandler` is fire-and-forget; the screen needs to await the
/// parent's work to know when to drop its spinner, so actions carry their
/// future back.
#[derive(Clone)]
pub struct AsyncAction(Rc<dyn Fn() -> ActionFuture>);

impl AsyncAction {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<(), ActionError>> + 'static,
    {
        Self(Rc::new(move || f().boxed_local()))
    }

    /// An action that completes immediately.
    pub fn noop() -> Self {
        Self::new(|| async { Ok(()) })
    }

    pub fn call(&self) -> ActionFuture {
        (self.0)()
    }
}

impl PartialEq for AsyncAction {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for AsyncAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AsyncAction(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test]
    async fn test_call_runs_closure_each_time() {
        let count = Rc::new(Cell::new(0));
        let action = AsyncAction::new({
            let count = count.clone();
            move || {
                let count = count.clone();
                async move {
                    count.set(count.get() + 1);
                    Err(ActionError::Rejected("nope".to_string()))
                }
            }
        });

        assert!(action.call().await.is_err());
        assert!(action.call().await.is_err());
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_equality_is_identity() {
        let a = AsyncAction::noop();
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, AsyncAction::noop());
    }
}
