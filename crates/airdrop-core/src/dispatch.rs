//! Async action dispatch for the registration screen.
//!
//! Each button wraps a caller-supplied future: the loading flag goes up,
//! the future runs, the flag comes down no matter how the future ends.
//! The future's result is handed back untouched.

use std::future::Future;

/// RAII guard for a loading flag
///
/// Raises the flag when engaged and lowers it when dropped, so the flag is
/// cleared on success, on error, on panic and when the future is dropped
/// mid-flight.
pub struct LoaderGuard<S: FnMut(bool)> {
    set_loading: S,
}

impl<S: FnMut(bool)> LoaderGuard<S> {
    pub fn engage(mut set_loading: S) -> Self {
        set_loading(true);
        Self { set_loading }
    }
}

impl<S: FnMut(bool)> Drop for LoaderGuard<S> {
    fn drop(&mut self) {
        (self.set_loading)(false);
    }
}

/// Runs `action` with the loading flag raised for its whole duration.
pub async fn run_with_loader<S, F, Fut>(set_loading: S, action: F) -> Fut::Output
where
    S: FnMut(bool),
    F: FnOnce() -> Fut,
    Fut: Future,
{
    let _guard = LoaderGuard::engage(set_loading);
    action().await
}

/// Closes the stake modal, then runs the auto-stake action under the loader.
///
/// The modal closes before the action starts and stays closed whatever the
/// outcome.
pub async fn auto_stake<C, S, F, Fut>(close_modal: C, set_loading: S, action: F) -> Fut::Output
where
    C: FnOnce(),
    S: FnMut(bool),
    F: FnOnce() -> Fut,
    Fut: Future,
{
    close_modal();
    tracing::debug!("stake modal closed, starting auto-stake");
    run_with_loader(set_loading, action).await
}

/// Open/closed state of the stake-selection modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StakeModal {
    #[default]
    Closed,
    Open,
}

impl StakeModal {
    pub fn is_open(&self) -> bool {
        matches!(self, StakeModal::Open)
    }

    /// Closes the modal; closing an already closed modal keeps it closed.
    pub fn close(&mut self) {
        *self = StakeModal::Closed;
    }

    pub fn toggle(&mut self) {
        *self = match self {
            StakeModal::Closed => StakeModal::Open,
            StakeModal::Open => StakeModal::Closed,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    use crate::error::ActionError;

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, impl FnMut(bool)) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        (log, move |v| sink.borrow_mut().push(v))
    }

    #[tokio::test]
    async fn test_loader_spans_successful_action() {
        let (log, set) = recorder();
        let seen_during = Rc::new(Cell::new(None));
        let calls = Rc::new(Cell::new(0));

        let result: Result<(), ActionError> = run_with_loader(set, || {
            let log = log.clone();
            let seen_during = seen_during.clone();
            let calls = calls.clone();
            async move {
                calls.set(calls.get() + 1);
                seen_during.set(log.borrow().last().copied());
                Ok(())
            }
        })
        .await;

        assert!(result.is_ok());
        assert_eq!(calls.get(), 1);
        assert_eq!(seen_during.get(), Some(true));
        assert_eq!(*log.borrow(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_loader_cleared_and_error_propagated() {
        let (log, set) = recorder();

        let result = run_with_loader(set, || async {
            Err::<(), _>(ActionError::Rejected("not registered".to_string()))
        })
        .await;

        assert_eq!(result, Err(ActionError::Rejected("not registered".to_string())));
        assert_eq!(*log.borrow(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_loader_cleared_when_future_dropped() {
        let (log, set) = recorder();

        let pending = run_with_loader(set, || std::future::pending::<()>());
        let timed_out = tokio::time::timeout(Duration::from_millis(10), pending).await;

        assert!(timed_out.is_err());
        assert_eq!(*log.borrow(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_auto_stake_closes_modal_before_action() {
        let modal = Rc::new(Cell::new(StakeModal::Open));
        let modal_during = Rc::new(Cell::new(StakeModal::Open));
        let (log, set) = recorder();

        let result = auto_stake(
            {
                let modal = modal.clone();
                move || modal.set(StakeModal::Closed)
            },
            set,
            || {
                let modal = modal.clone();
                let modal_during = modal_during.clone();
                async move {
                    modal_during.set(modal.get());
                    Err::<(), _>(ActionError::Backend("timeout".to_string()))
                }
            },
        )
        .await;

        assert!(result.is_err());
        assert_eq!(modal_during.get(), StakeModal::Closed);
        assert_eq!(modal.get(), StakeModal::Closed);
        assert_eq!(*log.borrow(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_repeated_confirm_leaves_modal_closed() {
        let modal = Rc::new(RefCell::new(StakeModal::Open));

        for _ in 0..2 {
            let (_log, set) = recorder();
            let result = auto_stake(
                {
                    let modal = modal.clone();
                    move || modal.borrow_mut().close()
                },
                set,
                || async { Ok::<(), ActionError>(()) },
            )
            .await;
            assert!(result.is_ok());
            assert!(!modal.borrow().is_open());
        }
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut modal = StakeModal::Open;
        modal.close();
        modal.close();
        assert_eq!(modal, StakeModal::Closed);
    }

    #[test]
    fn test_modal_toggle() {
        let mut modal = StakeModal::default();
        assert!(!modal.is_open());
        modal.toggle();
        assert!(modal.is_open());
        modal.toggle();
        assert_eq!(modal, StakeModal::Closed);
    }
}
