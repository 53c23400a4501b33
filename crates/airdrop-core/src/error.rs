use thiserror::Error;

/// Errors raised while building or validating portal state.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("window {window_id}: {interval} ends before it starts")]
    InvertedInterval {
        window_id: u32,
        interval: &'static str,
    },
    #[error("window {window_id}: claim opens before registration")]
    ClaimBeforeRegistration { window_id: u32 },
    #[error("duplicate window order {order}")]
    DuplicateOrder { order: u32 },
    #[error("duplicate window id {window_id}")]
    DuplicateId { window_id: u32 },
    #[error("invalid snapshot: {0}")]
    Snapshot(String),
}

/// Failure reported by a caller-supplied action (register, claim, stake).
///
/// Cloneable so the parent can both log it and turn it into a `UiAlert`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("{0}")]
    Rejected(String),
    #[error("backend unavailable: {0}")]
    Backend(String),
}
