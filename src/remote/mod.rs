//! The generic remote-operation state machine.
//!
//! Every remote call the REST client exposes is tracked by the same shape:
//! one [`RemoteOperationState`] slice, driven by the three-variant
//! [`RemoteAction`] triplet. The per-operation modules in [`crate::ops`]
//! only pick payload types and route actions to the right slice.

mod tracker;

pub use tracker::track;

use crate::api::RestClientError;

/// The action triplet for one remote operation.
///
/// A caller dispatches `InProgress` before issuing the call, then exactly
/// one of the terminal variants with whatever the client handed back.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteAction<T> {
    InProgress,
    Successful(T),
    Failed(RestClientError),
}

impl<T> RemoteAction<T> {
    /// Phase label for structured logging.
    pub fn phase(&self) -> &'static str {
        match self {
            RemoteAction::InProgress => "in_progress",
            RemoteAction::Successful(_) => "successful",
            RemoteAction::Failed(_) => "failed",
        }
    }
}

/// State slice for one named remote operation.
///
/// Terminal actions never clear the opposite field: entering `Successful`
/// keeps the previous `error_value`, entering `Failed` keeps the previous
/// `success_value`. The slice deliberately retains the last known good and
/// bad payloads across repeated calls, so `has_succeeded`/`has_failed`
/// report presence, not freshness. Callers that need "which terminal came
/// last" must track it themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteOperationState<T> {
    pub success_value: Option<T>,
    pub error_value: Option<RestClientError>,
    pub in_progress: bool,
}

impl<T> Default for RemoteOperationState<T> {
    fn default() -> Self {
        Self {
            success_value: None,
            error_value: None,
            in_progress: false,
        }
    }
}

impl<T: Clone> RemoteOperationState<T> {
    /// Apply one action of this operation's triplet.
    ///
    /// Pure and total: `InProgress` re-enters pending from any state
    /// (slices are reusable for repeated calls), terminal actions are
    /// idempotent.
    pub fn apply(&self, action: &RemoteAction<T>) -> Self {
        match action {
            RemoteAction::InProgress => Self {
                in_progress: true,
                ..self.clone()
            },
            RemoteAction::Successful(payload) => Self {
                success_value: Some(payload.clone()),
                error_value: self.error_value.clone(),
                in_progress: false,
            },
            RemoteAction::Failed(error) => Self {
                success_value: self.success_value.clone(),
                error_value: Some(error.clone()),
                in_progress: false,
            },
        }
    }

    /// No call issued yet (or state was reset): pending nothing, no payloads.
    pub fn is_idle(&self) -> bool {
        !self.in_progress && self.success_value.is_none() && self.error_value.is_none()
    }

    /// A success payload has been recorded at some point.
    pub fn has_succeeded(&self) -> bool {
        self.success_value.is_some()
    }

    /// An error payload has been recorded at some point.
    pub fn has_failed(&self) -> bool {
        self.error_value.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice() -> RemoteOperationState<String> {
        RemoteOperationState::default()
    }

    #[test]
    fn default_is_idle() {
        assert!(slice().is_idle());
    }

    #[test]
    fn phase_labels_cover_the_triplet() {
        assert_eq!(RemoteAction::<String>::InProgress.phase(), "in_progress");
        assert_eq!(
            RemoteAction::Successful("ok".to_string()).phase(),
            "successful"
        );
        assert_eq!(
            RemoteAction::<String>::Failed(RestClientError::new("boom")).phase(),
            "failed"
        );
    }

    #[test]
    fn in_progress_sets_flag_and_keeps_payloads() {
        let state = slice()
            .apply(&RemoteAction::Successful("ok".to_string()))
            .apply(&RemoteAction::InProgress);
        assert!(state.in_progress);
        assert_eq!(state.success_value.as_deref(), Some("ok"));
        assert!(state.error_value.is_none());
    }

    #[test]
    fn success_keeps_stale_error() {
        let state = slice()
            .apply(&RemoteAction::Failed(RestClientError::new("boom")))
            .apply(&RemoteAction::InProgress)
            .apply(&RemoteAction::Successful("ok".to_string()));
        assert!(!state.in_progress);
        assert_eq!(state.success_value.as_deref(), Some("ok"));
        assert_eq!(state.error_value.as_ref().map(|e| e.message.as_str()), Some("boom"));
    }

    #[test]
    fn failure_keeps_stale_success() {
        let state = slice()
            .apply(&RemoteAction::Successful("ok".to_string()))
            .apply(&RemoteAction::InProgress)
            .apply(&RemoteAction::Failed(RestClientError::new("boom")));
        assert!(!state.in_progress);
        assert!(state.has_succeeded());
        assert!(state.has_failed());
    }

    #[test]
    fn terminal_actions_are_idempotent() {
        let action = RemoteAction::Successful("ok".to_string());
        let once = slice().apply(&RemoteAction::InProgress).apply(&action);
        let twice = once.apply(&action);
        assert_eq!(once, twice);
    }
}
