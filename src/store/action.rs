//! Base trait for actions dispatched through the store.

/// Trait for action objects.
///
/// Actions represent:
/// - Outcomes of remote calls (success, failure)
/// - Progress markers dispatched before a call is issued
///
/// Actions are processed by reducers to produce new states.
pub trait Action: Send + 'static {
    /// Stable identifier of the operation this action belongs to,
    /// used for structured logging.
    fn name(&self) -> &'static str;
}
