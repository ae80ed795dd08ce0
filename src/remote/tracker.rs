//! Brackets an async call with the in-progress / terminal action pair.

use std::future::Future;

use crate::api::RestClientError;

use super::RemoteAction;

/// Run one remote call, dispatching `InProgress` before awaiting it and
/// the matching terminal action after.
///
/// The call itself is supplied by the caller; this helper performs no
/// network I/O, scheduling, or cancellation. `wrap` lifts the operation's
/// triplet into the action type the sink accepts, and `dispatch` is
/// typically a closure over a store lock.
pub async fn track<T, A, W, D, F>(mut dispatch: D, wrap: W, call: F) -> Result<T, RestClientError>
where
    T: Clone,
    W: Fn(RemoteAction<T>) -> A,
    D: FnMut(A),
    F: Future<Output = Result<T, RestClientError>>,
{
    let action = RemoteAction::InProgress;
    tracing::debug!(phase = action.phase(), "remote operation dispatched");
    dispatch(wrap(action));

    match call.await {
        Ok(payload) => {
            let action = RemoteAction::Successful(payload.clone());
            tracing::debug!(phase = action.phase(), "remote operation dispatched");
            dispatch(wrap(action));
            Ok(payload)
        }
        Err(error) => {
            let action = RemoteAction::Failed(error.clone());
            tracing::debug!(phase = action.phase(), error = %error, "remote operation dispatched");
            dispatch(wrap(action));
            Err(error)
        }
    }
}
