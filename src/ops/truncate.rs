//! Truncate operations: namespace- and set-level truncation.

use crate::api::SimpleResponse;
use crate::remote::{RemoteAction, RemoteOperationState};
use crate::store::{Reducer, State};

use super::ApiAction;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TruncateState {
    pub truncate_namespace: RemoteOperationState<SimpleResponse>,
    pub truncate_set: RemoteOperationState<SimpleResponse>,
}

impl State for TruncateState {}

#[derive(Debug, Clone, PartialEq)]
pub enum TruncateAction {
    TruncateNamespace(RemoteAction<SimpleResponse>),
    TruncateSet(RemoteAction<SimpleResponse>),
}

impl TruncateAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TruncateNamespace(_) => "truncate_namespace",
            Self::TruncateSet(_) => "truncate_set",
        }
    }
}

pub struct TruncateReducer;

impl Reducer for TruncateReducer {
    type State = TruncateState;
    type Action = ApiAction;

    fn reduce(mut state: Self::State, action: &Self::Action) -> Self::State {
        let ApiAction::Truncate(action) = action else {
            return state;
        };
        match action {
            TruncateAction::TruncateNamespace(a) => {
                state.truncate_namespace = state.truncate_namespace.apply(a)
            }
            TruncateAction::TruncateSet(a) => state.truncate_set = state.truncate_set.apply(a),
        }
        state
    }
}
