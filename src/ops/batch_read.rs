//! Batch read: fetch several records in one round trip.

use crate::api::BatchRead;
use crate::remote::{RemoteAction, RemoteOperationState};
use crate::store::{Reducer, State};

use super::ApiAction;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchReadState {
    pub perform_batch_read: RemoteOperationState<Vec<BatchRead>>,
}

impl State for BatchReadState {}

#[derive(Debug, Clone, PartialEq)]
pub enum BatchReadAction {
    PerformBatchRead(RemoteAction<Vec<BatchRead>>),
}

impl BatchReadAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PerformBatchRead(_) => "perform_batch_read",
        }
    }
}

pub struct BatchReadReducer;

impl Reducer for BatchReadReducer {
    type State = BatchReadState;
    type Action = ApiAction;

    fn reduce(mut state: Self::State, action: &Self::Action) -> Self::State {
        let ApiAction::BatchRead(action) = action else {
            return state;
        };
        match action {
            BatchReadAction::PerformBatchRead(a) => {
                state.perform_batch_read = state.perform_batch_read.apply(a)
            }
        }
        state
    }
}
