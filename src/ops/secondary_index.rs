//! Secondary index methods: create, inspect, and drop indexes.

use crate::api::{IndexMetadata, InfoMap, SimpleResponse};
use crate::remote::{RemoteAction, RemoteOperationState};
use crate::store::{Reducer, State};

use super::ApiAction;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SecondaryIndexState {
    pub get_indexes: RemoteOperationState<Vec<IndexMetadata>>,
    pub create_index: RemoteOperationState<SimpleResponse>,
    pub get_index: RemoteOperationState<IndexMetadata>,
    pub drop_index: RemoteOperationState<SimpleResponse>,
    pub get_index_stats: RemoteOperationState<InfoMap>,
}

impl State for SecondaryIndexState {}

#[derive(Debug, Clone, PartialEq)]
pub enum SecondaryIndexAction {
    GetIndexes(RemoteAction<Vec<IndexMetadata>>),
    CreateIndex(RemoteAction<SimpleResponse>),
    GetIndex(RemoteAction<IndexMetadata>),
    DropIndex(RemoteAction<SimpleResponse>),
    GetIndexStats(RemoteAction<InfoMap>),
}

impl SecondaryIndexAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetIndexes(_) => "get_indexes",
            Self::CreateIndex(_) => "create_index",
            Self::GetIndex(_) => "get_index",
            Self::DropIndex(_) => "drop_index",
            Self::GetIndexStats(_) => "get_index_stats",
        }
    }
}

pub struct SecondaryIndexReducer;

impl Reducer for SecondaryIndexReducer {
    type State = SecondaryIndexState;
    type Action = ApiAction;

    fn reduce(mut state: Self::State, action: &Self::Action) -> Self::State {
        let ApiAction::SecondaryIndex(action) = action else {
            return state;
        };
        match action {
            SecondaryIndexAction::GetIndexes(a) => state.get_indexes = state.get_indexes.apply(a),
            SecondaryIndexAction::CreateIndex(a) => {
                state.create_index = state.create_index.apply(a)
            }
            SecondaryIndexAction::GetIndex(a) => state.get_index = state.get_index.apply(a),
            SecondaryIndexAction::DropIndex(a) => state.drop_index = state.drop_index.apply(a),
            SecondaryIndexAction::GetIndexStats(a) => {
                state.get_index_stats = state.get_index_stats.apply(a)
            }
        }
        state
    }
}
