//! Key-value operations: record-level CRUD plus existence checks.

use crate::api::{Record, SimpleResponse};
use crate::remote::{RemoteAction, RemoteOperationState};
use crate::store::{Reducer, State};

use super::ApiAction;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyValueState {
    pub get_record: RemoteOperationState<Record>,
    pub create_record: RemoteOperationState<SimpleResponse>,
    pub update_record: RemoteOperationState<SimpleResponse>,
    pub replace_record: RemoteOperationState<SimpleResponse>,
    pub delete_record: RemoteOperationState<SimpleResponse>,
    pub record_exists: RemoteOperationState<SimpleResponse>,
}

impl State for KeyValueState {}

#[derive(Debug, Clone, PartialEq)]
pub enum KeyValueAction {
    GetRecord(RemoteAction<Record>),
    CreateRecord(RemoteAction<SimpleResponse>),
    UpdateRecord(RemoteAction<SimpleResponse>),
    ReplaceRecord(RemoteAction<SimpleResponse>),
    DeleteRecord(RemoteAction<SimpleResponse>),
    RecordExists(RemoteAction<SimpleResponse>),
}

impl KeyValueAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetRecord(_) => "get_record",
            Self::CreateRecord(_) => "create_record",
            Self::UpdateRecord(_) => "update_record",
            Self::ReplaceRecord(_) => "replace_record",
            Self::DeleteRecord(_) => "delete_record",
            Self::RecordExists(_) => "record_exists",
        }
    }
}

pub struct KeyValueReducer;

impl Reducer for KeyValueReducer {
    type State = KeyValueState;
    type Action = ApiAction;

    fn reduce(mut state: Self::State, action: &Self::Action) -> Self::State {
        let ApiAction::KeyValue(action) = action else {
            return state;
        };
        match action {
            KeyValueAction::GetRecord(a) => state.get_record = state.get_record.apply(a),
            KeyValueAction::CreateRecord(a) => state.create_record = state.create_record.apply(a),
            KeyValueAction::UpdateRecord(a) => state.update_record = state.update_record.apply(a),
            KeyValueAction::ReplaceRecord(a) => {
                state.replace_record = state.replace_record.apply(a)
            }
            KeyValueAction::DeleteRecord(a) => state.delete_record = state.delete_record.apply(a),
            KeyValueAction::RecordExists(a) => state.record_exists = state.record_exists.apply(a),
        }
        state
    }
}
