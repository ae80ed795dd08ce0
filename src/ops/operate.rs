//! Operate: multi-operation transactions against a single record.

use crate::api::Record;
use crate::remote::{RemoteAction, RemoteOperationState};
use crate::store::{Reducer, State};

use super::ApiAction;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OperateState {
    pub operate_namespace_key: RemoteOperationState<Record>,
    pub operate_namespace_set_key: RemoteOperationState<Record>,
}

impl State for OperateState {}

#[derive(Debug, Clone, PartialEq)]
pub enum OperateAction {
    OperateNamespaceKey(RemoteAction<Record>),
    OperateNamespaceSetKey(RemoteAction<Record>),
}

impl OperateAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::OperateNamespaceKey(_) => "operate_namespace_key",
            Self::OperateNamespaceSetKey(_) => "operate_namespace_set_key",
        }
    }
}

pub struct OperateReducer;

impl Reducer for OperateReducer {
    type State = OperateState;
    type Action = ApiAction;

    fn reduce(mut state: Self::State, action: &Self::Action) -> Self::State {
        let ApiAction::Operate(action) = action else {
            return state;
        };
        match action {
            OperateAction::OperateNamespaceKey(a) => {
                state.operate_namespace_key = state.operate_namespace_key.apply(a)
            }
            OperateAction::OperateNamespaceSetKey(a) => {
                state.operate_namespace_set_key = state.operate_namespace_set_key.apply(a)
            }
        }
        state
    }
}
