//! Info commands: raw info requests against the whole cluster or one node.

use crate::api::InfoMap;
use crate::remote::{RemoteAction, RemoteOperationState};
use crate::store::{Reducer, State};

use super::ApiAction;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InfoState {
    pub info_any: RemoteOperationState<InfoMap>,
    pub info_node: RemoteOperationState<InfoMap>,
}

impl State for InfoState {}

#[derive(Debug, Clone, PartialEq)]
pub enum InfoAction {
    InfoAny(RemoteAction<InfoMap>),
    InfoNode(RemoteAction<InfoMap>),
}

impl InfoAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::InfoAny(_) => "info_any",
            Self::InfoNode(_) => "info_node",
        }
    }
}

pub struct InfoReducer;

impl Reducer for InfoReducer {
    type State = InfoState;
    type Action = ApiAction;

    fn reduce(mut state: Self::State, action: &Self::Action) -> Self::State {
        let ApiAction::Info(action) = action else {
            return state;
        };
        match action {
            InfoAction::InfoAny(a) => state.info_any = state.info_any.apply(a),
            InfoAction::InfoNode(a) => state.info_node = state.info_node.apply(a),
        }
        state
    }
}
