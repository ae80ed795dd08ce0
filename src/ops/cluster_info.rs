//! Cluster information: topology snapshot of the connected cluster.

use crate::api::ClusterInfo;
use crate::remote::{RemoteAction, RemoteOperationState};
use crate::store::{Reducer, State};

use super::ApiAction;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClusterInfoState {
    pub get_cluster_info: RemoteOperationState<ClusterInfo>,
}

impl State for ClusterInfoState {}

#[derive(Debug, Clone, PartialEq)]
pub enum ClusterInfoAction {
    GetClusterInfo(RemoteAction<ClusterInfo>),
}

impl ClusterInfoAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetClusterInfo(_) => "get_cluster_info",
        }
    }
}

pub struct ClusterInfoReducer;

impl Reducer for ClusterInfoReducer {
    type State = ClusterInfoState;
    type Action = ApiAction;

    fn reduce(mut state: Self::State, action: &Self::Action) -> Self::State {
        let ApiAction::ClusterInfo(action) = action else {
            return state;
        };
        match action {
            ClusterInfoAction::GetClusterInfo(a) => {
                state.get_cluster_info = state.get_cluster_info.apply(a)
            }
        }
        state
    }
}
