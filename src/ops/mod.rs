//! Action sets, state slices, and reducers for every operation group the
//! REST client exposes.
//!
//! Each group owns a disjoint slice of [`ApiState`]. A group reducer reacts
//! only to its own group's actions and passes its slice through unchanged
//! for everything else, so folding all of them applies exactly one slice
//! transition per action.

pub mod admin;
pub mod batch_read;
pub mod cluster_info;
pub mod info;
pub mod key_value;
pub mod operate;
pub mod secondary_index;
pub mod truncate;

pub use admin::{AdminAction, AdminReducer, AdminState};
pub use batch_read::{BatchReadAction, BatchReadReducer, BatchReadState};
pub use cluster_info::{ClusterInfoAction, ClusterInfoReducer, ClusterInfoState};
pub use info::{InfoAction, InfoReducer, InfoState};
pub use key_value::{KeyValueAction, KeyValueReducer, KeyValueState};
pub use operate::{OperateAction, OperateReducer, OperateState};
pub use secondary_index::{SecondaryIndexAction, SecondaryIndexReducer, SecondaryIndexState};
pub use truncate::{TruncateAction, TruncateReducer, TruncateState};

use crate::store::{Action, Reducer, State};

/// Root state: one slice per operation group, fixed at compile time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApiState {
    pub admin: AdminState,
    pub batch_read: BatchReadState,
    pub cluster_info: ClusterInfoState,
    pub secondary_index: SecondaryIndexState,
    pub info: InfoState,
    pub key_value: KeyValueState,
    pub operate: OperateState,
    pub truncate: TruncateState,
}

impl State for ApiState {}

/// Root action type: every group's actions, under one tag.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiAction {
    Admin(AdminAction),
    BatchRead(BatchReadAction),
    ClusterInfo(ClusterInfoAction),
    SecondaryIndex(SecondaryIndexAction),
    Info(InfoAction),
    KeyValue(KeyValueAction),
    Operate(OperateAction),
    Truncate(TruncateAction),
}

impl Action for ApiAction {
    fn name(&self) -> &'static str {
        match self {
            ApiAction::Admin(action) => action.name(),
            ApiAction::BatchRead(action) => action.name(),
            ApiAction::ClusterInfo(action) => action.name(),
            ApiAction::SecondaryIndex(action) => action.name(),
            ApiAction::Info(action) => action.name(),
            ApiAction::KeyValue(action) => action.name(),
            ApiAction::Operate(action) => action.name(),
            ApiAction::Truncate(action) => action.name(),
        }
    }
}

impl From<AdminAction> for ApiAction {
    fn from(action: AdminAction) -> Self {
        ApiAction::Admin(action)
    }
}

impl From<BatchReadAction> for ApiAction {
    fn from(action: BatchReadAction) -> Self {
        ApiAction::BatchRead(action)
    }
}

impl From<ClusterInfoAction> for ApiAction {
    fn from(action: ClusterInfoAction) -> Self {
        ApiAction::ClusterInfo(action)
    }
}

impl From<SecondaryIndexAction> for ApiAction {
    fn from(action: SecondaryIndexAction) -> Self {
        ApiAction::SecondaryIndex(action)
    }
}

impl From<InfoAction> for ApiAction {
    fn from(action: InfoAction) -> Self {
        ApiAction::Info(action)
    }
}

impl From<KeyValueAction> for ApiAction {
    fn from(action: KeyValueAction) -> Self {
        ApiAction::KeyValue(action)
    }
}

impl From<OperateAction> for ApiAction {
    fn from(action: OperateAction) -> Self {
        ApiAction::Operate(action)
    }
}

impl From<TruncateAction> for ApiAction {
    fn from(action: TruncateAction) -> Self {
        ApiAction::Truncate(action)
    }
}

/// Folds every group reducer over the root state.
pub struct ApiReducer;

impl Reducer for ApiReducer {
    type State = ApiState;
    type Action = ApiAction;

    fn reduce(state: Self::State, action: &Self::Action) -> Self::State {
        // Fixed sequence; the order is immaterial because each group owns
        // a disjoint slice.
        ApiState {
            admin: AdminReducer::reduce(state.admin, action),
            batch_read: BatchReadReducer::reduce(state.batch_read, action),
            cluster_info: ClusterInfoReducer::reduce(state.cluster_info, action),
            secondary_index: SecondaryIndexReducer::reduce(state.secondary_index, action),
            info: InfoReducer::reduce(state.info, action),
            key_value: KeyValueReducer::reduce(state.key_value, action),
            operate: OperateReducer::reduce(state.operate, action),
            truncate: TruncateReducer::reduce(state.truncate, action),
        }
    }
}
