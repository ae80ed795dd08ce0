//! Admin operations: user and role management.

use crate::api::{Role, SimpleResponse, User};
use crate::remote::{RemoteAction, RemoteOperationState};
use crate::store::{Reducer, State};

use super::ApiAction;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminState {
    pub get_roles: RemoteOperationState<SimpleResponse>,
    pub create_role: RemoteOperationState<SimpleResponse>,
    pub get_role: RemoteOperationState<Role>,
    pub drop_role: RemoteOperationState<SimpleResponse>,
    pub grant_privileges: RemoteOperationState<SimpleResponse>,
    pub revoke_privileges: RemoteOperationState<SimpleResponse>,
    pub get_users: RemoteOperationState<SimpleResponse>,
    pub create_user: RemoteOperationState<SimpleResponse>,
    pub get_user: RemoteOperationState<User>,
    pub drop_user: RemoteOperationState<SimpleResponse>,
    pub change_password: RemoteOperationState<SimpleResponse>,
    pub grant_roles: RemoteOperationState<SimpleResponse>,
    pub revoke_roles: RemoteOperationState<SimpleResponse>,
}

impl State for AdminState {}

#[derive(Debug, Clone, PartialEq)]
pub enum AdminAction {
    GetRoles(RemoteAction<SimpleResponse>),
    CreateRole(RemoteAction<SimpleResponse>),
    GetRole(RemoteAction<Role>),
    DropRole(RemoteAction<SimpleResponse>),
    GrantPrivileges(RemoteAction<SimpleResponse>),
    RevokePrivileges(RemoteAction<SimpleResponse>),
    GetUsers(RemoteAction<SimpleResponse>),
    CreateUser(RemoteAction<SimpleResponse>),
    GetUser(RemoteAction<User>),
    DropUser(RemoteAction<SimpleResponse>),
    ChangePassword(RemoteAction<SimpleResponse>),
    GrantRoles(RemoteAction<SimpleResponse>),
    RevokeRoles(RemoteAction<SimpleResponse>),
}

impl AdminAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::GetRoles(_) => "get_roles",
            Self::CreateRole(_) => "create_role",
            Self::GetRole(_) => "get_role",
            Self::DropRole(_) => "drop_role",
            Self::GrantPrivileges(_) => "grant_privileges",
            Self::RevokePrivileges(_) => "revoke_privileges",
            Self::GetUsers(_) => "get_users",
            Self::CreateUser(_) => "create_user",
            Self::GetUser(_) => "get_user",
            Self::DropUser(_) => "drop_user",
            Self::ChangePassword(_) => "change_password",
            Self::GrantRoles(_) => "grant_roles",
            Self::RevokeRoles(_) => "revoke_roles",
        }
    }
}

pub struct AdminReducer;

impl Reducer for AdminReducer {
    type State = AdminState;
    type Action = ApiAction;

    fn reduce(mut state: Self::State, action: &Self::Action) -> Self::State {
        let ApiAction::Admin(action) = action else {
            return state;
        };
        match action {
            AdminAction::GetRoles(a) => state.get_roles = state.get_roles.apply(a),
            AdminAction::CreateRole(a) => state.create_role = state.create_role.apply(a),
            AdminAction::GetRole(a) => state.get_role = state.get_role.apply(a),
            AdminAction::DropRole(a) => state.drop_role = state.drop_role.apply(a),
            AdminAction::GrantPrivileges(a) => {
                state.grant_privileges = state.grant_privileges.apply(a)
            }
            AdminAction::RevokePrivileges(a) => {
                state.revoke_privileges = state.revoke_privileges.apply(a)
            }
            AdminAction::GetUsers(a) => state.get_users = state.get_users.apply(a),
            AdminAction::CreateUser(a) => state.create_user = state.create_user.apply(a),
            AdminAction::GetUser(a) => state.get_user = state.get_user.apply(a),
            AdminAction::DropUser(a) => state.drop_user = state.drop_user.apply(a),
            AdminAction::ChangePassword(a) => {
                state.change_password = state.change_password.apply(a)
            }
            AdminAction::GrantRoles(a) => state.grant_roles = state.grant_roles.apply(a),
            AdminAction::RevokeRoles(a) => state.revoke_roles = state.revoke_roles.apply(a),
        }
        state
    }
}
