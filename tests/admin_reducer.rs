use stockapp_state::api::{Privilege, RestClientError, Role, SimpleResponse};
use stockapp_state::ops::{AdminAction, AdminReducer, AdminState, ApiAction, TruncateAction};
use stockapp_state::remote::RemoteAction;
use stockapp_state::store::Reducer;

fn sysadmin() -> Role {
    Role {
        name: "sys-admin".to_string(),
        privileges: vec![Privilege {
            code: "sys-admin".to_string(),
            namespace: String::new(),
            set: String::new(),
        }],
    }
}

#[test]
fn get_role_successful_stores_payload() {
    let state = AdminReducer::reduce(
        AdminState::default(),
        &ApiAction::Admin(AdminAction::GetRole(RemoteAction::Successful(sysadmin()))),
    );
    assert_eq!(state.get_role.success_value, Some(sysadmin()));
    assert!(!state.get_role.in_progress);
}

#[test]
fn create_user_failed_stores_error() {
    let state = AdminReducer::reduce(
        AdminState::default(),
        &ApiAction::Admin(AdminAction::CreateUser(RemoteAction::Failed(
            RestClientError::new("user already exists"),
        ))),
    );
    assert_eq!(
        state.create_user.error_value.map(|e| e.message),
        Some("user already exists".to_string())
    );
}

#[test]
fn change_password_in_progress_only_sets_flag() {
    let state = AdminReducer::reduce(
        AdminState::default(),
        &ApiAction::Admin(AdminAction::ChangePassword(RemoteAction::InProgress)),
    );
    assert!(state.change_password.in_progress);
    assert!(state.change_password.success_value.is_none());
    assert!(state.change_password.error_value.is_none());
}

#[test]
fn foreign_group_action_is_identity() {
    let state = AdminReducer::reduce(
        AdminState::default(),
        &ApiAction::Admin(AdminAction::GrantRoles(RemoteAction::Successful(
            SimpleResponse::new("granted"),
        ))),
    );
    let after = AdminReducer::reduce(
        state.clone(),
        &ApiAction::Truncate(TruncateAction::TruncateSet(RemoteAction::InProgress)),
    );
    assert_eq!(state, after);
}

#[test]
fn sibling_operations_are_isolated() {
    let state = AdminReducer::reduce(
        AdminState::default(),
        &ApiAction::Admin(AdminAction::DropRole(RemoteAction::InProgress)),
    );
    assert!(state.drop_role.in_progress);
    assert!(state.drop_user.is_idle());
    assert!(state.revoke_privileges.is_idle());
}

#[test]
fn action_names_are_stable() {
    assert_eq!(
        AdminAction::GetUser(RemoteAction::<stockapp_state::api::User>::InProgress).name(),
        "get_user"
    );
    assert_eq!(
        AdminAction::RevokeRoles(RemoteAction::InProgress).name(),
        "revoke_roles"
    );
}
