use fieldops_axum_api::role_management::domain::model::{
    commands::assign_role_to_user_command::AssignRoleToUserCommand,
    queries::list_user_roles_query::ListUserRolesQuery,
};

// UUIDs de prueba consistentes
pub const USER_1_ID: &str = "01890f2a-3c4d-7e5f-8a9b-0c1d2e3f4a5b";
pub const USER_2_ID: &str = "0189a1b2-c3d4-7e6f-90ab-cdef01234567";

pub fn assign_role_command() -> AssignRoleToUserCommand {
    AssignRoleToUserCommand::new(USER_1_ID.to_string(), "TECHNICIAN".to_string())
        .expect("valid assign role command")
}

pub fn assign_role_command_with_role(role_name: &str) -> AssignRoleToUserCommand {
    AssignRoleToUserCommand::new(USER_1_ID.to_string(), role_name.to_string())
        .expect("valid assign role command")
}

pub fn list_roles_query() -> ListUserRolesQuery {
    ListUserRolesQuery::new(USER_1_ID.to_string()).expect("valid list roles query")
}
