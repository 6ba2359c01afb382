use crate::role_management::domain::model::{
    enums::role_management_domain_error::RoleManagementDomainError,
    value_objects::{role_name::RoleName, user_id::UserId},
};

#[derive(Clone, Debug)]
pub struct AssignRoleToUserCommand {
    user_id: UserId,
    role_name: RoleName,
}

impl AssignRoleToUserCommand {
    pub fn new(user_id: String, role_name: String) -> Result<Self, RoleManagementDomainError> {
        Ok(Self {
            user_id: UserId::new(user_id)?,
            role_name: RoleName::new(role_name)?,
        })
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
    pub fn role_name(&self) -> &RoleName {
        &self.role_name
    }
}
