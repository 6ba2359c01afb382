use crate::role_management::domain::model::{
    enums::role_management_domain_error::RoleManagementDomainError,
    value_objects::user_id::UserId,
};

#[derive(Clone, Debug)]
pub struct ListUserRolesQuery {
    user_id: UserId,
}

impl ListUserRolesQuery {
    pub fn new(user_id: String) -> Result<Self, RoleManagementDomainError> {
        Ok(Self {
            user_id: UserId::new(user_id)?,
        })
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}
