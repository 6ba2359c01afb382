use uuid::Uuid;

use crate::role_management::domain::model::enums::role_management_domain_error::RoleManagementDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new(value: String) -> Result<Self, RoleManagementDomainError> {
        let parsed = Uuid::parse_str(value.trim())
            .map_err(|_| RoleManagementDomainError::InvalidUserId)?;
        Ok(Self(parsed))
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}
