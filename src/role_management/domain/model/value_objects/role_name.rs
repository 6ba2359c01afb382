use crate::role_management::domain::model::enums::role_management_domain_error::RoleManagementDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RoleName(String);

impl RoleName {
    pub fn new(value: String) -> Result<Self, RoleManagementDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(RoleManagementDomainError::InvalidRoleName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
