use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::role_management::{
    domain::model::{
        enums::role_management_domain_error::RoleManagementDomainError,
        value_objects::{role_name::RoleName, user_id::UserId},
    },
    infrastructure::persistence::repositories::role_assignment_repository::{
        RoleAssignmentRecord, RoleAssignmentRepository,
    },
};

pub struct InMemoryRoleAssignmentRepositoryImpl {
    assignments: RwLock<HashMap<Uuid, Vec<RoleAssignmentRecord>>>,
}

impl InMemoryRoleAssignmentRepositoryImpl {
    pub fn new() -> Self {
        Self {
            assignments: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryRoleAssignmentRepositoryImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoleAssignmentRepository for InMemoryRoleAssignmentRepositoryImpl {
    async fn assign_role(
        &self,
        user_id: &UserId,
        role_name: &RoleName,
    ) -> Result<(), RoleManagementDomainError> {
        let mut assignments = self.assignments.write().await;
        let records = assignments.entry(user_id.value()).or_default();

        // a repeated (user, role) pair is recorded once
        if records.iter().any(|r| r.role_name == role_name.value()) {
            return Ok(());
        }

        records.push(RoleAssignmentRecord {
            user_id: user_id.value(),
            role_name: role_name.value().to_string(),
            assigned_at: Utc::now(),
        });

        Ok(())
    }

    async fn find_roles_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<String>, RoleManagementDomainError> {
        let assignments = self.assignments.read().await;

        Ok(assignments
            .get(&user_id.value())
            .map(|records| records.iter().map(|r| r.role_name.clone()).collect())
            .unwrap_or_default())
    }
}
