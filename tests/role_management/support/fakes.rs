use std::sync::Mutex;

use async_trait::async_trait;
use fieldops_axum_api::role_management::{
    domain::model::{
        enums::role_management_domain_error::RoleManagementDomainError,
        value_objects::{role_name::RoleName, user_id::UserId},
    },
    infrastructure::persistence::repositories::role_assignment_repository::RoleAssignmentRepository,
};

#[derive(Default)]
struct FakeRoleAssignmentState {
    assign_calls: usize,
    find_calls: usize,
    last_assignment: Option<(String, String)>,
    roles_to_return: Vec<String>,
}

pub struct FakeRoleAssignmentRepository {
    state: Mutex<FakeRoleAssignmentState>,
}

impl FakeRoleAssignmentRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeRoleAssignmentState::default()),
        }
    }

    pub fn set_roles(&self, roles: Vec<String>) {
        self.state.lock().expect("mutex poisoned").roles_to_return = roles;
    }

    pub fn assign_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").assign_calls
    }

    pub fn find_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").find_calls
    }

    pub fn last_assignment(&self) -> Option<(String, String)> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .last_assignment
            .clone()
    }
}

#[async_trait]
impl RoleAssignmentRepository for FakeRoleAssignmentRepository {
    async fn assign_role(
        &self,
        user_id: &UserId,
        role_name: &RoleName,
    ) -> Result<(), RoleManagementDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.assign_calls += 1;
        state.last_assignment = Some((
            user_id.value().to_string(),
            role_name.value().to_string(),
        ));
        Ok(())
    }

    async fn find_roles_by_user(
        &self,
        _user_id: &UserId,
    ) -> Result<Vec<String>, RoleManagementDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.find_calls += 1;
        Ok(state.roles_to_return.clone())
    }
}
