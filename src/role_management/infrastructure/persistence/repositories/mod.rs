pub mod in_memory;
pub mod role_assignment_repository;
