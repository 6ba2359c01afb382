pub mod in_memory_role_assignment_repository_impl;
