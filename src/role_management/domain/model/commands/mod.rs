pub mod assign_role_to_user_command;
