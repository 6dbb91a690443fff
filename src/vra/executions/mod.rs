//! Pipeline executions

mod api;
mod commands;
mod models;

pub use commands::{
    run_create_execution_command, run_delete_execution_command, run_execution_command,
};
pub use models::Execution;
