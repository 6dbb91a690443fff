//! Pipeline variables

mod api;
mod commands;
mod models;

pub use commands::{
    run_create_variable_command, run_delete_variable_command, run_update_variable_command,
    run_variable_command,
};
pub use models::Variable;
