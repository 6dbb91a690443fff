//! IaaS projects

mod api;
mod commands;
mod models;

pub use commands::{run_delete_project_command, run_project_command};
pub use models::{Project, UserRef};
