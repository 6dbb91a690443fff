//! Cloud templates (blueprints)

mod api;
mod commands;
mod models;

pub use commands::{run_cloud_template_command, run_delete_cloud_template_command};
pub use models::CloudTemplate;
