//! Pipeline service pipelines

mod api;
mod commands;
mod models;

pub use commands::{
    run_create_pipeline_command, run_delete_pipeline_command, run_pipeline_command,
    run_update_pipeline_command,
};
pub(crate) use commands::resolve_pipeline;
pub use models::Pipeline;
