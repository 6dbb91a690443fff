//! Update command resource definitions and arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resource types for the 'update' command
#[derive(Subcommand, Debug)]
pub enum UpdateResource {
    /// Update a pipeline from a YAML definition
    #[command(visible_alias = "pipelines")]
    Pipeline(UpdatePipelineArgs),

    /// Update a pipeline variable
    #[command(visible_alias = "variables", visible_alias = "var")]
    Variable(UpdateVariableArgs),
}

/// Arguments for 'update pipeline'
#[derive(Parser, Debug)]
pub struct UpdatePipelineArgs {
    /// Path to the pipeline YAML definition (must carry the pipeline name)
    #[arg(long = "import-path", value_name = "FILE")]
    pub import_path: PathBuf,
}

/// Arguments for 'update variable'
#[derive(Parser, Debug)]
pub struct UpdateVariableArgs {
    /// Variable name or ID
    pub name: String,

    /// Limit the lookup to this project
    #[arg(short, long)]
    pub project: Option<String>,

    /// New value
    #[arg(long)]
    pub value: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,
}
