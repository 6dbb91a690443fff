//! Create command resource definitions and arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resource types for the 'create' command
#[derive(Subcommand, Debug)]
pub enum CreateResource {
    /// Import a pipeline from a YAML definition
    #[command(visible_alias = "pipelines")]
    Pipeline(CreatePipelineArgs),

    /// Run a pipeline (creates an execution)
    #[command(visible_alias = "executions", visible_alias = "exec")]
    Execution(CreateExecutionArgs),

    /// Create a pipeline variable
    #[command(visible_alias = "variables", visible_alias = "var")]
    Variable(CreateVariableArgs),
}

/// Arguments for 'create pipeline'
#[derive(Parser, Debug)]
pub struct CreatePipelineArgs {
    /// Path to the pipeline YAML definition
    #[arg(long = "import-path", value_name = "FILE")]
    pub import_path: PathBuf,
}

/// Arguments for 'create execution'
#[derive(Parser, Debug)]
pub struct CreateExecutionArgs {
    /// Pipeline name or ID to run
    #[arg(long)]
    pub pipeline: String,

    /// Pipeline input parameters as a JSON object
    #[arg(long)]
    pub inputs: Option<String>,

    /// Comment recorded on the execution
    #[arg(long)]
    pub comments: Option<String>,
}

/// Arguments for 'create variable'
#[derive(Parser, Debug)]
pub struct CreateVariableArgs {
    /// Variable name
    #[arg(long)]
    pub name: String,

    /// Project the variable belongs to
    #[arg(short, long)]
    pub project: String,

    /// Variable type (REGULAR, SECRET, RESTRICTED)
    #[arg(long = "type", value_name = "TYPE", default_value = "REGULAR")]
    pub variable_type: String,

    /// Variable value
    #[arg(long)]
    pub value: String,

    /// Variable description
    #[arg(long)]
    pub description: Option<String>,
}
