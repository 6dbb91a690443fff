//! CLI argument parsing

mod common;
mod config_cmd;
mod create;
mod delete;
mod get;
mod update;

pub use common::OutputFormat;
pub use config_cmd::{
    ConfigAction, DeleteTargetArgs, GetTargetArgs, SetTargetArgs, UseTargetArgs,
};
pub use create::{CreateExecutionArgs, CreatePipelineArgs, CreateResource, CreateVariableArgs};
pub use delete::{DeleteArgs, DeleteResource};
pub use get::{
    ActionArgs, CatalogItemArgs, CategoryArgs, CloudAccountArgs, CloudTemplateArgs, EndpointArgs,
    ExecutionArgs, GetResource, PackageArgs, PipelineArgs, ProjectArgs, VariableArgs, WorkflowArgs,
};
pub use update::{UpdatePipelineArgs, UpdateResource, UpdateVariableArgs};

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Aria Automation CLI
#[derive(Parser, Debug)]
#[command(name = "vractl")]
#[command(version)]
#[command(about = "Explore and manage VMware Aria Automation resources", long_about = None)]
pub struct Cli {
    /// Target profile name (defaults to the config file's current target)
    #[arg(short = 't', long, global = true)]
    pub target: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Skip confirmation prompts for destructive operations
    #[arg(long, global = true)]
    pub confirm: bool,

    /// Do not validate the server's TLS certificate
    #[arg(long = "ignore-certificate-warnings", global = true)]
    pub ignore_certificate_warnings: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub out: OutputFormat,

    /// Maximum number of results to fetch
    #[arg(long, global = true)]
    pub count: Option<u32>,

    /// Number of results to skip
    #[arg(long, global = true)]
    pub skip: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get resources
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Create resources
    Create {
        #[command(subcommand)]
        resource: CreateResource,
    },

    /// Update resources
    Update {
        #[command(subcommand)]
        resource: UpdateResource,
    },

    /// Delete resources
    Delete {
        #[command(subcommand)]
        resource: DeleteResource,
    },

    /// Manage target profiles
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },

    /// Print version information
    Version,
}

impl Cli {
    /// Global paging flags as (top, skip)
    pub fn paging(&self) -> (Option<u32>, Option<u32>) {
        (self.count, self.skip)
    }

    /// Spinners are suppressed for machine-readable output
    pub fn quiet(&self) -> bool {
        !matches!(self.out, OutputFormat::Table)
    }
}
