//! Delete command resource definitions and arguments

use clap::{Parser, Subcommand};

/// Resource types for the 'delete' command
#[derive(Subcommand, Debug)]
pub enum DeleteResource {
    /// Delete a cloud account
    #[command(visible_alias = "cloudaccount")]
    CloudAccount(DeleteArgs),

    /// Delete a cloud template (blueprint)
    #[command(visible_alias = "cloudtemplate", visible_alias = "blueprint")]
    CloudTemplate(DeleteArgs),

    /// Delete a project
    #[command(visible_alias = "prj")]
    Project(DeleteArgs),

    /// Delete a pipeline
    Pipeline(DeleteArgs),

    /// Delete a pipeline execution
    #[command(visible_alias = "exec")]
    Execution(DeleteArgs),

    /// Delete a pipeline variable
    #[command(visible_alias = "var")]
    Variable(DeleteArgs),

    /// Delete a pipeline endpoint
    Endpoint(DeleteArgs),
}

/// Shared arguments for delete subcommands
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Resource name or ID
    pub name: String,

    /// Limit a name lookup to this project (pipeline-service resources)
    #[arg(short, long)]
    pub project: Option<String>,
}
