//! Config command definitions: target profile management

use clap::{Parser, Subcommand};

/// Actions for the 'config' command
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show one target profile, or list all of them
    #[command(visible_alias = "get-targets")]
    GetTarget(GetTargetArgs),

    /// Create or update a target profile
    SetTarget(SetTargetArgs),

    /// Make a target profile the default for future invocations
    UseTarget(UseTargetArgs),

    /// Remove a target profile
    DeleteTarget(DeleteTargetArgs),
}

/// Arguments for 'config get-target'
#[derive(Parser, Debug)]
pub struct GetTargetArgs {
    /// Target profile name (lists all when omitted)
    pub name: Option<String>,
}

/// Arguments for 'config set-target'
#[derive(Parser, Debug)]
pub struct SetTargetArgs {
    /// Target profile name
    pub name: String,

    /// Server hostname, e.g. vra.corp.local or api.mgmt.cloud.vmware.com
    #[arg(long)]
    pub server: Option<String>,

    /// Identity domain for enhanced login
    #[arg(long)]
    pub domain: Option<String>,

    /// Username for credential login
    #[arg(long)]
    pub username: Option<String>,

    /// Password for credential login
    #[arg(long)]
    pub password: Option<String>,

    /// Long-lived API (refresh) token
    #[arg(long = "api-token")]
    pub api_token: Option<String>,
}

/// Arguments for 'config use-target'
#[derive(Parser, Debug)]
pub struct UseTargetArgs {
    /// Target profile name
    pub name: String,
}

/// Arguments for 'config delete-target'
#[derive(Parser, Debug)]
pub struct DeleteTargetArgs {
    /// Target profile name
    pub name: String,
}
