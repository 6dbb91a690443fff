//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get catalog items
    #[command(
        visible_alias = "catalogitem",
        visible_alias = "catalog-items",
        visible_alias = "catalogitems"
    )]
    CatalogItem(CatalogItemArgs),

    /// Get cloud accounts
    #[command(visible_alias = "cloudaccount", visible_alias = "cloud-accounts")]
    CloudAccount(CloudAccountArgs),

    /// Get cloud templates (blueprints)
    #[command(
        visible_alias = "cloudtemplate",
        visible_alias = "cloud-templates",
        visible_alias = "blueprint",
        visible_alias = "blueprints"
    )]
    CloudTemplate(CloudTemplateArgs),

    /// Get projects
    #[command(visible_alias = "projects", visible_alias = "prj")]
    Project(ProjectArgs),

    /// Get pipelines
    #[command(visible_alias = "pipelines")]
    Pipeline(PipelineArgs),

    /// Get pipeline executions
    #[command(visible_alias = "executions", visible_alias = "exec")]
    Execution(ExecutionArgs),

    /// Get pipeline variables
    #[command(visible_alias = "variables", visible_alias = "var")]
    Variable(VariableArgs),

    /// Get pipeline endpoints
    #[command(visible_alias = "endpoints")]
    Endpoint(EndpointArgs),

    /// Get orchestrator workflows
    #[command(visible_alias = "workflows", visible_alias = "wf")]
    Workflow(WorkflowArgs),

    /// Get orchestrator actions
    #[command(visible_alias = "actions")]
    Action(ActionArgs),

    /// Get orchestrator workflow categories
    #[command(visible_alias = "categories")]
    Category(CategoryArgs),

    /// Get orchestrator packages
    #[command(visible_alias = "packages")]
    Package(PackageArgs),
}

/// Arguments for 'get catalog-item'
#[derive(Parser, Debug)]
pub struct CatalogItemArgs {
    /// Catalog item ID (if specified, shows details for that item)
    pub id: Option<String>,

    /// Server-side search term
    #[arg(short, long)]
    pub filter: Option<String>,
}

/// Arguments for 'get cloud-account'
#[derive(Parser, Debug)]
pub struct CloudAccountArgs {
    /// Cloud account name or ID
    pub name: Option<String>,

    /// Filter accounts by name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,
}

/// Arguments for 'get cloud-template'
#[derive(Parser, Debug)]
pub struct CloudTemplateArgs {
    /// Cloud template name or ID
    pub name: Option<String>,

    /// Server-side search term
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Limit to templates in this project
    #[arg(short, long)]
    pub project: Option<String>,
}

/// Arguments for 'get project'
#[derive(Parser, Debug)]
pub struct ProjectArgs {
    /// Project name or ID
    pub name: Option<String>,

    /// Filter projects by name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,
}

/// Arguments for 'get pipeline'
#[derive(Parser, Debug)]
pub struct PipelineArgs {
    /// Pipeline name or ID
    pub name: Option<String>,

    /// Limit to pipelines in this project
    #[arg(short, long)]
    pub project: Option<String>,

    /// Include an execution count per pipeline (extra API call)
    #[arg(long)]
    pub with_executions: bool,
}

/// Arguments for 'get execution'
#[derive(Parser, Debug)]
pub struct ExecutionArgs {
    /// Execution ID
    pub id: Option<String>,

    /// Limit to executions in this project
    #[arg(short, long)]
    pub project: Option<String>,

    /// Limit to executions of this pipeline name
    #[arg(long)]
    pub pipeline: Option<String>,

    /// Limit to executions in this status (e.g. COMPLETED, FAILED)
    #[arg(long)]
    pub status: Option<String>,
}

/// Arguments for 'get variable'
#[derive(Parser, Debug)]
pub struct VariableArgs {
    /// Variable name or ID
    pub name: Option<String>,

    /// Limit to variables in this project
    #[arg(short, long)]
    pub project: Option<String>,
}

/// Arguments for 'get endpoint'
#[derive(Parser, Debug)]
pub struct EndpointArgs {
    /// Endpoint name or ID
    pub name: Option<String>,

    /// Limit to endpoints in this project
    #[arg(short, long)]
    pub project: Option<String>,
}

/// Arguments for 'get workflow'
#[derive(Parser, Debug)]
pub struct WorkflowArgs {
    /// Filter workflows by name (server-side substring match)
    #[arg(short, long)]
    pub filter: Option<String>,
}

/// Arguments for 'get action'
#[derive(Parser, Debug)]
pub struct ActionArgs {
    /// Filter actions by name (server-side substring match)
    #[arg(short, long)]
    pub filter: Option<String>,
}

/// Arguments for 'get category'
#[derive(Parser, Debug)]
pub struct CategoryArgs {
    /// Filter categories by name (server-side substring match)
    #[arg(short, long)]
    pub filter: Option<String>,
}

/// Arguments for 'get package'
#[derive(Parser, Debug)]
pub struct PackageArgs {
    /// Filter packages by name (server-side substring match)
    #[arg(short, long)]
    pub filter: Option<String>,
}
