//! vractl - Explore and manage VMware Aria Automation
//!
//! A CLI client for the Aria Automation (formerly vRealize Automation) REST
//! APIs: catalog items, cloud accounts, cloud templates, projects, pipelines,
//! executions, variables, endpoints and orchestrator inventory.
//!
//! # Features
//!
//! - Named target profiles with automatic token refresh and persistence
//! - Filtered queries across three API filter dialects
//! - Multiple output formats (table, JSON, YAML)
//! - Parallel fetching of paged list responses
//!
//! # Example
//!
//! ```bash
//! # Configure a target once
//! vractl config set-target prod --server vra.corp.local --username admin --password '...'
//!
//! # List pipelines in a project
//! vractl get pipeline --project demo
//!
//! # Run a pipeline with inputs
//! vractl create execution --pipeline build-and-deploy --inputs '{"branch":"main"}'
//!
//! # Raw API output
//! vractl get project demo --out json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod target;
pub mod ui;
pub mod vra;

pub use cli::{Cli, Command, ConfigAction, CreateResource, DeleteResource, GetResource,
    OutputFormat, UpdateResource};
pub use error::{Result, VraError};
pub use target::{run_config_command, Target, TargetEntry, TargetSource, TargetStore};
pub use vra::{
    ensure_connection, run_action_command, run_catalog_item_command, run_category_command,
    run_cloud_account_command, run_cloud_template_command, run_create_execution_command,
    run_create_pipeline_command, run_create_variable_command, run_delete_cloud_account_command,
    run_delete_cloud_template_command, run_delete_endpoint_command, run_delete_execution_command,
    run_delete_pipeline_command, run_delete_project_command, run_delete_variable_command,
    run_endpoint_command, run_execution_command, run_package_command, run_pipeline_command,
    run_project_command, run_update_pipeline_command, run_update_variable_command,
    run_variable_command, run_workflow_command, CatalogItem, CloudAccount, CloudTemplate,
    Endpoint, Execution, Pipeline, Project, Variable, VraClient, VraResource, Workflow,
};
