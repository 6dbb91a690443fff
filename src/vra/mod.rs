//! Aria Automation API client module
//!
//! This module provides the HTTP client, the connection manager and one
//! submodule per resource type.

pub mod catalog_items;
mod client;
pub mod cloud_accounts;
pub mod cloud_templates;
pub mod connection;
pub mod endpoints;
pub mod executions;
pub mod orchestrator;
pub mod pipelines;
pub mod projects;
pub mod query;
pub mod traits;
pub mod variables;

pub use catalog_items::{run_catalog_item_command, CatalogItem, CatalogItemType};
pub use client::VraClient;
pub use cloud_accounts::{
    run_cloud_account_command, run_delete_cloud_account_command, CloudAccount,
};
pub use cloud_templates::{
    run_cloud_template_command, run_delete_cloud_template_command, CloudTemplate,
};
pub use connection::ensure_connection;
pub use endpoints::{run_delete_endpoint_command, run_endpoint_command, Endpoint};
pub use executions::{
    run_create_execution_command, run_delete_execution_command, run_execution_command, Execution,
};
pub use orchestrator::{
    run_action_command, run_category_command, run_package_command, run_workflow_command,
    OrchestratorAction, OrchestratorCategory, OrchestratorPackage, Workflow,
};
pub use pipelines::{
    run_create_pipeline_command, run_delete_pipeline_command, run_pipeline_command,
    run_update_pipeline_command, Pipeline,
};
pub use projects::{run_delete_project_command, run_project_command, Project};
pub use query::Query;
pub use traits::{ContentPage, DocumentsPage, VraResource};
pub use variables::{
    run_create_variable_command, run_delete_variable_command, run_update_variable_command,
    run_variable_command, Variable,
};
