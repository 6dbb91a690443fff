//! Orchestrator workflows

use serde::Serialize;

use crate::cli::{Cli, OutputFormat, WorkflowArgs};
use crate::config::api;
use crate::error::Result;
use crate::output::{output_items, render_table};
use crate::ui::{create_spinner, finish_spinner, finish_spinner_with_status};
use crate::vra::orchestrator::inventory::InventoryLink;
use crate::vra::query::Query;
use crate::vra::VraClient;

/// Orchestrator workflow, flattened from inventory attributes
#[derive(Serialize, Debug, Clone)]
pub struct Workflow {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Workflow {
    /// Build from an inventory link; `None` when id or name is missing
    pub fn from_link(link: &InventoryLink) -> Option<Workflow> {
        Some(Workflow {
            id: link.attr("id")?,
            name: link.attr("name")?,
            version: link.attr("version"),
            category_name: link.attr("categoryName"),
            description: link.attr("description"),
        })
    }
}

impl VraClient {
    /// Get orchestrator workflows (conditions filter dialect)
    pub async fn get_workflows(&self, query: &Query) -> Result<Vec<Workflow>> {
        let path = format!("{}{}", api::VCO_WORKFLOWS, query.to_conditions());
        let links = self.get_inventory(&path, "fetch workflows").await?;
        Ok(links.iter().filter_map(Workflow::from_link).collect())
    }
}

/// Run the workflow get command
pub async fn run_workflow_command(
    client: &VraClient,
    args: &WorkflowArgs,
    cli: &Cli,
) -> Result<()> {
    let (top, skip) = cli.paging();
    let mut query = Query::new().top(top).skip(skip);
    if let Some(filter) = &args.filter {
        query = query.search(filter);
    }

    let spinner = create_spinner("Fetching workflows...", cli.quiet());
    let workflows = match client.get_workflows(&query).await {
        Ok(workflows) => workflows,
        Err(e) => {
            finish_spinner(spinner, "Error");
            return Err(e);
        }
    };
    finish_spinner_with_status(spinner, &workflows);

    if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
        return output_items(&workflows, &cli.out);
    }
    if !workflows.is_empty() {
        let rows = workflows
            .iter()
            .map(|wf| {
                vec![
                    wf.id.clone(),
                    wf.name.clone(),
                    wf.version.clone().unwrap_or_default(),
                    wf.category_name.clone().unwrap_or_default(),
                ]
            })
            .collect();
        render_table(&["Id", "Name", "Version", "Category"], rows);
    }
    Ok(())
}
