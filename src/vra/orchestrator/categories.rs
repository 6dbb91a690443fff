//! Orchestrator workflow categories

use serde::Serialize;

use crate::cli::{CategoryArgs, Cli, OutputFormat};
use crate::config::api;
use crate::error::Result;
use crate::output::{output_items, render_table};
use crate::ui::{create_spinner, finish_spinner, finish_spinner_with_status};
use crate::vra::orchestrator::inventory::InventoryLink;
use crate::vra::query::Query;
use crate::vra::VraClient;

/// Orchestrator category, flattened from inventory attributes
#[derive(Serialize, Debug, Clone)]
pub struct OrchestratorCategory {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_type: Option<String>,
}

impl OrchestratorCategory {
    pub fn from_link(link: &InventoryLink) -> Option<OrchestratorCategory> {
        Some(OrchestratorCategory {
            id: link.attr("id")?,
            name: link.attr("name")?,
            path: link.attr("path"),
            category_type: link.attr("type"),
        })
    }
}

impl VraClient {
    /// Get orchestrator categories (conditions filter dialect)
    pub async fn get_orchestrator_categories(
        &self,
        query: &Query,
    ) -> Result<Vec<OrchestratorCategory>> {
        let path = format!("{}{}", api::VCO_CATEGORIES, query.to_conditions());
        let links = self.get_inventory(&path, "fetch categories").await?;
        Ok(links
            .iter()
            .filter_map(OrchestratorCategory::from_link)
            .collect())
    }
}

/// Run the category get command
pub async fn run_category_command(
    client: &VraClient,
    args: &CategoryArgs,
    cli: &Cli,
) -> Result<()> {
    let (top, skip) = cli.paging();
    let mut query = Query::new().top(top).skip(skip);
    if let Some(filter) = &args.filter {
        query = query.search(filter);
    }

    let spinner = create_spinner("Fetching categories...", cli.quiet());
    let categories = match client.get_orchestrator_categories(&query).await {
        Ok(categories) => categories,
        Err(e) => {
            finish_spinner(spinner, "Error");
            return Err(e);
        }
    };
    finish_spinner_with_status(spinner, &categories);

    if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
        return output_items(&categories, &cli.out);
    }
    if !categories.is_empty() {
        let rows = categories
            .iter()
            .map(|category| {
                vec![
                    category.id.clone(),
                    category.name.clone(),
                    category.path.clone().unwrap_or_default(),
                    category.category_type.clone().unwrap_or_default(),
                ]
            })
            .collect();
        render_table(&["Id", "Name", "Path", "Type"], rows);
    }
    Ok(())
}
