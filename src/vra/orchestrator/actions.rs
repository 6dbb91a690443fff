//! Orchestrator actions

use serde::Serialize;

use crate::cli::{ActionArgs, Cli, OutputFormat};
use crate::config::api;
use crate::error::Result;
use crate::output::{output_items, render_table};
use crate::ui::{create_spinner, finish_spinner, finish_spinner_with_status};
use crate::vra::orchestrator::inventory::InventoryLink;
use crate::vra::query::Query;
use crate::vra::VraClient;

/// Orchestrator action, flattened from inventory attributes
#[derive(Serialize, Debug, Clone)]
pub struct OrchestratorAction {
    pub id: String,
    pub name: String,
    /// Fully qualified name, module included (e.g. com.corp.tools/createTicket)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fqn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl OrchestratorAction {
    pub fn from_link(link: &InventoryLink) -> Option<OrchestratorAction> {
        Some(OrchestratorAction {
            id: link.attr("id")?,
            name: link.attr("name")?,
            fqn: link.attr("fqn"),
            version: link.attr("version"),
        })
    }
}

impl VraClient {
    /// Get orchestrator actions (conditions filter dialect)
    pub async fn get_orchestrator_actions(
        &self,
        query: &Query,
    ) -> Result<Vec<OrchestratorAction>> {
        let path = format!("{}{}", api::VCO_ACTIONS, query.to_conditions());
        let links = self.get_inventory(&path, "fetch actions").await?;
        Ok(links.iter().filter_map(OrchestratorAction::from_link).collect())
    }
}

/// Run the action get command
pub async fn run_action_command(client: &VraClient, args: &ActionArgs, cli: &Cli) -> Result<()> {
    let (top, skip) = cli.paging();
    let mut query = Query::new().top(top).skip(skip);
    if let Some(filter) = &args.filter {
        query = query.search(filter);
    }

    let spinner = create_spinner("Fetching actions...", cli.quiet());
    let actions = match client.get_orchestrator_actions(&query).await {
        Ok(actions) => actions,
        Err(e) => {
            finish_spinner(spinner, "Error");
            return Err(e);
        }
    };
    finish_spinner_with_status(spinner, &actions);

    if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
        return output_items(&actions, &cli.out);
    }
    if !actions.is_empty() {
        let rows = actions
            .iter()
            .map(|action| {
                vec![
                    action.id.clone(),
                    action.name.clone(),
                    action.fqn.clone().unwrap_or_default(),
                    action.version.clone().unwrap_or_default(),
                ]
            })
            .collect();
        render_table(&["Id", "Name", "FQN", "Version"], rows);
    }
    Ok(())
}
