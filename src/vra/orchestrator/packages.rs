//! Orchestrator packages

use serde::Serialize;

use crate::cli::{Cli, OutputFormat, PackageArgs};
use crate::config::api;
use crate::error::Result;
use crate::output::{output_items, render_table};
use crate::ui::{create_spinner, finish_spinner, finish_spinner_with_status};
use crate::vra::orchestrator::inventory::InventoryLink;
use crate::vra::query::Query;
use crate::vra::VraClient;

/// Orchestrator package. Package listings carry name attributes only.
#[derive(Serialize, Debug, Clone)]
pub struct OrchestratorPackage {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl OrchestratorPackage {
    pub fn from_link(link: &InventoryLink) -> Option<OrchestratorPackage> {
        Some(OrchestratorPackage {
            name: link.attr("name")?,
            description: link.attr("description"),
        })
    }
}

impl VraClient {
    /// Get orchestrator packages (conditions filter dialect)
    pub async fn get_orchestrator_packages(
        &self,
        query: &Query,
    ) -> Result<Vec<OrchestratorPackage>> {
        let path = format!("{}{}", api::VCO_PACKAGES, query.to_conditions());
        let links = self.get_inventory(&path, "fetch packages").await?;
        Ok(links
            .iter()
            .filter_map(OrchestratorPackage::from_link)
            .collect())
    }
}

/// Run the package get command
pub async fn run_package_command(client: &VraClient, args: &PackageArgs, cli: &Cli) -> Result<()> {
    let (top, skip) = cli.paging();
    let mut query = Query::new().top(top).skip(skip);
    if let Some(filter) = &args.filter {
        query = query.search(filter);
    }

    let spinner = create_spinner("Fetching packages...", cli.quiet());
    let packages = match client.get_orchestrator_packages(&query).await {
        Ok(packages) => packages,
        Err(e) => {
            finish_spinner(spinner, "Error");
            return Err(e);
        }
    };
    finish_spinner_with_status(spinner, &packages);

    if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
        return output_items(&packages, &cli.out);
    }
    if !packages.is_empty() {
        let rows = packages
            .iter()
            .map(|package| {
                vec![
                    package.name.clone(),
                    package.description.clone().unwrap_or_default(),
                ]
            })
            .collect();
        render_table(&["Name", "Description"], rows);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_orchestrator_packages() {
        let mock_server = MockServer::start().await;
        let client = VraClient::with_base_url("t", &mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/vco/api/packages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total": 2,
                "link": [
                    { "attributes": [ { "name": "name", "value": "com.corp.library" } ] },
                    { "attributes": [ { "name": "name", "value": "com.corp.tools" } ] }
                ]
            })))
            .mount(&mock_server)
            .await;

        let packages = client
            .get_orchestrator_packages(&Query::new())
            .await
            .unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].name, "com.corp.library");
    }
}
