//! Endpoint command handlers

use crate::cli::{Cli, DeleteArgs, EndpointArgs, OutputFormat};
use crate::error::{Result, VraError};
use crate::output::{output_items, output_raw, render_table};
use crate::ui::{confirm_destructive, create_spinner, finish_spinner, finish_spinner_with_status};
use crate::vra::query::Query;
use crate::vra::VraClient;

use super::models::Endpoint;

/// Run the endpoint get command
pub async fn run_endpoint_command(
    client: &VraClient,
    args: &EndpointArgs,
    cli: &Cli,
) -> Result<()> {
    if let Some(name) = &args.name {
        return get_single_endpoint(client, name, args.project.as_deref(), cli).await;
    }

    let (top, skip) = cli.paging();
    let query = Query::new()
        .eq_opt("project", args.project.as_deref())
        .top(top)
        .skip(skip);

    let spinner = create_spinner("Fetching endpoints...", cli.quiet());
    let endpoints = match client.get_endpoints(&query).await {
        Ok(endpoints) => endpoints,
        Err(e) => {
            finish_spinner(spinner, "Error");
            return Err(e);
        }
    };
    finish_spinner_with_status(spinner, &endpoints);

    if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
        return output_items(&endpoints, &cli.out);
    }
    if !endpoints.is_empty() {
        print_endpoints(&endpoints);
    }
    Ok(())
}

/// Run the endpoint delete command
pub async fn run_delete_endpoint_command(
    client: &VraClient,
    args: &DeleteArgs,
    cli: &Cli,
) -> Result<()> {
    let (endpoint, _) = resolve_endpoint(client, &args.name, args.project.as_deref()).await?;

    confirm_destructive(
        &format!("delete endpoint '{}' ({})", endpoint.name, endpoint.id),
        cli.confirm,
    )?;

    client.delete_endpoint(&endpoint.id).await?;
    println!("Deleted endpoint '{}'", endpoint.name);
    Ok(())
}

async fn get_single_endpoint(
    client: &VraClient,
    name: &str,
    project: Option<&str>,
    cli: &Cli,
) -> Result<()> {
    let spinner = create_spinner(&format!("Fetching endpoint '{}'...", name), cli.quiet());

    match resolve_endpoint(client, name, project).await {
        Ok((endpoint, raw)) => {
            finish_spinner(spinner, "Found");
            if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
                return output_raw(&raw, &cli.out);
            }
            print_endpoints(&[endpoint]);
            Ok(())
        }
        Err(e) => {
            finish_spinner(spinner, "Not found");
            Err(e)
        }
    }
}

async fn resolve_endpoint(
    client: &VraClient,
    name: &str,
    project: Option<&str>,
) -> Result<(Endpoint, serde_json::Value)> {
    if let Some(found) = client.get_endpoint_by_name(name, project).await? {
        return Ok(found);
    }
    if let Some(found) = client.get_endpoint_by_id(name).await? {
        return Ok(found);
    }
    Err(VraError::Api {
        status: 404,
        message: format!("Endpoint '{}' not found", name),
    })
}

fn print_endpoints(endpoints: &[Endpoint]) {
    let rows = endpoints
        .iter()
        .map(|endpoint| {
            vec![
                endpoint.id.clone(),
                endpoint.name.clone(),
                endpoint.project.clone().unwrap_or_default(),
                endpoint.type_name().to_string(),
                endpoint.description.clone().unwrap_or_default(),
            ]
        })
        .collect();
    render_table(&["Id", "Name", "Project", "Type", "Description"], rows);
}
