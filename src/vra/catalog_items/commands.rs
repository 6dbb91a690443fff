//! Catalog item command handlers

use crate::cli::{CatalogItemArgs, Cli, OutputFormat};
use crate::config::api;
use crate::error::{Result, VraError};
use crate::output::{output_items, output_raw, render_table};
use crate::ui::{create_spinner, finish_spinner, finish_spinner_with_status};
use crate::vra::query::Query;
use crate::vra::VraClient;

use super::models::CatalogItem;

/// Run the catalog item get command
pub async fn run_catalog_item_command(
    client: &VraClient,
    args: &CatalogItemArgs,
    cli: &Cli,
) -> Result<()> {
    if let Some(id) = &args.id {
        return get_single_catalog_item(client, id, cli).await;
    }

    let (top, skip) = cli.paging();
    let mut query = Query::new().top(top.or(Some(api::DEFAULT_PAGE_SIZE))).skip(skip);
    if let Some(filter) = &args.filter {
        query = query.search(filter);
    }

    let spinner = create_spinner("Fetching catalog items...", cli.quiet());
    let items = match client.get_catalog_items(&query).await {
        Ok(items) => items,
        Err(e) => {
            finish_spinner(spinner, "Error");
            return Err(e);
        }
    };
    finish_spinner_with_status(spinner, &items);

    if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
        return output_items(&items, &cli.out);
    }
    if !items.is_empty() {
        print_catalog_items(&items);
    }
    Ok(())
}

async fn get_single_catalog_item(client: &VraClient, id: &str, cli: &Cli) -> Result<()> {
    let spinner = create_spinner(&format!("Fetching catalog item '{}'...", id), cli.quiet());

    match client.get_catalog_item_by_id(id).await {
        Ok(Some((item, raw))) => {
            finish_spinner(spinner, "Found");
            if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
                return output_raw(&raw, &cli.out);
            }
            print_catalog_items(&[item]);
            Ok(())
        }
        Ok(None) => {
            finish_spinner(spinner, "Not found");
            Err(VraError::Api {
                status: 404,
                message: format!("Catalog item '{}' not found", id),
            })
        }
        Err(e) => {
            finish_spinner(spinner, "Error");
            Err(e)
        }
    }
}

fn print_catalog_items(items: &[CatalogItem]) {
    let rows = items
        .iter()
        .map(|item| {
            vec![
                item.id.clone(),
                item.name.clone(),
                item.type_name().to_string(),
                item.source_name.clone().unwrap_or_default(),
                item.created_at.clone().unwrap_or_default(),
            ]
        })
        .collect();
    render_table(&["Id", "Name", "Type", "Source", "Created At"], rows);
}
