//! Cloud account command handlers

use crate::cli::{Cli, CloudAccountArgs, DeleteArgs, OutputFormat};
use crate::error::{Result, VraError};
use crate::output::{output_items, output_raw, render_table};
use crate::ui::{confirm_destructive, create_spinner, finish_spinner, finish_spinner_with_status};
use crate::vra::query::Query;
use crate::vra::traits::VraResource;
use crate::vra::VraClient;

use super::models::CloudAccount;

/// Run the cloud account get command
pub async fn run_cloud_account_command(
    client: &VraClient,
    args: &CloudAccountArgs,
    cli: &Cli,
) -> Result<()> {
    if let Some(name) = &args.name {
        return get_single_cloud_account(client, name, cli).await;
    }

    let (top, skip) = cli.paging();
    let query = Query::new().top(top).skip(skip);

    let spinner = create_spinner("Fetching cloud accounts...", cli.quiet());
    let mut accounts = match client.get_cloud_accounts(&query).await {
        Ok(accounts) => accounts,
        Err(e) => {
            finish_spinner(spinner, "Error");
            return Err(e);
        }
    };
    finish_spinner_with_status(spinner, &accounts);

    if let Some(filter) = &args.filter {
        let filter_lower = filter.to_lowercase();
        accounts.retain(|a| a.name.to_lowercase().contains(&filter_lower));
    }

    if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
        return output_items(&accounts, &cli.out);
    }
    if !accounts.is_empty() {
        print_cloud_accounts(&accounts);
    }
    Ok(())
}

/// Run the cloud account delete command
pub async fn run_delete_cloud_account_command(
    client: &VraClient,
    args: &DeleteArgs,
    cli: &Cli,
) -> Result<()> {
    let (account, _) = resolve_cloud_account(client, &args.name).await?;

    confirm_destructive(
        &format!("delete cloud account '{}' ({})", account.name, account.id),
        cli.confirm,
    )?;

    client.delete_cloud_account(&account.id).await?;
    println!("Deleted cloud account '{}'", account.name);
    Ok(())
}

async fn get_single_cloud_account(client: &VraClient, name: &str, cli: &Cli) -> Result<()> {
    let spinner = create_spinner(&format!("Fetching cloud account '{}'...", name), cli.quiet());

    match resolve_cloud_account(client, name).await {
        Ok((account, raw)) => {
            finish_spinner(spinner, "Found");
            if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
                return output_raw(&raw, &cli.out);
            }
            print_cloud_accounts(&[account]);
            Ok(())
        }
        Err(e) => {
            finish_spinner(spinner, "Not found");
            Err(e)
        }
    }
}

/// Look up a cloud account by name first, then by ID
async fn resolve_cloud_account(
    client: &VraClient,
    name: &str,
) -> Result<(CloudAccount, serde_json::Value)> {
    if let Some(found) = client.get_cloud_account_by_name(name).await? {
        return Ok(found);
    }
    if let Some(found) = client.get_cloud_account_by_id(name).await? {
        return Ok(found);
    }
    Err(VraError::Api {
        status: 404,
        message: format!("Cloud account '{}' not found", name),
    })
}

fn print_cloud_accounts(accounts: &[CloudAccount]) {
    let rows = accounts
        .iter()
        .map(|account| {
            vec![
                account.id.clone(),
                account.name.clone(),
                account.type_name().to_string(),
                account.regions(),
                account.description.clone().unwrap_or_default(),
            ]
        })
        .collect();
    render_table(&["Id", "Name", "Type", "Regions", "Description"], rows);
}
