//! Cloud template command handlers

use crate::cli::{Cli, CloudTemplateArgs, DeleteArgs, OutputFormat};
use crate::config::api;
use crate::error::{Result, VraError};
use crate::output::{output_items, output_raw, render_table};
use crate::ui::{confirm_destructive, create_spinner, finish_spinner, finish_spinner_with_status};
use crate::vra::query::Query;
use crate::vra::VraClient;

use super::models::CloudTemplate;

/// Run the cloud template get command
pub async fn run_cloud_template_command(
    client: &VraClient,
    args: &CloudTemplateArgs,
    cli: &Cli,
) -> Result<()> {
    if let Some(name) = &args.name {
        return get_single_cloud_template(client, name, cli).await;
    }

    let (top, skip) = cli.paging();
    let mut query = Query::new().top(top.or(Some(api::DEFAULT_PAGE_SIZE))).skip(skip);
    if let Some(filter) = &args.filter {
        query = query.search(filter);
    }

    let spinner = create_spinner("Fetching cloud templates...", cli.quiet());
    let mut templates = match client.get_cloud_templates(&query).await {
        Ok(templates) => templates,
        Err(e) => {
            finish_spinner(spinner, "Error");
            return Err(e);
        }
    };
    finish_spinner_with_status(spinner, &templates);

    if let Some(project) = &args.project {
        templates.retain(|t| t.project_name.as_deref() == Some(project.as_str()));
    }

    if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
        return output_items(&templates, &cli.out);
    }
    if !templates.is_empty() {
        print_cloud_templates(&templates);
    }
    Ok(())
}

/// Run the cloud template delete command
pub async fn run_delete_cloud_template_command(
    client: &VraClient,
    args: &DeleteArgs,
    cli: &Cli,
) -> Result<()> {
    let (template, _) = resolve_cloud_template(client, &args.name).await?;

    confirm_destructive(
        &format!("delete cloud template '{}' ({})", template.name, template.id),
        cli.confirm,
    )?;

    client.delete_cloud_template(&template.id).await?;
    println!("Deleted cloud template '{}'", template.name);
    Ok(())
}

async fn get_single_cloud_template(client: &VraClient, name: &str, cli: &Cli) -> Result<()> {
    let spinner = create_spinner(&format!("Fetching cloud template '{}'...", name), cli.quiet());

    match resolve_cloud_template(client, name).await {
        Ok((template, raw)) => {
            finish_spinner(spinner, "Found");
            if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
                return output_raw(&raw, &cli.out);
            }
            print_cloud_templates(&[template]);
            Ok(())
        }
        Err(e) => {
            finish_spinner(spinner, "Not found");
            Err(e)
        }
    }
}

async fn resolve_cloud_template(
    client: &VraClient,
    name: &str,
) -> Result<(CloudTemplate, serde_json::Value)> {
    if let Some(found) = client.get_cloud_template_by_name(name).await? {
        return Ok(found);
    }
    if let Some(found) = client.get_cloud_template_by_id(name).await? {
        return Ok(found);
    }
    Err(VraError::Api {
        status: 404,
        message: format!("Cloud template '{}' not found", name),
    })
}

fn print_cloud_templates(templates: &[CloudTemplate]) {
    let rows = templates
        .iter()
        .map(|template| {
            let valid = match template.valid {
                Some(true) => "Yes",
                Some(false) => "No",
                None => "",
            };
            vec![
                template.id.clone(),
                template.name.clone(),
                template.project_name.clone().unwrap_or_default(),
                template.status.clone().unwrap_or_default(),
                valid.to_string(),
                template.updated_at.clone().unwrap_or_default(),
            ]
        })
        .collect();
    render_table(
        &["Id", "Name", "Project", "Status", "Valid", "Updated At"],
        rows,
    );
}
