//! Project command handlers

use crate::cli::{Cli, DeleteArgs, OutputFormat, ProjectArgs};
use crate::error::{Result, VraError};
use crate::output::{output_items, output_raw, render_table};
use crate::ui::{confirm_destructive, create_spinner, finish_spinner, finish_spinner_with_status};
use crate::vra::query::Query;
use crate::vra::VraClient;

use super::models::Project;

/// Run the project get command
pub async fn run_project_command(client: &VraClient, args: &ProjectArgs, cli: &Cli) -> Result<()> {
    if let Some(name) = &args.name {
        return get_single_project(client, name, cli).await;
    }

    let (top, skip) = cli.paging();
    let query = Query::new().top(top).skip(skip);

    let spinner = create_spinner("Fetching projects...", cli.quiet());
    let mut projects = match client.get_projects(&query).await {
        Ok(projects) => projects,
        Err(e) => {
            finish_spinner(spinner, "Error");
            return Err(e);
        }
    };
    finish_spinner_with_status(spinner, &projects);

    if let Some(filter) = &args.filter {
        let filter_lower = filter.to_lowercase();
        projects.retain(|p| p.name.to_lowercase().contains(&filter_lower));
    }

    if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
        return output_items(&projects, &cli.out);
    }
    if !projects.is_empty() {
        print_projects(&projects);
    }
    Ok(())
}

/// Run the project delete command
pub async fn run_delete_project_command(
    client: &VraClient,
    args: &DeleteArgs,
    cli: &Cli,
) -> Result<()> {
    let (project, _) = resolve_project(client, &args.name).await?;

    confirm_destructive(
        &format!("delete project '{}' ({})", project.name, project.id),
        cli.confirm,
    )?;

    client.delete_project(&project.id).await?;
    println!("Deleted project '{}'", project.name);
    Ok(())
}

async fn get_single_project(client: &VraClient, name: &str, cli: &Cli) -> Result<()> {
    let spinner = create_spinner(&format!("Fetching project '{}'...", name), cli.quiet());

    match resolve_project(client, name).await {
        Ok((project, raw)) => {
            finish_spinner(spinner, "Found");
            if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
                return output_raw(&raw, &cli.out);
            }
            print_projects(&[project]);
            Ok(())
        }
        Err(e) => {
            finish_spinner(spinner, "Not found");
            Err(e)
        }
    }
}

async fn resolve_project(client: &VraClient, name: &str) -> Result<(Project, serde_json::Value)> {
    if let Some(found) = client.get_project_by_name(name).await? {
        return Ok(found);
    }
    if let Some(found) = client.get_project_by_id(name).await? {
        return Ok(found);
    }
    Err(VraError::Api {
        status: 404,
        message: format!("Project '{}' not found", name),
    })
}

fn print_projects(projects: &[Project]) {
    let rows = projects
        .iter()
        .map(|project| {
            vec![
                project.id.clone(),
                project.name.clone(),
                project.description.clone().unwrap_or_default(),
                project.administrator_emails(),
                project.member_count().to_string(),
            ]
        })
        .collect();
    render_table(
        &["Id", "Name", "Description", "Administrators", "Members"],
        rows,
    );
}
