//! Variable command handlers

use crate::cli::{
    Cli, CreateVariableArgs, DeleteArgs, OutputFormat, UpdateVariableArgs, VariableArgs,
};
use crate::error::{Result, VraError};
use crate::output::{output_items, output_raw, render_table};
use crate::ui::{confirm_destructive, create_spinner, finish_spinner, finish_spinner_with_status};
use crate::vra::query::Query;
use crate::vra::VraClient;

use super::api::VariableRequest;
use super::models::Variable;

/// Run the variable get command
pub async fn run_variable_command(
    client: &VraClient,
    args: &VariableArgs,
    cli: &Cli,
) -> Result<()> {
    if let Some(name) = &args.name {
        return get_single_variable(client, name, args.project.as_deref(), cli).await;
    }

    let (top, skip) = cli.paging();
    let query = Query::new()
        .eq_opt("project", args.project.as_deref())
        .top(top)
        .skip(skip);

    let spinner = create_spinner("Fetching variables...", cli.quiet());
    let variables = match client.get_variables(&query).await {
        Ok(variables) => variables,
        Err(e) => {
            finish_spinner(spinner, "Error");
            return Err(e);
        }
    };
    finish_spinner_with_status(spinner, &variables);

    if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
        return output_items(&variables, &cli.out);
    }
    if !variables.is_empty() {
        print_variables(&variables);
    }
    Ok(())
}

/// Run the variable create command
pub async fn run_create_variable_command(
    client: &VraClient,
    args: &CreateVariableArgs,
    cli: &Cli,
) -> Result<()> {
    let request = VariableRequest {
        name: &args.name,
        project: &args.project,
        variable_type: &args.variable_type,
        description: args.description.as_deref(),
        value: &args.value,
    };

    let variable = client.create_variable(&request).await?;

    if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
        return output_items(&[variable], &cli.out);
    }
    println!("Created variable '{}' ({})", variable.name, variable.id);
    Ok(())
}

/// Run the variable update command; unspecified fields keep their stored value
pub async fn run_update_variable_command(
    client: &VraClient,
    args: &UpdateVariableArgs,
    cli: &Cli,
) -> Result<()> {
    let (existing, _) = resolve_variable(client, &args.name, args.project.as_deref()).await?;

    let project = existing.project.clone().ok_or_else(|| {
        VraError::Api {
            status: 422,
            message: format!("Variable '{}' has no project; cannot update", existing.name),
        }
    })?;

    let value = args
        .value
        .as_deref()
        .or(existing.value.as_deref())
        .unwrap_or_default();
    let request = VariableRequest {
        name: &existing.name,
        project: &project,
        variable_type: existing.variable_type.as_deref().unwrap_or("REGULAR"),
        description: args.description.as_deref().or(existing.description.as_deref()),
        value,
    };

    let variable = client.update_variable(&existing.id, &request).await?;

    if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
        return output_items(&[variable], &cli.out);
    }
    println!("Updated variable '{}'", variable.name);
    Ok(())
}

/// Run the variable delete command
pub async fn run_delete_variable_command(
    client: &VraClient,
    args: &DeleteArgs,
    cli: &Cli,
) -> Result<()> {
    let (variable, _) = resolve_variable(client, &args.name, args.project.as_deref()).await?;

    confirm_destructive(
        &format!("delete variable '{}' ({})", variable.name, variable.id),
        cli.confirm,
    )?;

    client.delete_variable(&variable.id).await?;
    println!("Deleted variable '{}'", variable.name);
    Ok(())
}

async fn get_single_variable(
    client: &VraClient,
    name: &str,
    project: Option<&str>,
    cli: &Cli,
) -> Result<()> {
    let spinner = create_spinner(&format!("Fetching variable '{}'...", name), cli.quiet());

    match resolve_variable(client, name, project).await {
        Ok((variable, raw)) => {
            finish_spinner(spinner, "Found");
            if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
                return output_raw(&raw, &cli.out);
            }
            print_variables(&[variable]);
            Ok(())
        }
        Err(e) => {
            finish_spinner(spinner, "Not found");
            Err(e)
        }
    }
}

async fn resolve_variable(
    client: &VraClient,
    name: &str,
    project: Option<&str>,
) -> Result<(Variable, serde_json::Value)> {
    if let Some(found) = client.get_variable_by_name(name, project).await? {
        return Ok(found);
    }
    if let Some(found) = client.get_variable_by_id(name).await? {
        return Ok(found);
    }
    Err(VraError::Api {
        status: 404,
        message: format!("Variable '{}' not found", name),
    })
}

fn print_variables(variables: &[Variable]) {
    let rows = variables
        .iter()
        .map(|variable| {
            vec![
                variable.id.clone(),
                variable.name.clone(),
                variable.project.clone().unwrap_or_default(),
                variable.type_name().to_string(),
                variable.display_value(),
                variable.description.clone().unwrap_or_default(),
            ]
        })
        .collect();
    render_table(
        &["Id", "Name", "Project", "Type", "Value", "Description"],
        rows,
    );
}
