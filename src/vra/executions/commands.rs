//! Execution command handlers

use crate::cli::{Cli, CreateExecutionArgs, DeleteArgs, ExecutionArgs, OutputFormat};
use crate::error::{Result, VraError};
use crate::output::{output_items, output_raw, render_table};
use crate::ui::{confirm_destructive, create_spinner, finish_spinner, finish_spinner_with_status};
use crate::vra::pipelines::resolve_pipeline;
use crate::vra::query::Query;
use crate::vra::VraClient;

use super::models::Execution;

/// Run the execution get command
pub async fn run_execution_command(
    client: &VraClient,
    args: &ExecutionArgs,
    cli: &Cli,
) -> Result<()> {
    if let Some(id) = &args.id {
        return get_single_execution(client, id, cli).await;
    }

    let (top, skip) = cli.paging();
    let query = Query::new()
        .eq_opt("project", args.project.as_deref())
        .eq_opt("name", args.pipeline.as_deref())
        .eq_opt("status", args.status.as_deref())
        .top(top)
        .skip(skip);

    let spinner = create_spinner("Fetching executions...", cli.quiet());
    let executions = match client.get_executions(&query).await {
        Ok(executions) => executions,
        Err(e) => {
            finish_spinner(spinner, "Error");
            return Err(e);
        }
    };
    finish_spinner_with_status(spinner, &executions);

    if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
        return output_items(&executions, &cli.out);
    }
    if !executions.is_empty() {
        print_executions(&executions);
    }
    Ok(())
}

/// Run the execution create command (runs a pipeline)
pub async fn run_create_execution_command(
    client: &VraClient,
    args: &CreateExecutionArgs,
    cli: &Cli,
) -> Result<()> {
    let input = match &args.inputs {
        Some(raw) => serde_json::from_str(raw)?,
        None => serde_json::json!({}),
    };

    let (pipeline, _) = resolve_pipeline(client, &args.pipeline, None).await?;
    let result = client
        .create_execution(&pipeline.id, input, args.comments.clone())
        .await?;

    if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
        return output_raw(&result, &cli.out);
    }
    match result["id"].as_str() {
        Some(id) => println!("Started execution {} of pipeline '{}'", id, pipeline.name),
        None => println!("Started execution of pipeline '{}'", pipeline.name),
    }
    Ok(())
}

/// Run the execution delete command
pub async fn run_delete_execution_command(
    client: &VraClient,
    args: &DeleteArgs,
    cli: &Cli,
) -> Result<()> {
    let (execution, _) = client
        .get_execution_by_id(&args.name)
        .await?
        .ok_or_else(|| VraError::Api {
            status: 404,
            message: format!("Execution '{}' not found", args.name),
        })?;

    confirm_destructive(
        &format!("delete execution '{}'", execution.display_name()),
        cli.confirm,
    )?;

    client.delete_execution(&execution.id).await?;
    println!("Deleted execution '{}'", execution.display_name());
    Ok(())
}

async fn get_single_execution(client: &VraClient, id: &str, cli: &Cli) -> Result<()> {
    let spinner = create_spinner(&format!("Fetching execution '{}'...", id), cli.quiet());

    match client.get_execution_by_id(id).await {
        Ok(Some((execution, raw))) => {
            finish_spinner(spinner, "Found");
            if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
                return output_raw(&raw, &cli.out);
            }
            print_executions(&[execution]);
            Ok(())
        }
        Ok(None) => {
            finish_spinner(spinner, "Not found");
            Err(VraError::Api {
                status: 404,
                message: format!("Execution '{}' not found", id),
            })
        }
        Err(e) => {
            finish_spinner(spinner, "Error");
            Err(e)
        }
    }
}

fn print_executions(executions: &[Execution]) {
    let rows = executions
        .iter()
        .map(|execution| {
            vec![
                execution.id.clone(),
                execution.display_name(),
                execution.project.clone().unwrap_or_default(),
                execution.status.clone().unwrap_or_default(),
                execution.executed_by.clone().unwrap_or_default(),
                execution.updated_at_utc(),
            ]
        })
        .collect();
    render_table(
        &["Id", "Execution", "Project", "Status", "Executed By", "Updated At"],
        rows,
    );
}
