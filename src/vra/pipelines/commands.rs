//! Pipeline command handlers

use std::collections::HashMap;
use std::fs;

use crate::cli::{
    Cli, CreatePipelineArgs, DeleteArgs, OutputFormat, PipelineArgs, UpdatePipelineArgs,
};
use crate::error::{Result, VraError};
use crate::output::{output_items, output_raw, render_table};
use crate::ui::{confirm_destructive, create_spinner, finish_spinner, finish_spinner_with_status};
use crate::vra::query::Query;
use crate::vra::VraClient;

use super::models::Pipeline;

/// Run the pipeline get command
pub async fn run_pipeline_command(
    client: &VraClient,
    args: &PipelineArgs,
    cli: &Cli,
) -> Result<()> {
    if let Some(name) = &args.name {
        return get_single_pipeline(client, name, args.project.as_deref(), cli).await;
    }

    let (top, skip) = cli.paging();
    let query = Query::new()
        .eq_opt("project", args.project.as_deref())
        .top(top)
        .skip(skip);

    let spinner = create_spinner("Fetching pipelines...", cli.quiet());

    // The execution count column needs a second fetch; run both at once.
    let (pipelines, execution_counts) = if args.with_executions {
        let exec_query = Query::new().eq_opt("project", args.project.as_deref());
        let (pipelines, executions) =
            tokio::join!(client.get_pipelines(&query), client.get_executions(&exec_query));
        let pipelines = match pipelines {
            Ok(p) => p,
            Err(e) => {
                finish_spinner(spinner, "Error");
                return Err(e);
            }
        };
        let executions = match executions {
            Ok(e) => e,
            Err(e) => {
                finish_spinner(spinner, "Error");
                return Err(e);
            }
        };

        let mut counts: HashMap<String, usize> = HashMap::new();
        for execution in &executions {
            if let Some(name) = &execution.name {
                *counts.entry(name.clone()).or_insert(0) += 1;
            }
        }
        finish_spinner_with_status(spinner, &pipelines);
        (pipelines, Some(counts))
    } else {
        let pipelines = match client.get_pipelines(&query).await {
            Ok(p) => p,
            Err(e) => {
                finish_spinner(spinner, "Error");
                return Err(e);
            }
        };
        finish_spinner_with_status(spinner, &pipelines);
        (pipelines, None)
    };

    if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
        return output_items(&pipelines, &cli.out);
    }
    if !pipelines.is_empty() {
        print_pipelines(&pipelines, execution_counts.as_ref());
    }
    Ok(())
}

/// Run the pipeline create (import) command
pub async fn run_create_pipeline_command(
    client: &VraClient,
    args: &CreatePipelineArgs,
    cli: &Cli,
) -> Result<()> {
    let yaml = fs::read_to_string(&args.import_path)?;
    let result = client.import_pipeline(yaml).await?;

    if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
        return output_raw(&result, &cli.out);
    }
    println!("Imported pipeline from {}", args.import_path.display());
    Ok(())
}

/// Run the pipeline update command: re-read the YAML definition and replace
/// the stored pipeline with it
pub async fn run_update_pipeline_command(
    client: &VraClient,
    args: &UpdatePipelineArgs,
    cli: &Cli,
) -> Result<()> {
    let yaml = fs::read_to_string(&args.import_path)?;
    let mut body: serde_json::Value = serde_yml::from_str(&yaml)?;

    let name = body["name"]
        .as_str()
        .ok_or_else(|| {
            VraError::Config(format!(
                "Pipeline definition {} has no 'name' field",
                args.import_path.display()
            ))
        })?
        .to_string();
    let project = body["project"].as_str().map(str::to_string);

    let (existing, _) = client
        .get_pipeline_by_name(&name, project.as_deref())
        .await?
        .ok_or_else(|| VraError::Api {
            status: 404,
            message: format!("Pipeline '{}' not found", name),
        })?;

    // The service requires the stored ID in the replacement body.
    body["id"] = serde_json::Value::String(existing.id.clone());
    let result = client.update_pipeline(&existing.id, &body).await?;

    if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
        return output_raw(&result, &cli.out);
    }
    println!("Updated pipeline '{}'", name);
    Ok(())
}

/// Run the pipeline delete command
pub async fn run_delete_pipeline_command(
    client: &VraClient,
    args: &DeleteArgs,
    cli: &Cli,
) -> Result<()> {
    let (pipeline, _) = resolve_pipeline(client, &args.name, args.project.as_deref()).await?;

    confirm_destructive(
        &format!("delete pipeline '{}' ({})", pipeline.name, pipeline.id),
        cli.confirm,
    )?;

    client.delete_pipeline(&pipeline.id).await?;
    println!("Deleted pipeline '{}'", pipeline.name);
    Ok(())
}

async fn get_single_pipeline(
    client: &VraClient,
    name: &str,
    project: Option<&str>,
    cli: &Cli,
) -> Result<()> {
    let spinner = create_spinner(&format!("Fetching pipeline '{}'...", name), cli.quiet());

    match resolve_pipeline(client, name, project).await {
        Ok((pipeline, raw)) => {
            finish_spinner(spinner, "Found");
            if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
                return output_raw(&raw, &cli.out);
            }
            print_pipelines(&[pipeline], None);
            Ok(())
        }
        Err(e) => {
            finish_spinner(spinner, "Not found");
            Err(e)
        }
    }
}

pub(crate) async fn resolve_pipeline(
    client: &VraClient,
    name: &str,
    project: Option<&str>,
) -> Result<(Pipeline, serde_json::Value)> {
    if let Some(found) = client.get_pipeline_by_name(name, project).await? {
        return Ok(found);
    }
    if let Some(found) = client.get_pipeline_by_id(name).await? {
        return Ok(found);
    }
    Err(VraError::Api {
        status: 404,
        message: format!("Pipeline '{}' not found", name),
    })
}

fn print_pipelines(pipelines: &[Pipeline], execution_counts: Option<&HashMap<String, usize>>) {
    let mut headers = vec!["Id", "Name", "Project", "State", "Stages"];
    if execution_counts.is_some() {
        headers.push("Executions");
    }

    let rows = pipelines
        .iter()
        .map(|pipeline| {
            let mut row = vec![
                pipeline.id.clone(),
                pipeline.name.clone(),
                pipeline.project.clone().unwrap_or_default(),
                pipeline.state.clone().unwrap_or_default(),
                pipeline.stage_summary(),
            ];
            if let Some(counts) = execution_counts {
                row.push(counts.get(&pipeline.name).copied().unwrap_or(0).to_string());
            }
            row
        })
        .collect();
    render_table(&headers, rows);
}
