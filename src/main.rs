//! vractl - Main entry point

use clap::{CommandFactory, Parser};
use log::{debug, info};

use vractl::config::defaults;
use vractl::{
    ensure_connection, run_action_command, run_catalog_item_command, run_category_command,
    run_cloud_account_command, run_cloud_template_command, run_config_command,
    run_create_execution_command, run_create_pipeline_command, run_create_variable_command,
    run_delete_cloud_account_command, run_delete_cloud_template_command,
    run_delete_endpoint_command, run_delete_execution_command, run_delete_pipeline_command,
    run_delete_project_command, run_delete_variable_command, run_endpoint_command,
    run_execution_command, run_package_command, run_pipeline_command, run_project_command,
    run_update_pipeline_command, run_update_variable_command, run_variable_command,
    run_workflow_command, Cli, Command, CreateResource, DeleteResource, GetResource, Target,
    UpdateResource, VraClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging; --debug wins over RUST_LOG's absence
    let default_level = if cli.debug { "debug" } else { defaults::LOG_LEVEL };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    info!("Starting vractl v{}", env!("CARGO_PKG_VERSION"));

    // Commands that never touch the network
    match &cli.command {
        Command::Version => {
            println!("vractl {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Command::Completion { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(*shell, &mut command, "vractl", &mut std::io::stdout());
            return Ok(());
        }
        Command::Config { action } => {
            run_config_command(action, &cli)?;
            return Ok(());
        }
        _ => {}
    }

    // Resolve the target and make sure it carries a valid access token
    // before any resource command runs.
    let mut target = Target::resolve(cli.target.as_deref())?;
    debug!(
        "Resolved target '{}' (server: {})",
        target.name, target.server
    );
    ensure_connection(&mut target, cli.ignore_certificate_warnings).await?;

    let client = VraClient::new(&target, cli.ignore_certificate_warnings)?;

    match &cli.command {
        Command::Get { resource } => match resource {
            GetResource::CatalogItem(args) => run_catalog_item_command(&client, args, &cli).await?,
            GetResource::CloudAccount(args) => {
                run_cloud_account_command(&client, args, &cli).await?
            }
            GetResource::CloudTemplate(args) => {
                run_cloud_template_command(&client, args, &cli).await?
            }
            GetResource::Project(args) => run_project_command(&client, args, &cli).await?,
            GetResource::Pipeline(args) => run_pipeline_command(&client, args, &cli).await?,
            GetResource::Execution(args) => run_execution_command(&client, args, &cli).await?,
            GetResource::Variable(args) => run_variable_command(&client, args, &cli).await?,
            GetResource::Endpoint(args) => run_endpoint_command(&client, args, &cli).await?,
            GetResource::Workflow(args) => run_workflow_command(&client, args, &cli).await?,
            GetResource::Action(args) => run_action_command(&client, args, &cli).await?,
            GetResource::Category(args) => run_category_command(&client, args, &cli).await?,
            GetResource::Package(args) => run_package_command(&client, args, &cli).await?,
        },
        Command::Create { resource } => match resource {
            CreateResource::Pipeline(args) => {
                run_create_pipeline_command(&client, args, &cli).await?
            }
            CreateResource::Execution(args) => {
                run_create_execution_command(&client, args, &cli).await?
            }
            CreateResource::Variable(args) => {
                run_create_variable_command(&client, args, &cli).await?
            }
        },
        Command::Update { resource } => match resource {
            UpdateResource::Pipeline(args) => {
                run_update_pipeline_command(&client, args, &cli).await?
            }
            UpdateResource::Variable(args) => {
                run_update_variable_command(&client, args, &cli).await?
            }
        },
        Command::Delete { resource } => match resource {
            DeleteResource::CloudAccount(args) => {
                run_delete_cloud_account_command(&client, args, &cli).await?
            }
            DeleteResource::CloudTemplate(args) => {
                run_delete_cloud_template_command(&client, args, &cli).await?
            }
            DeleteResource::Project(args) => {
                run_delete_project_command(&client, args, &cli).await?
            }
            DeleteResource::Pipeline(args) => {
                run_delete_pipeline_command(&client, args, &cli).await?
            }
            DeleteResource::Execution(args) => {
                run_delete_execution_command(&client, args, &cli).await?
            }
            DeleteResource::Variable(args) => {
                run_delete_variable_command(&client, args, &cli).await?
            }
            DeleteResource::Endpoint(args) => {
                run_delete_endpoint_command(&client, args, &cli).await?
            }
        },
        // Handled above, before target resolution
        Command::Config { .. } | Command::Completion { .. } | Command::Version => unreachable!(),
    }

    info!("Completed successfully");
    Ok(())
}
