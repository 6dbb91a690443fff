//! Config command handlers: manage target profiles

use serde::Serialize;

use crate::cli::{Cli, ConfigAction, OutputFormat, SetTargetArgs};
use crate::error::{Result, VraError};
use crate::output::{output_items, render_table};
use crate::target::store::{TargetEntry, TargetStore};
use crate::ui::confirm_destructive;

/// One row of `config get-target` output. Secrets are reduced to presence
/// markers; the raw values never leave the config file.
#[derive(Serialize, Debug)]
pub struct TargetRow {
    pub name: String,
    pub server: String,
    pub domain: String,
    pub username: String,
    pub password_set: bool,
    pub api_token_set: bool,
    pub access_token_set: bool,
    pub current: bool,
}

impl TargetRow {
    fn new(name: &str, entry: &TargetEntry, current: bool) -> Self {
        Self {
            name: name.to_string(),
            server: entry.server.clone().unwrap_or_default(),
            domain: entry.domain.clone().unwrap_or_default(),
            username: entry.username.clone().unwrap_or_default(),
            password_set: entry.password.is_some(),
            api_token_set: entry.api_token.is_some(),
            access_token_set: entry.access_token.is_some(),
            current,
        }
    }
}

/// Run the config command against the default configuration file
pub fn run_config_command(action: &ConfigAction, cli: &Cli) -> Result<()> {
    let path = TargetStore::default_path()
        .ok_or_else(|| VraError::Config("Could not determine home directory".to_string()))?;
    let mut store = TargetStore::open(&path)?;
    apply_config_action(&mut store, action, cli)
}

/// Apply a config action to an already-opened store
pub fn apply_config_action(
    store: &mut TargetStore,
    action: &ConfigAction,
    cli: &Cli,
) -> Result<()> {
    match action {
        ConfigAction::GetTarget(args) => {
            let rows = collect_rows(store, args.name.as_deref())?;
            if matches!(cli.out, OutputFormat::Json | OutputFormat::Yaml) {
                return output_items(&rows, &cli.out);
            }
            print_targets(&rows);
            Ok(())
        }
        ConfigAction::SetTarget(args) => {
            set_target(store, args)?;
            store.save()?;
            println!("Saved target '{}'", args.name);
            Ok(())
        }
        ConfigAction::UseTarget(args) => {
            if store.get(&args.name).is_none() {
                return Err(VraError::TargetNotFound(format!(
                    "No target '{}' in {}",
                    args.name,
                    store.path().display()
                )));
            }
            store.set_current_target(&args.name);
            store.save()?;
            println!("Now using target '{}'", args.name);
            Ok(())
        }
        ConfigAction::DeleteTarget(args) => {
            if store.get(&args.name).is_none() {
                return Err(VraError::TargetNotFound(format!(
                    "No target '{}' in {}",
                    args.name,
                    store.path().display()
                )));
            }
            confirm_destructive(&format!("delete target '{}'", args.name), cli.confirm)?;
            store.remove(&args.name);
            store.save()?;
            println!("Deleted target '{}'", args.name);
            Ok(())
        }
    }
}

fn collect_rows(store: &TargetStore, name: Option<&str>) -> Result<Vec<TargetRow>> {
    let current = store.current_target().map(str::to_string);
    let is_current = |n: &str| current.as_deref() == Some(n);

    match name {
        Some(name) => {
            let entry = store.get(name).ok_or_else(|| {
                VraError::TargetNotFound(format!(
                    "No target '{}' in {}",
                    name,
                    store.path().display()
                ))
            })?;
            Ok(vec![TargetRow::new(name, entry, is_current(name))])
        }
        None => Ok(store
            .names()
            .into_iter()
            .map(|n| {
                let entry = store.get(n).cloned().unwrap_or_default();
                TargetRow::new(n, &entry, is_current(n))
            })
            .collect()),
    }
}

fn set_target(store: &mut TargetStore, args: &SetTargetArgs) -> Result<()> {
    let mut entry = store.get(&args.name).cloned().unwrap_or_default();

    // Only the flags that were given override stored values.
    if let Some(server) = &args.server {
        entry.server = Some(server.clone());
    }
    if let Some(domain) = &args.domain {
        entry.domain = Some(domain.clone());
    }
    if let Some(username) = &args.username {
        entry.username = Some(username.clone());
    }
    if let Some(password) = &args.password {
        entry.password = Some(password.clone());
    }
    if let Some(api_token) = &args.api_token {
        entry.api_token = Some(api_token.clone());
    }

    if entry.server.is_none() {
        return Err(VraError::Config(format!(
            "Target '{}' needs at least --server",
            args.name
        )));
    }

    store.set(&args.name, entry);
    Ok(())
}

fn print_targets(rows: &[TargetRow]) {
    let mark = |set: bool| if set { "set" } else { "" };
    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                if row.current { "*" } else { "" }.to_string(),
                row.name.clone(),
                row.server.clone(),
                row.domain.clone(),
                row.username.clone(),
                mark(row.password_set).to_string(),
                mark(row.api_token_set).to_string(),
                mark(row.access_token_set).to_string(),
            ]
        })
        .collect();
    render_table(
        &[
            "",
            "Name",
            "Server",
            "Domain",
            "Username",
            "Password",
            "Api Token",
            "Access Token",
        ],
        table_rows,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;
    use tempfile::tempdir;

    fn cli(confirm: bool) -> Cli {
        if confirm {
            Cli::parse_from(["vractl", "--confirm", "version"])
        } else {
            Cli::parse_from(["vractl", "version"])
        }
    }

    fn set_args(name: &str, server: &str) -> SetTargetArgs {
        SetTargetArgs::parse_from(["set-target", name, "--server", server])
    }

    #[test]
    fn test_set_and_get_target() {
        let dir = tempdir().unwrap();
        let mut store = TargetStore::open(&dir.path().join("c.yaml")).unwrap();

        let action = ConfigAction::SetTarget(set_args("prod", "vra.corp.local"));
        apply_config_action(&mut store, &action, &cli(false)).unwrap();

        let rows = collect_rows(&store, Some("prod")).unwrap();
        assert_eq!(rows[0].server, "vra.corp.local");
        assert!(!rows[0].password_set);
        assert!(!rows[0].current);
    }

    #[test]
    fn test_set_target_requires_server() {
        let dir = tempdir().unwrap();
        let mut store = TargetStore::open(&dir.path().join("c.yaml")).unwrap();

        let args = SetTargetArgs::parse_from(["set-target", "prod", "--username", "admin"]);
        let result = set_target(&mut store, &args);
        assert!(result.is_err());
    }

    #[test]
    fn test_set_target_merges_existing_fields() {
        let dir = tempdir().unwrap();
        let mut store = TargetStore::open(&dir.path().join("c.yaml")).unwrap();

        set_target(&mut store, &set_args("prod", "vra.corp.local")).unwrap();
        let update = SetTargetArgs::parse_from(["set-target", "prod", "--username", "admin"]);
        set_target(&mut store, &update).unwrap();

        let entry = store.get("prod").unwrap();
        assert_eq!(entry.server.as_deref(), Some("vra.corp.local"));
        assert_eq!(entry.username.as_deref(), Some("admin"));
    }

    #[test]
    fn test_use_target_unknown_fails() {
        let dir = tempdir().unwrap();
        let mut store = TargetStore::open(&dir.path().join("c.yaml")).unwrap();

        let action = ConfigAction::UseTarget(crate::cli::UseTargetArgs {
            name: "ghost".to_string(),
        });
        let result = apply_config_action(&mut store, &action, &cli(false));
        assert!(matches!(result, Err(VraError::TargetNotFound(_))));
    }

    #[test]
    fn test_use_and_delete_target() {
        let dir = tempdir().unwrap();
        let mut store = TargetStore::open(&dir.path().join("c.yaml")).unwrap();
        set_target(&mut store, &set_args("prod", "vra.corp.local")).unwrap();

        let action = ConfigAction::UseTarget(crate::cli::UseTargetArgs {
            name: "prod".to_string(),
        });
        apply_config_action(&mut store, &action, &cli(false)).unwrap();
        assert_eq!(store.current_target(), Some("prod"));

        let action = ConfigAction::DeleteTarget(crate::cli::DeleteTargetArgs {
            name: "prod".to_string(),
        });
        apply_config_action(&mut store, &action, &cli(true)).unwrap();
        assert!(store.get("prod").is_none());
    }
}
