//! IaaS cloud accounts

mod api;
mod commands;
mod models;

pub use commands::{run_cloud_account_command, run_delete_cloud_account_command};
pub use models::CloudAccount;
