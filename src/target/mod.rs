//! Target profiles: named server + credential configurations
//!
//! A target is resolved once per invocation, either from `VRA_*` environment
//! variables or from the YAML configuration file, and passed explicitly to
//! every operation.

mod commands;
mod profile;
mod store;

pub use commands::{apply_config_action, run_config_command, TargetRow};
pub use profile::{Target, TargetSource};
pub use store::{ConfigDocument, TargetEntry, TargetStore};
