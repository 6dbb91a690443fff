//! Output formatting module
//!
//! Handles the three output formats: table, JSON, YAML. Tables are built
//! per resource in the command handlers; JSON/YAML rendering is shared.

mod table;

pub use table::render_table;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Print a raw JSON value in the requested machine-readable format.
/// Used for single-resource output so the API response is passed through
/// untouched.
pub fn output_raw(value: &serde_json::Value, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Yaml => print!("{}", serde_yml::to_string(value)?),
        _ => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

/// Print a list of typed items as JSON or YAML
pub fn output_items<T: Serialize>(items: &[T], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Yaml => print!("{}", serde_yml::to_string(items)?),
        _ => println!("{}", serde_json::to_string_pretty(items)?),
    }
    Ok(())
}
