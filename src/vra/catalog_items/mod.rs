//! Service catalog items

mod api;
mod commands;
mod models;

pub use commands::run_catalog_item_command;
pub use models::{CatalogItem, CatalogItemType};
