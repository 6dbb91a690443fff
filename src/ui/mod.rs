//! Interactive UI helpers: spinners and confirmation prompts

mod confirm;
mod spinner;

pub use confirm::confirm_destructive;
pub use spinner::{create_spinner, finish_spinner, finish_spinner_with_status};
