//! Table output formatter

use comfy_table::{presets::NOTHING, Table};

/// Render rows as an ASCII table with the given header
pub fn render_table(headers: &[&str], rows: Vec<Vec<String>>) {
    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(headers.to_vec());

    for row in rows {
        table.add_row(row);
    }

    println!("{}", table);
}
