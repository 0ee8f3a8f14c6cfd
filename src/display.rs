use tabled::settings::object::{Columns, Rows};
use tabled::settings::{Alignment, Color, Modify, Style};
use tabled::{Table, Tabled};

use crate::prelude::*;
use crate::record::ProcessRecord;

#[derive(Tabled)]
struct RootRow {
    #[tabled(rename = "Pid")]
    pid: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Parent")]
    parent: String,
}

impl From<&ProcessRecord> for RootRow {
    fn from(record: &ProcessRecord) -> Self {
        RootRow {
            pid: record.pid,
            name: record.name.clone(),
            parent: record
                .parent_pid
                .map(|ppid| ppid.to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub fn build_roots_table(roots: &[ProcessRecord]) -> String {
    let rows: Vec<RootRow> = roots.iter().map(RootRow::from).collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Color::BOLD))
        .with(Modify::new(Columns::first()).with(Alignment::right()));
    table.to_string()
}

pub fn to_json(roots: &[ProcessRecord]) -> Result<String> {
    serde_json::to_string_pretty(roots).context("failed to serialize resolved roots")
}
