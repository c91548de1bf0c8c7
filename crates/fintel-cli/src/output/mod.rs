use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// A record that knows its own table columns.
pub trait TableRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

/// Render a single response. Objects become a key/value table.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => Ok(render_key_values(&serde_json::to_value(value)?)),
    }
}

/// Render a list. JSON formats serialize the records whole; the table shows
/// each record's own columns.
pub fn render_rows<T: Serialize + TableRow>(
    rows: &[T],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => {
            let cells = rows.iter().map(TableRow::cells).collect::<Vec<_>>();
            Ok(table::render_table(T::headers(), &cells, options()))
        }
        OutputFormat::Json | OutputFormat::Raw => render(&rows, format),
    }
}

pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

pub fn output_rows<T: Serialize + TableRow>(rows: &[T], format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_rows(rows, format)?);
    Ok(())
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_key_values(value: &Value) -> String {
    let rows = match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| vec![key.clone(), cell(value)])
            .collect::<Vec<_>>(),
        other => vec![vec![String::from("value"), cell(other)]],
    };
    table::render_table(&["key", "value"], &rows, options())
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => if *flag { "yes" } else { "no" }.to_string(),
        Value::Number(number) => number.to_string(),
        Value::Array(items) if items.iter().all(|item| !item.is_object()) => items
            .iter()
            .map(cell)
            .collect::<Vec<_>>()
            .join(", "),
        nested => nested.to_string(),
    }
}
