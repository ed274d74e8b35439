//! Table output formatting for CLI commands
//!
//! Renders fact results and fact schemas using comfy-table.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};

use crate::domain::models::{FactResult, FactSchema, FactValue};

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn value_cell(value: Option<&FactValue>) -> Cell {
    match value {
        Some(FactValue::Boolean(true)) => Cell::new("yes").fg(Color::Green),
        Some(FactValue::Boolean(false)) => Cell::new("no").fg(Color::Red),
        Some(FactValue::Integer(v)) => Cell::new(v),
        Some(FactValue::Float(v)) => Cell::new(v),
        Some(FactValue::String(v)) => Cell::new(v),
        None => Cell::new("-"),
    }
}

/// Format fact results, one row per entity and one column per schema fact.
pub fn format_fact_table(facts: &[FactResult], schema: &FactSchema) -> String {
    let mut table = base_table();

    let mut header = vec![Cell::new("Entity").add_attribute(Attribute::Bold)];
    header.extend(
        schema
            .keys()
            .map(|name| Cell::new(name).add_attribute(Attribute::Bold)),
    );
    table.set_header(header);

    for result in facts {
        let mut row = vec![Cell::new(result.entity.to_string())];
        row.extend(schema.keys().map(|name| value_cell(result.facts.get(name))));
        table.add_row(row);
    }

    table.to_string()
}

/// Format a fact schema as name/type/description rows.
pub fn format_schema_table(schema: &FactSchema) -> String {
    let mut table = base_table();
    table.set_header(vec![
        Cell::new("Fact").add_attribute(Attribute::Bold),
        Cell::new("Type").add_attribute(Attribute::Bold),
        Cell::new("Description").add_attribute(Attribute::Bold),
    ]);

    for (name, entry) in schema {
        let fact_type = serde_json::to_value(entry.fact_type)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(name),
            Cell::new(fact_type),
            Cell::new(&entry.description),
        ]);
    }

    table.to_string()
}
