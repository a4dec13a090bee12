//! Table and JSON rendering for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use intake_model::{Severity, ValidationResult, Warning};
use intake_validate::{
    clean_identifier, compute_check_digit, format_code, format_identifier, validate_code,
    validate_identifier,
};

/// One validated input value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationRow {
    pub input: String,
    pub formatted: String,
    pub result: ValidationResult,
    /// Extra guidance for invalid values, such as the expected check digit.
    pub hint: Option<String>,
}

impl ValidationRow {
    pub fn is_valid(&self) -> bool {
        self.result.is_valid()
    }
}

pub fn identifier_rows(values: &[String]) -> Vec<ValidationRow> {
    values
        .iter()
        .map(|value| {
            let result = validate_identifier(value);
            let hint = if result.is_valid() {
                None
            } else {
                expected_check_digit(value).map(|digit| format!("expected check digit {digit}"))
            };
            ValidationRow {
                input: value.clone(),
                formatted: format_identifier(value),
                result,
                hint,
            }
        })
        .collect()
}

pub fn code_rows(values: &[String]) -> Vec<ValidationRow> {
    values
        .iter()
        .map(|value| ValidationRow {
            input: value.clone(),
            formatted: format_code(value),
            result: validate_code(value),
            hint: None,
        })
        .collect()
}

fn expected_check_digit(value: &str) -> Option<u8> {
    let cleaned = clean_identifier(value);
    if cleaned.len() != 10 {
        return None;
    }
    compute_check_digit(cleaned.get(..9)?)
}

pub fn validation_table(rows: &[ValidationRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Value"),
        header_cell("Formatted"),
        header_cell("Status"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for row in rows {
        let detail = match (row.result.error(), &row.hint) {
            (Some(error), Some(hint)) => format!("{error} ({hint})"),
            (Some(error), None) => error.to_string(),
            (None, _) => String::new(),
        };
        table.add_row(vec![
            Cell::new(&row.input),
            Cell::new(&row.formatted),
            status_cell(row.is_valid()),
            Cell::new(detail),
        ]);
    }
    table
}

pub fn warnings_table(warnings: &[Warning]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Severity"),
        header_cell("Record"),
        header_cell("Score"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for warning in warnings {
        let score = match warning.score {
            Some(score) => Cell::new(format!("{score:.3}")),
            None => dim_cell("-"),
        };
        let message = match &warning.breakdown {
            Some(breakdown) => format!("{}\n{}", warning.message, breakdown.explain()),
            None => warning.message.clone(),
        };
        table.add_row(vec![
            Cell::new(warning.kind.code()),
            severity_cell(warning.severity),
            Cell::new(&warning.referenced_record_id),
            score,
            Cell::new(message),
        ]);
    }
    table
}

/// Pretty-printed JSON array of warnings.
pub fn warnings_json(warnings: &[Warning]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(warnings)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn status_cell(valid: bool) -> Cell {
    if valid {
        Cell::new("valid").fg(Color::Green)
    } else {
        Cell::new("invalid")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::High => Cell::new(severity.label())
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Medium => Cell::new(severity.label()).fg(Color::Yellow),
        Severity::Low => Cell::new(severity.label()).fg(Color::DarkGrey),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
