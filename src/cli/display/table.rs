//! Tabular rendering of schema field descriptors.

use comfy_table::{presets, Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

use crate::domain::models::schema::simple_type_name;
use crate::domain::models::FieldSummary;

const HEADERS: [&str; 4] = ["field", "type", "access", "constraints"];

/// Borderless table with one row per field, in declaration order.
///
/// Constrained field names are bold, and a constrained field without a
/// reader is flagged in red since validating it is a schema defect.
pub fn field_table(fields: &[FieldSummary]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            HEADERS
                .iter()
                .map(|h| Cell::new(h.to_uppercase()).set_alignment(CellAlignment::Left)),
        );

    for field in fields {
        table.add_row(vec![
            name_cell(field),
            Cell::new(simple_type_name(field.type_name)),
            access_cell(field),
            constraints_cell(field),
        ]);
    }
    table
}

fn name_cell(field: &FieldSummary) -> Cell {
    let cell = Cell::new(field.name);
    if field.constraints.is_empty() {
        cell
    } else {
        cell.add_attribute(Attribute::Bold)
    }
}

fn access_cell(field: &FieldSummary) -> Cell {
    let cell = Cell::new(field.access);
    if is_unreadable(field) {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

fn constraints_cell(field: &FieldSummary) -> Cell {
    let cell = Cell::new(field.constraints);
    if field.constraints.is_empty() {
        cell.fg(Color::DarkGrey)
    } else {
        cell.fg(Color::Cyan)
    }
}

fn is_unreadable(field: &FieldSummary) -> bool {
    !field.constraints.is_empty() && field.access == "missing"
}

/// Render the table under an owner heading with a field count.
///
/// Constrained fields without a reader are counted in the heading.
pub fn render_fields(owner: &str, fields: &[FieldSummary]) -> String {
    if fields.is_empty() {
        return format!("{owner} declares no fields.");
    }
    let constrained = fields.iter().filter(|f| !f.constraints.is_empty()).count();
    let unreadable = fields.iter().filter(|f| is_unreadable(f)).count();

    let mut heading = format!(
        "{} ({} fields, {} constrained",
        style(owner).bold(),
        fields.len(),
        constrained
    );
    if unreadable > 0 {
        heading.push_str(&format!(", {} without a reader", style(unreadable).red()));
    }
    heading.push(')');
    format!("{heading}\n{}", field_table(fields))
}
