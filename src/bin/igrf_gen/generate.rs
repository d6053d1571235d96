use super::parser::{CoefficientTable, IgrfTables};

fn render_row(row: &[f64]) -> String {
    let values: Vec<String> = row.iter().map(|v| format!("{:?}", v)).collect();
    format!("[{}]", values.join(", "))
}

fn render_table(name: &str, table: &CoefficientTable) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "const {}: [[f64; {}]; {}] =\n",
        name,
        table.width,
        table.height()
    ));
    out.push('[');
    for (i, row) in table.rows.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&render_row(row));
    }
    out.push_str("];\n");
    out
}

/// Renders both families as fixed-size array constants sharing the same
/// declared dimensions: two declaration lines and two nested literals.
/// `f64`'s Debug formatting keeps every value round-trippable and always
/// carries a decimal point.
pub fn render_tables(tables: &IgrfTables) -> String {
    let mut out = String::new();
    out.push_str(&render_table("IGRF_COEFFICIENTS_G", &tables.g));
    out.push_str(&render_table("IGRF_COEFFICIENTS_H", &tables.h));
    out
}
