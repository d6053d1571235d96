use super::parser::CoefficientTable;

fn render_row(row: &[f64]) -> String {
    let values: Vec<String> = row.iter().map(|v| format!("{:?}", v)).collect();
    format!("[{}]", values.join(", "))
}

/// Renders a table as a fixed-size array constant: the declaration line with
/// the inferred dimensions, then the nested literal. `f64`'s Debug formatting
/// keeps every value round-trippable and always carries a decimal point.
pub fn render_table(name: &str, table: &CoefficientTable) -> String {
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
