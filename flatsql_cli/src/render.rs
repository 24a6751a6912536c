use flatsql_core::types::Row;

/// Renders a header and data rows as a bordered table followed by a
/// row-count line.
pub fn render_table(header: &Row, rows: &[Row]) -> String {
    let widths = compute_widths(header, rows);
    let border = render_border(&widths);

    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&render_row(header, &widths));
    out.push_str(&border);
    for row in rows {
        out.push_str(&render_row(row, &widths));
    }
    out.push_str(&border);
    out.push_str(&format!("{} row(s).\n", rows.len()));
    out
}

fn compute_widths(header: &Row, rows: &[Row]) -> Vec<usize> {
    let mut widths: Vec<usize> = header.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }
    widths
}

fn render_border(widths: &[usize]) -> String {
    let mut out = String::from("+");
    for w in widths {
        out.push_str(&"-".repeat(w + 2));
        out.push('+');
    }
    out.push('\n');
    out
}

fn render_row(row: &Row, widths: &[usize]) -> String {
    let mut out = String::from("|");
    for (i, w) in widths.iter().enumerate() {
        let cell = row.get(i).map(String::as_str).unwrap_or("");
        out.push(' ');
        out.push_str(cell);
        for _ in cell.chars().count()..*w {
            out.push(' ');
        }
        out.push_str(" |");
    }
    out.push('\n');
    out
}
