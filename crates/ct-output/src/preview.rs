//! Plain-text preview of the first rows of a run.

use ct_core::TraceRecord;

use crate::{COLUMNS, TraceRow};

/// Render the first `n` records as a right-aligned text table with a header
/// line.  Coordinates are shown with six decimals.
pub fn format_preview(records: &[TraceRecord], n: usize) -> String {
    let cells: Vec<[String; 4]> = records
        .iter()
        .take(n)
        .map(|r| {
            let row = TraceRow::from(r);
            [
                row.user_id.to_string(),
                row.timestamp.to_string(),
                format!("{:.6}", row.latitude),
                format!("{:.6}", row.longitude),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(str::len);
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    push_line(&mut out, COLUMNS.iter().copied(), &widths);
    for row in &cells {
        out.push('\n');
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize; 4]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:>w$}"))
        .collect();
    out.push_str(&line.join("  "));
}
