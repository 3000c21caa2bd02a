//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Column widths follow the widest cell, measured in display width so
    /// accented collaborator names keep the grid aligned.
    pub fn render(&self) -> String {
        let cols = self.headers.len();
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();

        for row in &self.rows {
            for c in 0..cols {
                let w = row.get(c).map(|v| v.width()).unwrap_or(0);
                if w > widths[c] {
                    widths[c] = w;
                }
            }
        }

        let mut out = String::new();
        render_line(&mut out, &self.headers, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        render_line(&mut out, &rule, &widths);

        for row in &self.rows {
            render_line(&mut out, row, &widths);
        }

        out
    }
}

fn render_line(out: &mut String, cells: &[String], widths: &[usize]) {
    for (c, width) in widths.iter().enumerate() {
        let cell = cells.get(c).map(String::as_str).unwrap_or("");
        let pad = width.saturating_sub(cell.width());
        out.push_str(cell);
        out.push_str(&" ".repeat(pad));
        if c + 1 < widths.len() {
            out.push_str("  ");
        }
    }
    out.push('\n');
}
