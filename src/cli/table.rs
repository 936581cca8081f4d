//! Boxed session table
//!
//! ```text
//! +---+-----------+-------------+--------------+
//! | # | Name      | Date        | Duration (M) |
//! +---+-----------+-------------+--------------+
//! | 1 | deep-work | 2023-Jan-01 |           25 |
//! +---+-----------+-------------+--------------+
//! |   |           | Total       |           25 |
//! +---+-----------+-------------+--------------+
//! ```

use crate::models::{format_date, SessionData};

pub const HEADERS: [&str; 4] = ["#", "Name", "Date", "Duration (M)"];

/// Render sessions with a `Total` footer.
#[must_use]
pub fn render_sessions(data: &SessionData) -> String {
    let rows: Vec<Vec<String>> = data
        .sessions()
        .iter()
        .map(|session| {
            vec![
                session.id.to_string(),
                session.name.clone(),
                format_date(session.date),
                session.duration_in_minutes.to_string(),
            ]
        })
        .collect();
    let footer = vec![
        String::new(),
        String::new(),
        "Total".to_string(),
        data.total_duration().to_string(),
    ];

    render_table(&HEADERS, &rows, &footer)
}

fn render_table(headers: &[&str], rows: &[Vec<String>], footer: &[String]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .map(Vec::as_slice)
                .chain(std::iter::once(footer))
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
        })
        .collect();

    let divider = format!(
        "+{}+",
        widths
            .iter()
            .map(|width| "-".repeat(width + 2))
            .collect::<Vec<_>>()
            .join("+")
    );

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

    let mut lines = Vec::with_capacity(rows.len() + 6);
    lines.push(divider.clone());
    lines.push(format_row(&header_cells, &widths, false));
    lines.push(divider.clone());
    for row in rows {
        lines.push(format_row(row, &widths, true));
    }
    if !rows.is_empty() {
        lines.push(divider.clone());
    }
    lines.push(format_row(footer, &widths, true));
    lines.push(divider);
    lines.join("\n")
}

fn format_row(cells: &[String], widths: &[usize], align_numbers: bool) -> String {
    let formatted: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(index, width)| {
            let value = cells.get(index).map(String::as_str).unwrap_or("");
            format_cell(value, *width, align_numbers && looks_numeric(value))
        })
        .collect();
    format!("| {} |", formatted.join(" | "))
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit() || ch == '-')
}

fn format_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = width.saturating_sub(value.chars().count());
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}
