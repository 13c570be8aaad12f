//! Plain-text rendering for the intents that are not drawn as charts.

use resultview_core::{ScalarMap, Table, TextBlocks};
use serde_json::Value;

pub fn render_table(table: &Table, precision: usize) -> String {
    let cells = table
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Some(value) => value_text(value, precision),
                    None => "-".to_string(),
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let widths = table
        .headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            cells
                .iter()
                .map(|row| row.get(col).map_or(1, |cell| cell.chars().count()))
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();

    let mut lines = Vec::with_capacity(cells.len() + 2);
    lines.push(join_padded(&table.headers, &widths));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &cells {
        lines.push(join_padded(row, &widths));
    }

    lines.join("\n")
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(col, width)| {
            let cell = cells.get(col).map_or("-", String::as_str);
            format!("{cell:<width$}", width = *width)
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

pub fn render_text_blocks(text: &TextBlocks) -> String {
    text.blocks
        .iter()
        .map(|block| {
            let mut section = format!("[{}]", block.title);
            for line in &block.lines {
                section.push('\n');
                section.push_str(line);
            }
            section
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_scalar_map(map: &ScalarMap, precision: usize) -> String {
    map.entries
        .iter()
        .map(|entry| format!("{} = {}", entry.name, number_text(entry.value, precision)))
        .chain(
            map.passthrough
                .iter()
                .map(|(name, value)| format!("{name} = {}", value_text(value, precision))),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

fn value_text(value: &Value, precision: usize) -> String {
    match value {
        Value::Number(number) => match number.as_f64() {
            Some(float) if number.is_f64() => number_text(float, precision),
            _ => number.to_string(),
        },
        Value::String(text) => text.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

fn number_text(value: f64, precision: usize) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.precision$}")
    }
}
