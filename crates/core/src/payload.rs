use serde_json::{Map, Value};

/// An untyped result record handed over by the upstream engine.
pub type Payload = Map<String, Value>;

/// Field names with a fixed meaning. Scans over arbitrary keys skip these.
pub const RESERVED_KEYS: &[&str] = &[
    "topic",
    "samples",
    "time",
    "values",
    "phasor",
    "solution",
    "vectors",
    "node_voltages",
    "frequency",
    "magnitude",
    "phase",
    "table",
    "voltages",
    "currents",
    "outputs",
    "roots",
    "real",
    "imag",
    "modulus",
    "argument",
    "coefficients",
    "about",
    "iterations",
    "t",
    "y",
    "x",
    "y_fit",
];

/// Keys probed, in order, for an indexed array.
pub const INDEXED_ARRAY_KEYS: &[&str] = &["voltages", "currents", "outputs"];

pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Title carried under `topic`, if it is a string.
pub fn topic(payload: &Payload) -> Option<&str> {
    payload.get("topic").and_then(Value::as_str)
}

pub(crate) fn number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| n.is_finite())
}

pub(crate) fn number_at(record: &Map<String, Value>, key: &str) -> Option<f64> {
    record.get(key).and_then(number)
}

/// A non-empty array whose every element is a number.
pub(crate) fn numeric_array(value: &Value) -> Option<Vec<f64>> {
    let items = value.as_array()?;
    if items.is_empty() {
        return None;
    }
    items.iter().map(number).collect()
}

pub(crate) fn numeric_array_at(record: &Map<String, Value>, key: &str) -> Option<Vec<f64>> {
    record.get(key).and_then(numeric_array)
}

/// A non-empty array whose every element is a string.
pub(crate) fn string_array(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array()?;
    if items.is_empty() {
        return None;
    }
    items
        .iter()
        .map(|item| item.as_str().map(ToString::to_string))
        .collect()
}

/// Indented `key: value` text for a nested record.
pub(crate) fn record_to_text(record: &Map<String, Value>) -> Vec<String> {
    let mut lines = Vec::new();
    write_record(record, 0, &mut lines);
    lines
}

fn write_record(record: &Map<String, Value>, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    for (key, value) in record {
        match value {
            Value::Object(inner) if !inner.is_empty() => {
                lines.push(format!("{indent}{key}:"));
                write_record(inner, depth + 1, lines);
            }
            other => lines.push(format!("{indent}{key}: {}", scalar_text(other))),
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}
