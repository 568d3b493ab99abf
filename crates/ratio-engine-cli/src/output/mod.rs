pub mod csv_out;
pub mod minimal;
pub mod report_file;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};
use std::io::{self, Write};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Pretty-print JSON to stdout.
fn print_json(value: &Value) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match serde_json::to_writer_pretty(&mut out, value) {
        Ok(()) => {
            let _ = writeln!(out);
        }
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

/// Flatten nested objects into `parent.child` keys, leaving arrays and
/// scalars as leaves. Ratio results nest several levels deep.
pub fn flatten(value: &Value) -> Vec<(String, Value)> {
    let mut rows = Vec::new();
    if let Value::Object(map) = value {
        flatten_into(&mut rows, "", map);
    }
    rows
}

fn flatten_into(rows: &mut Vec<(String, Value)>, prefix: &str, map: &Map<String, Value>) {
    for (key, val) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match val {
            Value::Object(inner) if !inner.is_empty() => flatten_into(rows, &path, inner),
            other => rows.push((path, other.clone())),
        }
    }
}

/// Scalar rendering shared by the table and CSV writers.
pub fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_nested_result() {
        let value = json!({
            "balance": { "working_capital": { "current": "16000" } },
            "flags": ["a", "b"],
            "empty": {},
        });
        let rows = flatten(&value);
        let keys: Vec<&str> = rows.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["balance.working_capital.current", "empty", "flags"]);
        assert_eq!(rows[0].1, json!("16000"));
    }

    #[test]
    fn test_format_scalar() {
        assert_eq!(format_scalar(&json!("NaN")), "NaN");
        assert_eq!(format_scalar(&json!(true)), "true");
        assert_eq!(format_scalar(&Value::Null), "");
    }
}
