use serde_json::Value;
use std::io;

use super::{flatten, format_scalar};

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Array(results)) => write_array_csv(&mut wtr, results),
            Some(result @ Value::Object(_)) => write_field_rows(&mut wtr, result),
            Some(other) => {
                let _ = wtr.write_record([&format_scalar(other)]);
            }
            None => write_field_rows(&mut wtr, value),
        },
        Value::Array(arr) => write_array_csv(&mut wtr, arr),
        _ => {
            let _ = wtr.write_record([&format_scalar(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_field_rows(wtr: &mut csv::Writer<io::StdoutLock<'_>>, value: &Value) {
    let _ = wtr.write_record(["field", "value"]);
    for (key, val) in flatten(value) {
        let _ = wtr.write_record([key.as_str(), &format_scalar(&val)]);
    }
}

fn write_array_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            let _ = wtr.write_record([&format_scalar(item)]);
        }
        return;
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    let _ = wtr.write_record(&headers);
    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(format_scalar).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&row);
        }
    }
}
