use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::{Table, TableOptions};

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(&serde_json::to_value(value)?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn options() -> TableOptions {
    let prefs = ui::prefs();
    TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Arrays of objects become one row per item; a single object becomes a
/// key/value listing. Nested objects are flattened to dotted keys
/// (`signal.kind`).
fn render_table(value: &Value) -> String {
    match value {
        Value::Array(items) if items.is_empty() => String::from("(no rows)"),
        Value::Array(items) => {
            let flattened: Vec<Map<String, Value>> = items.iter().map(flatten).collect();
            let mut headers: Vec<String> = Vec::new();
            for map in &flattened {
                for key in map.keys() {
                    if !headers.contains(key) {
                        headers.push(key.clone());
                    }
                }
            }

            let mut table = Table::new(headers.iter().map(String::as_str));
            for map in &flattened {
                table.push_row(
                    headers
                        .iter()
                        .map(|header| map.get(header).map_or_else(|| "-".to_string(), cell))
                        .collect(),
                );
            }
            table.render(options())
        }
        Value::Object(_) => {
            let mut table = Table::new(["key", "value"]);
            for (key, value) in flatten(value) {
                table.push_row(vec![key, cell(&value)]);
            }
            table.render(options())
        }
        scalar => {
            let mut table = Table::new(["value"]);
            table.push_row(vec![cell(scalar)]);
            table.render(options())
        }
    }
}

fn flatten(value: &Value) -> Map<String, Value> {
    let mut out = Map::new();
    match value {
        Value::Object(map) => flatten_into(&mut out, "", map),
        other => {
            out.insert("value".to_string(), other.clone());
        }
    }
    out
}

fn flatten_into(out: &mut Map<String, Value>, prefix: &str, map: &Map<String, Value>) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(inner) => flatten_into(out, &path, inner),
            other => {
                out.insert(path, other.clone());
            }
        }
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) => items.iter().map(cell).collect::<Vec<_>>().join(", "),
        Value::Object(_) => {
            serde_json::to_string(value).unwrap_or_else(|_| String::from("<invalid-json>"))
        }
    }
}

#[cfg(test)]
mod tests {
    use fault_core::{ErrorKind, Operation, Signal, SurfaceStyle};
    use pretty_assertions::assert_eq;

    use super::render;
    use crate::cli::OutputFormat;

    fn signal() -> Signal {
        Signal::new(Operation::Op2, ErrorKind::Error2, SurfaceStyle::Typed)
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&signal(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["kind"], "error2");
        assert_eq!(parsed["code"], 2);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&signal(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        assert!(out.contains("\"class\":\"Error2\""));
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let out = render(&signal(), OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.starts_with("key")));
        assert!(out.contains("Error2"));
    }

    #[test]
    fn table_render_flattens_nested_objects() {
        #[derive(serde::Serialize)]
        struct Row {
            sequence: u32,
            signal: Signal,
        }

        let rows = vec![Row {
            sequence: 0,
            signal: signal(),
        }];
        let out = render(&rows, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().unwrap();
        assert!(header.contains("signal.kind"));
        assert!(header.contains("sequence"));
    }

    #[test]
    fn empty_array_renders_placeholder() {
        let rows: Vec<Signal> = Vec::new();
        let out = render(&rows, OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }
}
