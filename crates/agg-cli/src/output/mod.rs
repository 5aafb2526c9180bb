use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Arrays of objects become one row per element; objects become
/// `field`/`value` rows in field order.
fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let rendered = match serde_json::to_value(value)? {
        Value::Array(items) => render_rows(&items),
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), cell(value)])
                .collect::<Vec<_>>();
            table::render_table(&["field", "value"], &rows, options())
        }
        scalar => cell(&scalar),
    };
    Ok(rendered)
}

fn render_rows(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, options());
    }

    let mut headers = Vec::<&str>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(*header).map_or_else(|| String::from("-"), cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    table::render_table(&headers, &rows, options())
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(text) => text.clone(),
        Value::Array(items) if items.is_empty() => String::from("[]"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        collection: &'static str,
        records: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Row {
            collection: "tools",
            records: 7,
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["collection"], "tools");
        assert_eq!(parsed["records"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = vec![Row {
            collection: "tools",
            records: 7,
        }];
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_keeps_field_order() {
        let value = vec![
            Row {
                collection: "tools",
                records: 7,
            },
            Row {
                collection: "agents",
                records: 2,
            },
        ];
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().expect("table has a header");
        assert!(header.find("collection") < header.find("records"));
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn table_render_for_object_lists_fields() {
        let value = Row {
            collection: "tools",
            records: 7,
        };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.starts_with("field"));
        assert!(out.contains("collection"));
    }

    #[test]
    fn empty_list_has_placeholder_text() {
        let value: Vec<Row> = Vec::new();
        assert_eq!(render(&value, OutputFormat::Table).unwrap(), "(no rows)");
    }
}
