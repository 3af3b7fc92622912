//! Output formatting for CLI results

use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod formatters;
pub mod json;
pub mod table;

pub use table::Column;

/// The list inside a payload: a bare array, or the `items` of a paged response
pub fn rows_of(payload: &Value) -> Option<&[Value]> {
    match payload {
        Value::Array(items) => Some(items),
        Value::Object(map) => map.get("items").and_then(Value::as_array).map(Vec::as_slice),
        _ => None,
    }
}

/// `Page 2 of 5 (93 records)` for paged responses
fn page_footer(payload: &Value) -> Option<String> {
    let page = payload.get("page")?.as_u64()?;
    let total_pages = payload.get("total_pages")?.as_u64()?;
    let total = payload.get("total")?.as_u64()?;
    Some(format!("Page {} of {} ({} records)", page, total_pages, total))
}

/// Render a payload in the requested format
pub fn render(payload: &Value, format: OutputFormat, columns: &[Column]) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(json::format_json(payload)?),
        OutputFormat::Table => match (rows_of(payload), payload) {
            (Some(rows), _) => Ok(table::format_table(rows, columns)),
            (None, Value::Null) => Ok(table::format_table(&[], columns)),
            (None, single) => Ok(table::format_table(std::slice::from_ref(single), columns)),
        },
        OutputFormat::Pretty => match rows_of(payload) {
            Some(rows) => {
                let mut out = table::format_table(rows, columns);
                if let Some(footer) = page_footer(payload) {
                    out.push('\n');
                    out.push_str(&footer);
                }
                Ok(out)
            }
            None => Ok(serde_json::to_string_pretty(payload)?),
        },
    }
}

/// Render a payload and print it to stdout
pub fn print(payload: &Value, format: OutputFormat, columns: &[Column]) -> Result<()> {
    println!("{}", render(payload, format, columns)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paged() -> Value {
        json!({
            "items": [{"id": 1, "nome": "Maria"}, {"id": 2, "nome": "José"}],
            "total": 12,
            "page": 1,
            "limit": 2,
            "total_pages": 6
        })
    }

    #[test]
    fn test_rows_of() {
        assert_eq!(rows_of(&json!([1, 2])).map(<[Value]>::len), Some(2));
        assert_eq!(rows_of(&paged()).map(<[Value]>::len), Some(2));
        assert!(rows_of(&json!({"id": 1})).is_none());
        assert!(rows_of(&Value::Null).is_none());
    }

    #[test]
    fn test_pretty_paged_has_footer() {
        let columns = [Column::text("NAME", "nome")];
        let out = render(&paged(), OutputFormat::Pretty, &columns).unwrap();

        assert!(out.contains("Maria"));
        assert!(out.ends_with("Page 1 of 6 (12 records)"));
    }

    #[test]
    fn test_pretty_object_is_indented_json() {
        let out = render(&json!({"status": "healthy"}), OutputFormat::Pretty, &[]).unwrap();
        assert_eq!(out, "{\n  \"status\": \"healthy\"\n}");
    }

    #[test]
    fn test_table_single_object_is_one_row() {
        let columns = [Column::text("ID", "id"), Column::text("NAME", "nome")];
        let out = render(&json!({"id": 9, "nome": "Ana"}), OutputFormat::Table, &columns).unwrap();

        assert!(out.contains("Ana"));
        assert!(!out.contains("Page"));
    }

    #[test]
    fn test_table_null_is_empty() {
        let out = render(&Value::Null, OutputFormat::Table, &[]).unwrap();
        assert_eq!(out, "No results found.");
    }

    #[test]
    fn test_json_is_enveloped() {
        let out = render(&json!([]), OutputFormat::Json, &[]).unwrap();
        assert!(out.contains("\"data\": []"));
        assert!(out.contains("\"meta\""));
    }
}
