//! Table output formatting

use std::borrow::Cow;

use serde_json::Value;
use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

use super::formatters::{cell_text, format_datetime, format_money, lookup};

/// A table column over JSON rows
#[derive(Debug, Clone)]
pub struct Column {
    pub header: Cow<'static, str>,
    /// Dotted path into each row; empty means the row itself
    pub key: Cow<'static, str>,
    render: fn(&Value) -> String,
}

impl Column {
    pub fn text(header: &'static str, key: &'static str) -> Self {
        Self::with_render(header, key, cell_text)
    }

    pub fn money(header: &'static str, key: &'static str) -> Self {
        Self::with_render(header, key, format_money)
    }

    pub fn datetime(header: &'static str, key: &'static str) -> Self {
        Self::with_render(header, key, format_datetime)
    }

    fn with_render(header: &'static str, key: &'static str, render: fn(&Value) -> String) -> Self {
        Self {
            header: Cow::Borrowed(header),
            key: Cow::Borrowed(key),
            render,
        }
    }

    fn cell(&self, row: &Value) -> String {
        let value = if self.key.is_empty() {
            Some(row)
        } else {
            lookup(row, &self.key)
        };
        (self.render)(value.unwrap_or(&Value::Null))
    }
}

/// Columns for the scalar fields of `row`, in payload order
fn columns_from(row: &Value) -> Vec<Column> {
    let columns: Vec<Column> = match row {
        Value::Object(map) => map
            .iter()
            .filter(|(_, v)| !v.is_object() && !v.is_array())
            .map(|(k, _)| Column {
                header: Cow::Owned(k.clone()),
                key: Cow::Owned(k.clone()),
                render: cell_text,
            })
            .collect(),
        _ => Vec::new(),
    };

    if columns.is_empty() {
        vec![Column::text("VALUE", "")]
    } else {
        columns
    }
}

/// Format JSON rows as a table. Empty `columns` derives them from the first row.
pub fn format_table(rows: &[Value], columns: &[Column]) -> String {
    if rows.is_empty() {
        return "No results found.".to_string();
    }

    let derived;
    let columns = if columns.is_empty() {
        derived = columns_from(&rows[0]);
        &derived[..]
    } else {
        columns
    };

    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(|c| c.header.to_string()));
    for row in rows {
        builder.push_record(columns.iter().map(|c| c.cell(row)));
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_table_empty() {
        assert_eq!(format_table(&[], &[]), "No results found.");
    }

    #[test]
    fn test_format_table_selected_columns() {
        let rows = vec![
            json!({"id": 1, "nome": "Maria", "telefone": "1199", "valor": "45.00"}),
            json!({"id": 2, "nome": "José", "telefone": null, "valor": 30}),
        ];
        let columns = [
            Column::text("ID", "id"),
            Column::text("NAME", "nome"),
            Column::money("VALUE", "valor"),
        ];

        let result = format_table(&rows, &columns);

        assert!(result.contains("NAME"));
        assert!(result.contains("Maria"));
        assert!(result.contains("R$ 30,00"));
        assert!(!result.contains("1199"));
    }

    #[test]
    fn test_format_table_nested_key_and_missing() {
        let rows = vec![json!({"motorista": {"nome": "Carlos"}})];
        let columns = [
            Column::text("DRIVER", "motorista.nome"),
            Column::datetime("CREATED", "created_at"),
        ];

        let result = format_table(&rows, &columns);
        assert!(result.contains("Carlos"));
        assert!(result.contains("-"));
    }

    #[test]
    fn test_format_table_derives_columns() {
        let rows = vec![json!({"id": 3, "nome": "Embu", "locais": [1, 2]})];
        let result = format_table(&rows, &[]);

        assert!(result.contains("nome"));
        assert!(result.contains("Embu"));
        assert!(!result.contains("locais"));
    }

    #[test]
    fn test_format_table_scalar_rows() {
        let result = format_table(&[json!("06:00"), json!("17:30")], &[]);
        assert!(result.contains("VALUE"));
        assert!(result.contains("17:30"));
    }

    #[test]
    fn test_format_table_uses_rounded_style() {
        let result = format_table(&[json!({"id": 1})], &[Column::text("ID", "id")]);

        // Rounded style uses ╭ for top-left corner
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }
}
