//! Reusable formatting utilities for CLI output
//!
//! Payload values arrive as untyped JSON. These helpers turn single values
//! into table cells.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Placeholder for absent values
pub const EMPTY_CELL: &str = "-";

/// Look up a dotted path (`usuario.nome`) inside a JSON object
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, key| current.get(key))
}

/// Plain cell text for any JSON value
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => EMPTY_CELL.to_string(),
        Value::String(s) if s.is_empty() => EMPTY_CELL.to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "yes".to_string(),
        Value::Bool(false) => "no".to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(cell_text).collect::<Vec<_>>().join(", "),
        Value::Object(_) => value.to_string(),
    }
}

/// Format an amount in reais (`R$ 1.234,50`).
///
/// Accepts numbers and decimal strings. Anything else is rendered as text.
pub fn format_money(value: &Value) -> String {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse::<f64>().ok(),
        _ => None,
    };

    let Some(amount) = amount else {
        return cell_text(value);
    };

    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let units = (cents / 100).to_string();

    // Group thousands with dots
    let mut grouped = String::new();
    for (i, ch) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{}R$ {},{:02}", sign, grouped, cents % 100)
}

/// Format an ISO date or date-time as `dd/mm/yyyy [HH:MM]`.
///
/// Values that do not parse are rendered as text.
pub fn format_datetime(value: &Value) -> String {
    let Some(s) = value.as_str() else {
        return cell_text(value);
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.format("%d/%m/%Y %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d/%m/%Y %H:%M").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }

    s.to_string()
}

/// Format a Unix timestamp (seconds) relative to now, e.g. `3h 12m ago`
pub fn format_age(timestamp: i64) -> String {
    let Some(then) = DateTime::<Utc>::from_timestamp(timestamp, 0) else {
        return "N/A".to_string();
    };

    let elapsed = Utc::now().signed_duration_since(then);
    let hours = elapsed.num_hours();
    let mins = elapsed.num_minutes() % 60;

    if elapsed.num_minutes() < 1 {
        "just now".to_string()
    } else if hours > 0 {
        format!("{}h {}m ago", hours, mins)
    } else {
        format!("{}m ago", mins)
    }
}
