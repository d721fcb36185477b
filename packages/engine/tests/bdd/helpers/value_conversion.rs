//! Value conversion helpers for Gherkin steps
//!
//! Converts rule, data and table text from feature files to engine values.

use jsonlogic_engine::{Map, Value};

/// Parse JSON written inline in a step, panicking with the offending text.
pub fn parse_step_json(text: &str) -> Value {
    Value::from_json(text.trim())
        .unwrap_or_else(|e| panic!("Invalid JSON in step '{}': {}", text, e))
}

/// Convert a Gherkin table cell value to an engine Value.
///
/// Supports:
/// - `true` / `false` -> Bool
/// - `null` or empty -> Null
/// - Integer literals -> Int
/// - Float literals -> Float
/// - Everything else -> String
pub fn convert_gherkin_value(val: &str) -> Value {
    let trimmed = val.trim();

    if trimmed == "true" {
        return Value::Bool(true);
    }
    if trimmed == "false" {
        return Value::Bool(false);
    }

    if trimmed == "null" || trimmed.is_empty() {
        return Value::Null;
    }

    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Int(i);
    }

    if let Ok(f) = trimmed.parse::<f64>() {
        return Value::Float(f);
    }

    Value::String(trimmed.to_string())
}

/// Parse a two-column Gherkin data table into an object value.
///
/// The table format is:
/// ```text
/// | key1 | value1 |
/// | key2 | value2 |
/// ```
/// Rows keep their order in the resulting object.
pub fn parse_table_to_object(table: &cucumber::gherkin::Table) -> Value {
    let mut object = Map::new();

    for row in &table.rows {
        if row.len() >= 2 {
            let key = row[0].trim().to_string();
            object.insert(key, convert_gherkin_value(&row[1]));
        }
    }

    Value::Object(object)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::{convert_gherkin_value, parse_step_json};
    use jsonlogic_engine::Value;

    #[test]
    fn test_convert_scalars() {
        assert_eq!(convert_gherkin_value(" true "), Value::Bool(true));
        assert_eq!(convert_gherkin_value(""), Value::Null);
        assert_eq!(convert_gherkin_value("-10"), Value::Int(-10));
        assert_eq!(convert_gherkin_value("0.5"), Value::Float(0.5));
        assert_eq!(convert_gherkin_value("ada"), Value::from("ada"));
    }

    #[test]
    fn test_parse_step_json() {
        assert_eq!(parse_step_json(" [1] "), Value::Array(vec![Value::Int(1)]));
    }
}
