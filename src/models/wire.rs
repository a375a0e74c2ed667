//! Field access helpers for wire payloads.
//!
//! The backend has drifted between camelCase and snake_case over time, and a
//! few fields carry additional historical aliases. All alias probing lives
//! here so the rest of the crate only ever sees one canonical shape.
//!
//! Numeric coercion is defensive: numbers may arrive as JSON numbers or as
//! numeric strings, and anything non-finite or unparseable normalizes to
//! `None` rather than leaking NaN into comparisons.

use serde_json::Value;

/// Returns the first present value among the given alias keys.
pub fn pick<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let obj = value.as_object()?;
    keys.iter().find_map(|k| obj.get(*k))
}

/// Coerces a JSON value to an integer, tolerating numeric strings.
pub fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i)
            } else {
                n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)
            }
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(i) = trimmed.parse::<i64>() {
                Some(i)
            } else {
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f as i64)
            }
        }
        _ => None,
    }
}

/// Probes alias keys and coerces the first hit to an integer.
pub fn num(value: &Value, keys: &[&str]) -> Option<i64> {
    pick(value, keys).and_then(as_i64)
}

/// Probes alias keys for a non-empty string. Unlike [`pick`], an alias that
/// is present but blank does not stop the probe; later aliases still count.
pub fn text(value: &Value, keys: &[&str]) -> Option<String> {
    let obj = value.as_object()?;
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Probes alias keys for an array.
pub fn array<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Vec<Value>> {
    keys.iter()
        .find_map(|k| value.get(*k))
        .and_then(Value::as_array)
}

/// Joins optional first/last name parts into a display name, if any part is
/// present.
pub fn join_name_parts(first: Option<&str>, last: Option<&str>) -> Option<String> {
    let joined = format!(
        "{} {}",
        first.unwrap_or("").trim(),
        last.unwrap_or("").trim()
    );
    let joined = joined.trim().to_string();
    if joined.is_empty() { None } else { Some(joined) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_num_accepts_numbers_and_numeric_strings() {
        let v = json!({"a": 7, "b": "42", "c": "3.0", "d": "x", "e": null});
        assert_eq!(num(&v, &["a"]), Some(7));
        assert_eq!(num(&v, &["b"]), Some(42));
        assert_eq!(num(&v, &["c"]), Some(3));
        assert_eq!(num(&v, &["d"]), None);
        assert_eq!(num(&v, &["e"]), None);
        assert_eq!(num(&v, &["missing"]), None);
    }

    #[test]
    fn test_num_rejects_non_finite() {
        let v = json!({"a": "NaN", "b": "inf"});
        assert_eq!(num(&v, &["a"]), None);
        assert_eq!(num(&v, &["b"]), None);
    }

    #[test]
    fn test_num_probes_aliases_in_order() {
        let v = json!({"team_a_id": 5});
        assert_eq!(num(&v, &["teamAId", "team_a_id"]), Some(5));
    }

    #[test]
    fn test_text_skips_empty_strings() {
        let v = json!({"name": "  ", "fallback": "Rovers"});
        assert_eq!(text(&v, &["name"]), None);
        assert_eq!(text(&v, &["name", "fallback"]), Some("Rovers".to_string()));
    }

    #[test]
    fn test_text_skips_null_and_non_string_aliases() {
        let v = json!({"name": null, "number": 7, "fallback": "Rovers"});
        assert_eq!(
            text(&v, &["name", "number", "fallback"]),
            Some("Rovers".to_string())
        );
    }

    #[test]
    fn test_join_name_parts() {
        assert_eq!(
            join_name_parts(Some("Ada"), Some("Muro")),
            Some("Ada Muro".to_string())
        );
        assert_eq!(join_name_parts(None, Some("Muro")), Some("Muro".to_string()));
        assert_eq!(join_name_parts(Some("  "), None), None);
    }
}
