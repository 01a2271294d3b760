//! Lenient deserializers for fields the API does not type consistently.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a string, a number, or null and yields its text form.
///
/// Weights and times come back as numbers from some endpoints and as the raw
/// form input from others.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    })
}

/// Accepts a single URL or an array of URLs and keeps the first one.
pub fn string_or_first<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Array(items) => items.into_iter().find_map(|item| match item {
            Value::String(text) => Some(text),
            _ => None,
        }),
        _ => None,
    })
}

/// Converts numeric form input into a JSON number when it parses, keeping the
/// raw text otherwise.
pub fn numeric_value(input: &str) -> Value {
    let trimmed = input.trim();
    if let Ok(int) = trimmed.parse::<i64>() {
        return Value::from(int);
    }
    match trimmed.parse::<f64>() {
        Ok(float) if float.is_finite() => Value::from(float),
        _ => Value::from(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "string_or_number")]
        weight: String,
        #[serde(default, deserialize_with = "string_or_first")]
        image: Option<String>,
    }

    #[test]
    fn numbers_and_strings_both_decode() {
        let probe: Probe = serde_json::from_str(r#"{"weight": 250}"#).unwrap();
        assert_eq!(probe.weight, "250");
        let probe: Probe = serde_json::from_str(r#"{"weight": "250g"}"#).unwrap();
        assert_eq!(probe.weight, "250g");
        let probe: Probe = serde_json::from_str(r#"{"weight": null}"#).unwrap();
        assert_eq!(probe.weight, "");
    }

    #[test]
    fn image_arrays_keep_the_first_url() {
        let probe: Probe = serde_json::from_str(r#"{"image": ["a.png", "b.png"]}"#).unwrap();
        assert_eq!(probe.image.as_deref(), Some("a.png"));
        let probe: Probe = serde_json::from_str(r#"{"image": []}"#).unwrap();
        assert_eq!(probe.image, None);
        let probe: Probe = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(probe.image, None);
    }

    #[test]
    fn numeric_form_input_becomes_a_number() {
        assert_eq!(numeric_value("250"), Value::from(250));
        assert_eq!(numeric_value(" 1.5 "), Value::from(1.5));
        assert_eq!(numeric_value("a lot"), Value::from("a lot"));
    }
}
