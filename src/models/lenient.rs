//! Deserializers for integer fields the frontend sends either as JSON
//! numbers or as numeric strings (`1` and `"1"` both mean category 1).

use serde::de::Error;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

impl IntOrString {
    fn into_i64<E: Error>(self) -> Result<i64, E> {
        match self {
            IntOrString::Int(v) => Ok(v),
            IntOrString::Str(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("expected an integer, got {:?}", s))),
        }
    }
}

/// Deserialize an integer given as a number or a numeric string.
pub fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    IntOrString::deserialize(deserializer)?.into_i64()
}

/// Deserialize a list of integers, each given as a number or a numeric string.
pub fn int_list<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<IntOrString>::deserialize(deserializer)?
        .into_iter()
        .map(IntOrString::into_i64)
        .collect()
}

/// Resolve an arbitrary JSON value to an integer, if it names one.
pub fn resolve_int(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "int")]
        value: i64,
        #[serde(default, deserialize_with = "int_list")]
        list: Vec<i64>,
    }

    #[test]
    fn test_number_and_string_forms() {
        let from_number: Probe = serde_json::from_value(json!({ "value": 3 })).unwrap();
        let from_string: Probe = serde_json::from_value(json!({ "value": " 3" })).unwrap();
        assert_eq!(from_number.value, 3);
        assert_eq!(from_string.value, 3);
        assert!(from_number.list.is_empty());
    }

    #[test]
    fn test_mixed_list() {
        let probe: Probe =
            serde_json::from_value(json!({ "value": 1, "list": [4, "9", 12] })).unwrap();
        assert_eq!(probe.list, vec![4, 9, 12]);
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(serde_json::from_value::<Probe>(json!({ "value": "science" })).is_err());
        assert!(serde_json::from_value::<Probe>(json!({ "value": null })).is_err());
        assert!(serde_json::from_value::<Probe>(json!({ "value": 1, "list": ["x"] })).is_err());
    }

    #[test]
    fn test_resolve_int() {
        assert_eq!(resolve_int(&json!(5)), Some(5));
        assert_eq!(resolve_int(&json!("5")), Some(5));
        assert_eq!(resolve_int(&json!("five")), None);
        assert_eq!(resolve_int(&json!(2.5)), None);
        assert_eq!(resolve_int(&json!({ "id": 5 })), None);
    }
}
