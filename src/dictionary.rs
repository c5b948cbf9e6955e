use indexmap::IndexMap;

use crate::error::ShapeError;

/// Text keys to text values. Order carries no meaning; equality ignores it.
/// A repeated key keeps the last value written.
pub type Dictionary = IndexMap<String, String>;

/// Load a JSON object whose values are all strings.
pub fn from_json_str(src: &str) -> Result<Dictionary, ShapeError> {
    crate::path_de::from_str_with_path(src)
}

pub fn from_json_slice(bytes: &[u8]) -> Result<Dictionary, ShapeError> {
    crate::path_de::from_slice_with_path(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_string_pairs() {
        let dict = from_json_str(r#"{ "lang": "en", "region": "us" }"#).unwrap();
        assert_eq!(dict.get("lang").map(String::as_str), Some("en"));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn last_duplicate_wins() {
        let dict = from_json_slice(br#"{ "k": "first", "k": "second" }"#).unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict["k"], "second");
    }

    #[test]
    fn order_is_not_significant() {
        let a = from_json_str(r#"{ "a": "1", "b": "2" }"#).unwrap();
        let b = from_json_str(r#"{ "b": "2", "a": "1" }"#).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn non_string_values_are_rejected_with_their_key() {
        let err = from_json_str(r#"{ "ok": "yes", "count": 3 }"#).unwrap_err();
        assert!(matches!(err, ShapeError::Json { ref path, .. } if path == "count"));
    }
}
