use serde_json::Value;

closed_union! {
    /// Tokens the `typeof` operator can produce.
    TypeOf, kind = "type-of" {
        Bigint => "bigint",
        Boolean => "boolean",
        Function => "function",
        Number => "number",
        Object => "object",
        String => "string",
        Symbol => "symbol",
        Undefined => "undefined",
    }
}

impl TypeOf {
    /// The token `typeof` yields for a value decoded from JSON.
    /// `null` and arrays report `object`, as they do at run time.
    pub fn of_json(value: &Value) -> TypeOf {
        match value {
            Value::Null => TypeOf::Object,
            Value::Bool(_) => TypeOf::Boolean,
            Value::Number(_) => TypeOf::Number,
            Value::String(_) => TypeOf::String,
            Value::Array(_) | Value::Object(_) => TypeOf::Object,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn known_tokens_parse() {
        assert_eq!("string".parse::<TypeOf>().unwrap(), TypeOf::String);
        assert_eq!(TypeOf::ALL.len(), 8);
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert!("int".parse::<TypeOf>().is_err());
        assert!("String".parse::<TypeOf>().is_err());
    }

    #[test]
    fn json_values_report_their_typeof() {
        assert_eq!(TypeOf::of_json(&json!(null)), TypeOf::Object);
        assert_eq!(TypeOf::of_json(&json!(true)), TypeOf::Boolean);
        assert_eq!(TypeOf::of_json(&json!(1.5)), TypeOf::Number);
        assert_eq!(TypeOf::of_json(&json!("x")), TypeOf::String);
        assert_eq!(TypeOf::of_json(&json!([1, 2])), TypeOf::Object);
        assert_eq!(TypeOf::of_json(&json!({"a": 1})).to_string(), "object");
    }
}
