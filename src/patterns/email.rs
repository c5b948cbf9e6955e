use crate::template::{Part, Template};

pattern_type! {
    /// Text shaped like `<text>@<text>.<text>`.
    ///
    /// Only the `@` and a later `.` are required; either side may be empty.
    EMail, kind = "email", template = Template::new(vec![
        Part::string(),
        Part::text("@"),
        Part::string(),
        Part::text("."),
        Part::string(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        let email: EMail = "user@example.com".parse().unwrap();
        assert_eq!(email, "user@example.com");
        assert!(EMail::is_valid("first.last+tag@sub.example.co.uk"));
    }

    #[test]
    fn rejects_text_without_at_then_dot() {
        assert!(EMail::new("not-an-email").is_err());
        assert!(!EMail::is_valid("user@localhost"));
        assert!(!EMail::is_valid("example.com@user"));
    }

    #[test]
    fn shape_only_not_rfc_validity() {
        assert!(EMail::is_valid("@."));
        assert!(EMail::is_valid("a b@c d.e"));
    }

    #[test]
    fn serde_validates_on_the_way_in() {
        let ok: EMail = serde_json::from_str(r#""me@host.org""#).unwrap();
        assert_eq!(serde_json::to_string(&ok).unwrap(), r#""me@host.org""#);
        assert!(serde_json::from_str::<EMail>(r#""me-at-host""#).is_err());
    }
}
