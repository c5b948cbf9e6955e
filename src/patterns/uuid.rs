use crate::template::{Part, Template};

/// Digits allowed at the start of the version group.
pub const VERSION_DIGITS: [&str; 5] = ["1", "2", "3", "4", "5"];

/// Characters allowed at the start of the variant group.
pub const VARIANT_DIGITS: [&str; 6] = ["8", "9", "a", "A", "b", "B"];

pattern_type! {
    /// Text shaped like a version-tagged UUID.
    ///
    /// The group after the version hyphen starts with `1`-`5`, the group after
    /// the variant hyphen with one of `8 9 a A b B`. Everything else is free.
    #[allow(clippy::upper_case_acronyms)]
    UUID, kind = "uuid", template = Template::new(vec![
        Part::string(),
        Part::text("-"),
        Part::one_of(VERSION_DIGITS),
        Part::string(),
        Part::text("-"),
        Part::one_of(VARIANT_DIGITS),
        Part::string(),
        Part::text("-"),
        Part::string(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_version_one_variant_a() {
        let id = UUID::new("123e4567-e89b-12d3-a456-426614174000").unwrap();
        assert_eq!(id.len(), 36);
    }

    #[test]
    fn accepts_common_versions_and_upper_case() {
        assert!(UUID::is_valid("f47ac10b-58cc-4372-a567-0e02b2c3d479"));
        assert!(UUID::is_valid("F47AC10B-58CC-5372-B567-0E02B2C3D479"));
    }

    #[test]
    fn rejects_version_zero() {
        assert!(UUID::new("123e4567-e89b-02d3-a456-426614174000").is_err());
    }

    #[test]
    fn rejects_variant_f() {
        assert!(UUID::new("123e4567-e89b-12d3-f456-426614174000").is_err());
    }

    #[test]
    fn distributes_into_thirty_members() {
        assert_eq!(UUID::template().members().len(), VERSION_DIGITS.len() * VARIANT_DIGITS.len());
        assert_eq!(
            UUID::template().to_string(),
            "`${string}-${1 | 2 | 3 | 4 | 5}${string}-${8 | 9 | 'a' | 'A' | 'b' | 'B'}${string}-${string}`"
        );
    }
}
