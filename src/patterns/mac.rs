use crate::template::{Part, Template};

fn six_segments(sep: &str) -> Vec<Part> {
    let mut parts = vec![Part::string()];
    for _ in 0..5 {
        parts.push(Part::text(sep));
        parts.push(Part::string());
    }
    parts
}

pattern_type! {
    /// Text of six hyphen-separated or six colon-separated segments.
    MacAddress, kind = "mac-address", template = Template::union(vec![
        six_segments("-"),
        six_segments(":"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_separators() {
        assert!(MacAddress::new("aa:bb:cc:dd:ee:ff").is_ok());
        assert!(MacAddress::new("aa-bb-cc-dd-ee-ff").is_ok());
        assert_eq!(MacAddress::template().members().len(), 2);
    }

    #[test]
    fn rejects_five_segments() {
        assert!(MacAddress::new("aa:bb:cc:dd:ee").is_err());
        assert!(!MacAddress::is_valid("aa-bb-cc-dd-ee"));
    }

    #[test]
    fn separators_do_not_mix_but_segments_are_free_text() {
        assert!(!MacAddress::is_valid("aa:bb:cc-dd-ee-ff"));
        assert!(MacAddress::is_valid("zz:zz:zz:zz:zz:zz"));
        assert!(MacAddress::is_valid(":::::"));
    }
}
