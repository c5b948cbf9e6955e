use crate::template::{Part, Template};

pattern_type! {
    /// Text shaped like four numbers separated by dots.
    IPv4, kind = "ipv4", template = Template::new(vec![
        Part::number(),
        Part::text("."),
        Part::number(),
        Part::text("."),
        Part::number(),
        Part::text("."),
        Part::number(),
    ])
}
