use crate::template::{Part, Template};

pattern_type! {
    /// Text that is exactly the rendering of a number.
    NumberString, kind = "number-string", template = Template::new(vec![Part::number()])
}
