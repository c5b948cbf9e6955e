//! Validated text types, one per template-literal pattern.
//!
//! Every type here wraps a `String` that matched its [`Template`] when it was
//! built. Matching is purely textual: `192.168.0.1` and `1.2.3.4.5` are both
//! `IPv4` values because the last `${number}` hole captures `4.5`. Nothing is
//! parsed or canonicalized. `assume_unchecked` skips the check entirely, the
//! same way a cast would in a structural type system.
use crate::template::Template;

macro_rules! pattern_type {
    (
        $(#[$meta:meta])*
        $name:ident, kind = $kind:literal, template = $template:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Name used in diagnostics and on the command line.
            pub const KIND: &'static str = $kind;

            pub fn template() -> &'static $crate::template::Template {
                static TEMPLATE: once_cell::sync::Lazy<$crate::template::Template> =
                    once_cell::sync::Lazy::new(|| $template);
                &TEMPLATE
            }

            pub fn is_valid(text: &str) -> bool {
                Self::template().matches(text)
            }

            pub fn new(text: impl Into<String>) -> $crate::error::Result<Self> {
                let text = text.into();
                if Self::is_valid(&text) {
                    Ok(Self(text))
                } else {
                    Err($crate::error::ShapeError::PatternMismatch {
                        kind: Self::KIND,
                        value: text,
                        template: Self::template().to_string(),
                    })
                }
            }

            /// Wraps `text` without checking it.
            pub fn assume_unchecked(text: impl Into<String>) -> Self {
                Self(text.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::ShapeError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::error::ShapeError;
            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::error::ShapeError;
            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

pub mod email;
pub mod ipv4;
pub mod mac;
pub mod number_string;
pub mod uuid;

pub use email::EMail;
pub use ipv4::IPv4;
pub use mac::MacAddress;
pub use number_string::NumberString;
pub use uuid::UUID;

/// Every pattern type's kind name with its template, in catalog order.
pub fn catalog() -> [(&'static str, &'static Template); 5] {
    [
        (EMail::KIND, EMail::template()),
        (IPv4::KIND, IPv4::template()),
        (MacAddress::KIND, MacAddress::template()),
        (NumberString::KIND, NumberString::template()),
        (UUID::KIND, UUID::template()),
    ]
}

/// Check `text` against the pattern type named `kind`.
/// Returns `None` when `kind` names no pattern type.
pub fn check(kind: &str, text: &str) -> Option<crate::error::Result<()>> {
    let result = match kind {
        EMail::KIND => EMail::new(text).map(drop),
        IPv4::KIND => IPv4::new(text).map(drop),
        MacAddress::KIND => MacAddress::new(text).map(drop),
        NumberString::KIND => NumberString::new(text).map(drop),
        UUID::KIND => UUID::new(text).map(drop),
        _ => return None,
    };
    Some(result)
}
