//! Closed unions of lowercase tokens.
//!
//! Membership is fixed and case-sensitive. Parsing anything outside the set,
//! including a differently-cased member, fails with
//! [`ShapeError::UnknownToken`](crate::error::ShapeError::UnknownToken).

macro_rules! closed_union {
    (
        $(#[$meta:meta])*
        $name:ident, kind = $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $token)] $variant,)+
        }

        impl $name {
            pub const KIND: &'static str = $kind;

            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }

            pub fn is_member(token: &str) -> bool {
                token.parse::<$name>().is_ok()
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::ShapeError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    _ => Err($crate::error::ShapeError::UnknownToken {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::error::ShapeError;
            fn try_from(value: &str) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }
    };
}

pub mod http_method;
pub mod type_of;

pub use http_method::HttpMethod;
pub use type_of::TypeOf;

/// Every closed union's kind name with its members as tokens.
pub fn catalog() -> [(&'static str, Vec<&'static str>); 2] {
    [
        (HttpMethod::KIND, HttpMethod::ALL.iter().map(|m| m.as_str()).collect()),
        (TypeOf::KIND, TypeOf::ALL.iter().map(|t| t.as_str()).collect()),
    ]
}

/// Check `token` against the closed union named `kind`.
/// Returns `None` when `kind` names no closed union.
pub fn check(kind: &str, token: &str) -> Option<crate::error::Result<()>> {
    let result = match kind {
        HttpMethod::KIND => token.parse::<HttpMethod>().map(drop),
        TypeOf::KIND => token.parse::<TypeOf>().map(drop),
        _ => return None,
    };
    Some(result)
}
