//! Reusable shape definitions for common textual data.
//!
//! - [`conditional`]: pick one of two types from a type-level boolean
//! - [`DefaultImport`]: the default export of a dynamically loaded module
//! - [`Dictionary`]: text to text mapping
//! - [`patterns`]: `EMail`, `IPv4`, `MacAddress`, `NumberString`, `UUID`
//! - [`vocab`]: the closed unions `HttpMethod` and `TypeOf`
//!
//! Pattern types check textual shape only, at run time, against a
//! [`Template`](template::Template). They never parse or canonicalize.
pub mod cli;
pub mod conditional;
pub mod default_import;
pub mod dictionary;
pub mod error;
pub mod number;
pub mod path_de;
pub mod patterns;
pub mod template;
pub mod vocab;

pub use conditional::{Bool, Boolean, Conditional, Either, False, True};
pub use default_import::DefaultImport;
pub use dictionary::Dictionary;
pub use error::ShapeError;
pub use patterns::{EMail, IPv4, MacAddress, NumberString, UUID};
pub use template::Template;
pub use vocab::{HttpMethod, TypeOf};

/// Check `text` against any catalog kind, pattern or closed union.
/// Returns `None` when `kind` is not in the catalog.
pub fn check(kind: &str, text: &str) -> Option<error::Result<()>> {
    patterns::check(kind, text).or_else(|| vocab::check(kind, text))
}
