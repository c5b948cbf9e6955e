use serde::{Deserialize, Serialize};

use crate::error::ShapeError;

/// Shape of a dynamically loaded module: its default export under `default`.
///
/// ```
/// use serde::Deserialize;
/// use shape_catalog::DefaultImport;
///
/// #[derive(Deserialize)]
/// struct Example {
///     example: String,
/// }
///
/// let DefaultImport { default: Example { example } } =
///     DefaultImport::<Example>::from_json_str(r#"{ "default": { "example": "x" } }"#).unwrap();
/// assert_eq!(example, "x");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DefaultImport<T> {
    pub default: T,
}

impl<T> DefaultImport<T> {
    pub fn new(default: T) -> Self {
        DefaultImport { default }
    }

    pub fn into_inner(self) -> T {
        self.default
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DefaultImport<U> {
        DefaultImport { default: f(self.default) }
    }
}

impl<T: serde::de::DeserializeOwned> DefaultImport<T> {
    /// Load from JSON text; errors name the JSON path that failed.
    pub fn from_json_str(src: &str) -> Result<Self, ShapeError> {
        crate::path_de::from_str_with_path(src)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ShapeError> {
        crate::path_de::from_slice_with_path(bytes)
    }
}

impl<T> From<T> for DefaultImport<T> {
    fn from(default: T) -> Self {
        DefaultImport { default }
    }
}
