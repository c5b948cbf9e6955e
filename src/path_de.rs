use serde::de::DeserializeOwned;

use crate::error::ShapeError;

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, ShapeError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(into_shape_error)
}

pub fn from_slice_with_path<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ShapeError> {
    let de = &mut serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize::<_, T>(de).map_err(into_shape_error)
}

fn into_shape_error(err: serde_path_to_error::Error<serde_json::Error>) -> ShapeError {
    let path = err.path().to_string();
    ShapeError::Json { path, message: err.into_inner().to_string() }
}
