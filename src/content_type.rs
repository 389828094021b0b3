use crate::error::{CatScraperError, Result};

/// Maps a response content type to the extension its file is saved with.
/// The header value must match exactly; parameters are not stripped.
pub fn file_extension(content_type: &str) -> Result<&'static str> {
    match content_type {
        "image/jpeg" => Ok(".jpg"),
        "image/png" => Ok(".png"),
        "image/gif" => Ok(".gif"),
        _ => Err(CatScraperError::UnknownContentType(content_type.to_string())),
    }
}
