//! Data URLs
//!
//! `data:<mime>;base64,<payload>` encoding used to ship images to the
//! asset host.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;
use thiserror::Error;

/// A parsed base64 data URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl<'a> {
    /// Media type, e.g. `image/png`
    pub mime: &'a str,
    /// Base64 payload
    pub payload: &'a str,
}

/// Reasons a string is not an acceptable image data URL
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DataUrlError {
    #[error("not a data URL")]
    MissingScheme,

    #[error("data URL must be base64 encoded")]
    NotBase64,

    #[error("unsupported media type: {0}")]
    NotAnImage(String),

    #[error("data URL has no payload")]
    Empty,

    #[error("invalid base64 payload")]
    InvalidPayload,
}

impl<'a> DataUrl<'a> {
    /// Parse and check an image data URL without copying the payload
    pub fn parse(input: &'a str) -> Result<Self, DataUrlError> {
        let rest = input
            .strip_prefix("data:")
            .ok_or(DataUrlError::MissingScheme)?;

        let (header, payload) = rest.split_once(',').ok_or(DataUrlError::MissingScheme)?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or(DataUrlError::NotBase64)?;

        if !mime.starts_with("image/") {
            return Err(DataUrlError::NotAnImage(mime.to_string()));
        }
        if payload.is_empty() {
            return Err(DataUrlError::Empty);
        }

        Ok(Self { mime, payload })
    }

    /// Decode the payload bytes
    pub fn decode(&self) -> Result<Vec<u8>, DataUrlError> {
        STANDARD
            .decode(self.payload)
            .map_err(|_| DataUrlError::InvalidPayload)
    }
}

/// Encode raw bytes as a base64 data URL
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Guess an image media type from a file extension
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "avif" => Some("image/avif"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_png() {
        let url = DataUrl::parse("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(url.mime, "image/png");
        assert_eq!(url.decode().unwrap(), b"hello");
    }

    #[test]
    fn test_parse_rejects_plain_text() {
        assert_eq!(
            DataUrl::parse("https://example.com/a.png"),
            Err(DataUrlError::MissingScheme)
        );
        assert_eq!(
            DataUrl::parse("data:image/png,raw"),
            Err(DataUrlError::NotBase64)
        );
        assert_eq!(
            DataUrl::parse("data:text/plain;base64,aGk="),
            Err(DataUrlError::NotAnImage("text/plain".to_string()))
        );
        assert_eq!(
            DataUrl::parse("data:image/png;base64,"),
            Err(DataUrlError::Empty)
        );
    }

    #[test]
    fn test_decode_invalid_payload() {
        let url = DataUrl::parse("data:image/png;base64,@@@").unwrap();
        assert_eq!(url.decode(), Err(DataUrlError::InvalidPayload));
    }

    #[test]
    fn test_encode_data_url() {
        assert_eq!(
            encode_data_url("image/gif", b"hello"),
            "data:image/gif;base64,aGVsbG8="
        );
    }

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("logo.PNG")), Some("image/png"));
        assert_eq!(mime_for_path(Path::new("a/b/photo.jpeg")), Some("image/jpeg"));
        assert_eq!(mime_for_path(Path::new("notes.txt")), None);
        assert_eq!(mime_for_path(Path::new("README")), None);
    }
}
