//! `data:` URL wrapping of encoded pictures.
//!
//! The payload is stored verbatim in a document field, so it has to be
//! self-describing: `data:<mime>;base64,<standard base64>`.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::encode::EncodedImage;

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Not a data URL")]
    MissingScheme,

    #[error("Data URL has no ',' separating header and payload")]
    MissingSeparator,

    #[error("Data URL payload is not base64 encoded")]
    NotBase64,

    #[error("Invalid base64 payload: {0}")]
    InvalidBase64(String),
}

/// A `data:<mime>;base64,...` string ready to persist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DataUrlPayload(String);

impl DataUrlPayload {
    pub fn from_encoded(image: &EncodedImage) -> Self {
        Self::from_parts(image.mime_type, &image.bytes)
    }

    pub fn from_parts(mime_type: &str, bytes: &[u8]) -> Self {
        let encoded = STANDARD.encode(bytes);
        let capacity = SCHEME.len() + mime_type.len() + BASE64_MARKER.len() + 1 + encoded.len();
        let mut url = String::with_capacity(capacity);
        url.push_str(SCHEME);
        url.push_str(mime_type);
        url.push_str(BASE64_MARKER);
        url.push(',');
        url.push_str(&encoded);
        Self(url)
    }

    /// Validate an existing string, e.g. one read back from storage.
    pub fn parse(url: &str) -> Result<Self, PayloadError> {
        Self::try_from(url.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn mime_type(&self) -> Result<&str, PayloadError> {
        self.split().map(|(mime, _)| mime)
    }

    /// Recover the raw image bytes.
    pub fn decode_bytes(&self) -> Result<Vec<u8>, PayloadError> {
        let (_, data) = self.split()?;
        STANDARD
            .decode(data)
            .map_err(|e| PayloadError::InvalidBase64(e.to_string()))
    }

    fn split(&self) -> Result<(&str, &str), PayloadError> {
        let rest = self
            .0
            .strip_prefix(SCHEME)
            .ok_or(PayloadError::MissingScheme)?;
        let (header, data) = rest
            .split_once(',')
            .ok_or(PayloadError::MissingSeparator)?;
        let mime = header
            .strip_suffix(BASE64_MARKER)
            .ok_or(PayloadError::NotBase64)?;
        Ok((mime, data))
    }
}

impl fmt::Display for DataUrlPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DataUrlPayload {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DataUrlPayload {
    type Error = PayloadError;

    fn try_from(url: String) -> Result<Self, Self::Error> {
        let payload = Self(url);
        payload.decode_bytes()?;
        Ok(payload)
    }
}

impl From<DataUrlPayload> for String {
    fn from(payload: DataUrlPayload) -> Self {
        payload.0
    }
}
