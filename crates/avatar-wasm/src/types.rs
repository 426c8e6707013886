//! JavaScript-facing result type.

use avatar_core::IngestOutcome;
use wasm_bindgen::prelude::*;

/// Result of a successful ingest run.
///
/// `data_url` is what gets written to the profile document; the other
/// getters are there for UI feedback (size, quality used).
#[wasm_bindgen]
pub struct JsIngestResult {
    data_url: String,
    bytes: Vec<u8>,
    quality: Option<u8>,
    width: Option<u32>,
    height: Option<u32>,
    mime_type: String,
}

#[wasm_bindgen]
impl JsIngestResult {
    #[wasm_bindgen(getter)]
    pub fn data_url(&self) -> String {
        self.data_url.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    /// JPEG quality of the final encode, or `undefined` for passthrough.
    #[wasm_bindgen(getter)]
    pub fn quality(&self) -> Option<u8> {
        self.quality
    }

    #[wasm_bindgen(getter)]
    pub fn passthrough(&self) -> bool {
        self.quality.is_none()
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// Output width, or `undefined` when the input was passed through.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> Option<u32> {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> Option<u32> {
        self.height
    }

    /// Encoded bytes as a `Uint8Array` (copied).
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl From<IngestOutcome> for JsIngestResult {
    fn from(outcome: IngestOutcome) -> Self {
        let IngestOutcome { image, payload } = outcome;
        let (width, height) = match image.dimensions {
            Some((w, h)) => (Some(w), Some(h)),
            None => (None, None),
        };
        Self {
            data_url: payload.into_string(),
            quality: image.quality,
            mime_type: image.mime_type.to_string(),
            width,
            height,
            bytes: image.bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avatar_core::{DataUrlPayload, EncodedImage};

    #[test]
    fn test_from_passthrough_outcome() {
        let image = EncodedImage::passthrough(vec![0xFF, 0xD8, 0xFF]);
        let payload = DataUrlPayload::from_encoded(&image);
        let result = JsIngestResult::from(IngestOutcome { image, payload });

        assert_eq!(result.data_url(), "data:image/jpeg;base64,/9j/");
        assert!(result.passthrough());
        assert_eq!(result.quality(), None);
        assert_eq!(result.width(), None);
        assert_eq!(result.byte_length(), 3);
    }

    #[test]
    fn test_from_recompressed_outcome() {
        let image = EncodedImage {
            bytes: vec![1, 2, 3, 4],
            quality: Some(55),
            mime_type: "image/jpeg",
            dimensions: Some((400, 400)),
            attempts: Vec::new(),
        };
        let payload = DataUrlPayload::from_encoded(&image);
        let result = JsIngestResult::from(IngestOutcome { image, payload });

        assert_eq!(result.quality(), Some(55));
        assert!(!result.passthrough());
        assert_eq!((result.width(), result.height()), (Some(400), Some(400)));
        assert_eq!(result.bytes(), vec![1, 2, 3, 4]);
        assert_eq!(result.mime_type(), "image/jpeg");
    }
}
