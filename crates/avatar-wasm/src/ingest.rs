//! Ingest bindings.
//!
//! # Example
//!
//! ```typescript
//! import { ingest_image, default_budget } from '@avatar/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! try {
//!   const result = ingest_image(bytes, { max_bytes: 300 * 1024 });
//!   await profileDoc.update({ photoUrl: result.data_url });
//! } catch (e) {
//!   showSnackbar(e.message);
//! }
//! ```

use avatar_core::{CompressionBudget, ImageIngestPipeline, PickerRequest};
use wasm_bindgen::prelude::*;

use crate::types::JsIngestResult;

/// Compress picker bytes into a data URL that fits the budget.
///
/// `budget` is an optional plain object; omitted fields use the defaults
/// (300 KiB, 400px square, quality 75 down to 25).
///
/// Throws an `Error` whose message is suitable for display when the bytes
/// are not an image or cannot be brought under the budget.
#[wasm_bindgen]
pub fn ingest_image(bytes: &[u8], budget: JsValue) -> Result<JsIngestResult, JsValue> {
    let budget = if budget.is_undefined() || budget.is_null() {
        CompressionBudget::default()
    } else {
        serde_wasm_bindgen::from_value(budget)
            .map_err(|e| to_js_error(&format!("Invalid budget: {e}")))?
    };

    run_ingest(bytes, budget).map_err(|message| {
        web_sys::console::warn_1(&JsValue::from_str(&message));
        to_js_error(&message)
    })
}

/// The default budget as a plain object.
#[wasm_bindgen]
pub fn default_budget() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&CompressionBudget::default())
        .map_err(|e| to_js_error(&e.to_string()))
}

/// Size and quality to request from the platform image picker.
#[wasm_bindgen]
pub fn picker_request() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&PickerRequest::default())
        .map_err(|e| to_js_error(&e.to_string()))
}

pub(crate) fn run_ingest(
    bytes: &[u8],
    budget: CompressionBudget,
) -> Result<JsIngestResult, String> {
    ImageIngestPipeline::new(budget)
        .ingest(bytes)
        .map(JsIngestResult::from)
        .map_err(|e| e.to_string())
}

fn to_js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}
