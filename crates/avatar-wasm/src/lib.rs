//! Avatar WASM - WebAssembly bindings for avatar-core
//!
//! Exposes the profile picture ingest pipeline to JavaScript hosts. Run it
//! from a Web Worker: decode and re-encode are CPU-bound and would otherwise
//! stall the UI thread.
//!
//! # Usage
//!
//! ```typescript
//! import init, { ingest_image } from '@avatar/wasm';
//!
//! await init();
//! const result = ingest_image(new Uint8Array(await file.arrayBuffer()));
//! console.log(`${result.byte_length} bytes, quality ${result.quality}`);
//! ```

use wasm_bindgen::prelude::*;

mod ingest;
mod types;

pub use ingest::{default_budget, ingest_image, picker_request};
pub use types::JsIngestResult;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
