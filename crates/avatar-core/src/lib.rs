//! Avatar Core - profile picture ingest
//!
//! Turns whatever an image picker hands back into a JPEG no larger than a
//! byte budget and wraps it as a `data:` URL that can be stored directly in
//! a profile document.
//!
//! # Module Structure
//!
//! - `decode` - format sniffing, decoding, EXIF orientation, resizing
//! - `transform` - square-target policies (stretch, fit, crop, pad)
//! - `encode` - JPEG encoding and the quality-ladder size search
//! - `payload` - `data:` URL construction and parsing
//! - `budget` - limits and their JSON form
//! - `pipeline` - the end-to-end ingest run
//! - `asynchronous` - blocking-pool wrapper (feature `tokio`)
//!
//! # Example
//!
//! ```ignore
//! use avatar_core::{CompressionBudget, ImageIngestPipeline};
//!
//! let pipeline = ImageIngestPipeline::new(CompressionBudget::default());
//! let outcome = pipeline.ingest(&picked_bytes)?;
//! profile.photo_url = outcome.payload.into_string();
//! ```

pub mod budget;
pub mod constants;
pub mod decode;
pub mod encode;
pub mod payload;
pub mod pipeline;
pub mod transform;

// Unit tests build it against the tokio dev-dependency, so a plain
// `cargo test` covers it without `--features tokio`.
#[cfg(any(feature = "tokio", test))]
pub mod asynchronous;

pub use budget::{BudgetError, CompressionBudget, PickerRequest};
pub use decode::{DecodeError, DecodedImage, FilterType, SourceFormat};
pub use encode::{search_best_quality, EncodeError, EncodedImage, QualityLadder, SearchError};
pub use payload::{DataUrlPayload, PayloadError};
pub use pipeline::{ingest, ImageIngestPipeline, IngestError, IngestOutcome};
pub use transform::ResizePolicy;

#[cfg(any(feature = "tokio", test))]
pub use asynchronous::{ingest_async, AsyncIngestError};
