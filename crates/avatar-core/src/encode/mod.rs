//! JPEG encoding and the size-bounded quality search.
//!
//! # Examples
//!
//! ```ignore
//! use avatar_core::encode::{search_best_quality, QualityLadder};
//!
//! let encoded = search_best_quality(&image, 300 * 1024, &QualityLadder::default())?;
//! println!("{} bytes at quality {:?}", encoded.len(), encoded.quality);
//! ```

mod jpeg;
mod ladder;
mod search;

pub use jpeg::{encode_image, encode_jpeg, EncodeError};
pub use ladder::QualityLadder;
pub use search::{search_best_quality, EncodedImage, QualityAttempt, SearchError};
