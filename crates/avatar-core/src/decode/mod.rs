//! Decoding of picker output into RGB pixels.
//!
//! This module provides functionality for:
//! - Recognizing the raster format from the file header
//! - Decoding JPEG, PNG, GIF, WebP and BMP into RGB8
//! - Applying EXIF orientation so phone photos come out upright
//! - Resizing to exact or bounded dimensions
//!
//! All operations are synchronous, CPU-bound and free of shared state.

mod reader;
mod resize;
mod types;

pub use reader::{decode_image, sniff_format};
pub use resize::{resize, resize_to_fit};
pub(crate) use resize::calculate_fit_dimensions;
pub use types::{DecodeError, DecodedImage, FilterType, Orientation, SourceFormat};
