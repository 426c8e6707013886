//! Scaling a decoded image to the square avatar target.

use serde::{Deserialize, Serialize};

use super::{crop_center_square, pad_to_square};
use crate::decode::{
    calculate_fit_dimensions, resize, resize_to_fit, DecodeError, DecodedImage, FilterType,
};

/// How a non-square picture is mapped onto the `max_dimension` square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResizePolicy {
    /// Scale to exactly `max_dimension` x `max_dimension`, distorting the
    /// aspect ratio of non-square input.
    #[default]
    Stretch,
    /// Scale so the longest edge is at most `max_dimension`. Never upscales;
    /// the output is not necessarily square.
    Fit,
    /// Crop the largest centered square, then scale it to the target.
    CropCenter,
    /// Scale the whole picture inside the target and fill the bars.
    Pad {
        #[serde(default = "default_fill")]
        fill: [u8; 3],
    },
}

fn default_fill() -> [u8; 3] {
    [255, 255, 255]
}

/// Apply `policy` to bring `image` down to the avatar target.
pub fn resize_to_square(
    image: &DecodedImage,
    max_dimension: u32,
    policy: ResizePolicy,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    match policy {
        ResizePolicy::Stretch => resize(image, max_dimension, max_dimension, filter),
        ResizePolicy::Fit => resize_to_fit(image, max_dimension, filter),
        ResizePolicy::CropCenter => {
            let square = crop_center_square(image);
            resize(&square, max_dimension, max_dimension, filter)
        }
        ResizePolicy::Pad { fill } => {
            if max_dimension == 0 {
                return Err(DecodeError::InvalidDimensions {
                    width: 0,
                    height: 0,
                });
            }
            let (w, h) = calculate_fit_dimensions(image.width, image.height, max_dimension);
            let scaled = resize(image, w, h, filter)?;
            Ok(pad_to_square(&scaled, fill))
        }
    }
}
