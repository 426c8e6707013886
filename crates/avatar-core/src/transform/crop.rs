//! Center cropping to a square.

use crate::decode::DecodedImage;

/// Copy the largest centered square out of `image`.
///
/// When the excess is odd, the extra pixel is dropped from the right or
/// bottom edge. Square inputs are returned as a clone.
pub fn crop_center_square(image: &DecodedImage) -> DecodedImage {
    if image.is_square() || image.is_empty() {
        return image.clone();
    }

    let side = image.width.min(image.height);
    let left = (image.width - side) / 2;
    let top = (image.height - side) / 2;

    let row_bytes = (side * 3) as usize;
    let mut output = Vec::with_capacity(row_bytes * side as usize);

    for y in top..top + side {
        let start = ((y * image.width + left) * 3) as usize;
        output.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    DecodedImage {
        width: side,
        height: side,
        pixels: output,
    }
}
