//! Letterboxing onto a square canvas.

use crate::decode::DecodedImage;

/// Center `image` on a square canvas of `max(width, height)` filled with `fill`.
pub fn pad_to_square(image: &DecodedImage, fill: [u8; 3]) -> DecodedImage {
    if image.is_square() || image.is_empty() {
        return image.clone();
    }

    let side = image.width.max(image.height);
    let left = (side - image.width) / 2;
    let top = (side - image.height) / 2;

    let mut canvas = DecodedImage::filled(side, side, fill);
    let src_row = (image.width * 3) as usize;

    for y in 0..image.height {
        let src = (y * image.width * 3) as usize;
        let dst = (((top + y) * side + left) * 3) as usize;
        canvas.pixels[dst..dst + src_row].copy_from_slice(&image.pixels[src..src + src_row]);
    }

    canvas
}
