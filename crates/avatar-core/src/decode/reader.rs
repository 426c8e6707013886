//! Picker byte decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};

use super::{DecodeError, DecodedImage, Orientation, SourceFormat};

/// Identify the raster format from the leading magic bytes.
///
/// Only the header is inspected; a recognized signature says nothing about
/// whether the rest of the file decodes.
pub fn sniff_format(bytes: &[u8]) -> Result<SourceFormat, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }
    let format = image::guess_format(bytes).map_err(|_| DecodeError::InvalidFormat)?;
    SourceFormat::try_from(format)
}

/// Decode picker bytes into RGB pixels, applying EXIF orientation.
///
/// # Errors
///
/// * `DecodeError::Empty` for a zero-length buffer
/// * `DecodeError::InvalidFormat` if no known signature matches
/// * `DecodeError::CorruptedFile` if the decoder rejects the body
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let format = sniff_format(bytes)?;
    let orientation = extract_orientation(bytes);

    let mut reader = ImageReader::new(Cursor::new(bytes));
    reader.set_format(format.to_image_format());

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let oriented = apply_orientation(img, orientation);
    Ok(DecodedImage::from_rgb_image(oriented.into_rgb8()))
}

fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    let Ok(exif) = Reader::new().read_from_container(&mut cursor) else {
        return Orientation::Normal;
    };
    exif.get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .map(Orientation::from)
        .unwrap_or_default()
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let pixels = vec![200u8; (width * height * 3) as usize];
        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(&pixels, width, height, ExtendedColorType::Rgb8)
            .unwrap();
        out
    }

    fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
        let pixels = vec![90u8; (width * height * 3) as usize];
        crate::encode::encode_jpeg(&pixels, width, height, 80).unwrap()
    }

    #[test]
    fn test_decode_png() {
        let img = decode_image(&png_bytes(8, 4)).unwrap();
        assert_eq!(img.dimensions(), (8, 4));
        assert_eq!(img.pixels.len(), 8 * 4 * 3);
    }

    #[test]
    fn test_decode_jpeg() {
        let img = decode_image(&jpeg_bytes(16, 16)).unwrap();
        assert_eq!(img.dimensions(), (16, 16));
    }

    #[test]
    fn test_decode_garbage() {
        let result = decode_image(&[0x00, 0x01, 0x02]);
        assert_eq!(result, Err(DecodeError::InvalidFormat));
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert_eq!(decode_image(&[]), Err(DecodeError::Empty));
    }

    #[test]
    fn test_decode_truncated_png() {
        let bytes = png_bytes(32, 32);
        let result = decode_image(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_sniff_format() {
        assert_eq!(sniff_format(&png_bytes(2, 2)), Ok(SourceFormat::Png));
        assert_eq!(sniff_format(&jpeg_bytes(2, 2)), Ok(SourceFormat::Jpeg));
        assert_eq!(sniff_format(b"hello world"), Err(DecodeError::InvalidFormat));
    }

    /// Splice an APP1 Exif segment (little-endian TIFF, one IFD0 entry
    /// holding `Orientation`) in right after the SOI marker.
    fn with_exif_orientation(jpeg: &[u8], orientation: u16) -> Vec<u8> {
        let mut tiff = Vec::new();
        tiff.extend_from_slice(b"II*\0");
        tiff.extend_from_slice(&8u32.to_le_bytes());
        tiff.extend_from_slice(&1u16.to_le_bytes());
        tiff.extend_from_slice(&0x0112u16.to_le_bytes());
        tiff.extend_from_slice(&3u16.to_le_bytes());
        tiff.extend_from_slice(&1u32.to_le_bytes());
        tiff.extend_from_slice(&orientation.to_le_bytes());
        tiff.extend_from_slice(&[0, 0]);
        tiff.extend_from_slice(&0u32.to_le_bytes());

        let segment_len = (2 + 6 + tiff.len()) as u16;
        let mut out = Vec::with_capacity(jpeg.len() + segment_len as usize + 2);
        out.extend_from_slice(&jpeg[..2]);
        out.extend_from_slice(&[0xFF, 0xE1]);
        out.extend_from_slice(&segment_len.to_be_bytes());
        out.extend_from_slice(b"Exif\0\0");
        out.extend_from_slice(&tiff);
        out.extend_from_slice(&jpeg[2..]);
        out
    }

    #[test]
    fn test_orientation_without_exif() {
        assert_eq!(extract_orientation(&jpeg_bytes(4, 4)), Orientation::Normal);
        assert_eq!(extract_orientation(&[0x00, 0x01, 0x02]), Orientation::Normal);
    }

    #[test]
    fn test_orientation_from_exif_segment() {
        let bytes = with_exif_orientation(&jpeg_bytes(16, 8), 6);
        assert_eq!(extract_orientation(&bytes), Orientation::Rotate90CW);
    }

    #[test]
    fn test_decode_applies_exif_rotation() {
        let bytes = with_exif_orientation(&jpeg_bytes(16, 8), 6);
        let img = decode_image(&bytes).unwrap();
        assert_eq!(img.dimensions(), (8, 16));
    }

    #[test]
    fn test_decode_exif_normal_keeps_dimensions() {
        let bytes = with_exif_orientation(&jpeg_bytes(16, 8), 1);
        assert_eq!(extract_orientation(&bytes), Orientation::Normal);
        assert_eq!(decode_image(&bytes).unwrap().dimensions(), (16, 8));
    }

    #[test]
    fn test_apply_orientation_rotate90() {
        let rgb = image::RgbImage::from_raw(2, 1, vec![255, 0, 0, 0, 255, 0]).unwrap();
        let result = apply_orientation(DynamicImage::ImageRgb8(rgb), Orientation::Rotate90CW);
        assert_eq!(result.into_rgb8().dimensions(), (1, 2));
    }

    #[test]
    fn test_apply_orientation_flip_horizontal() {
        let rgb = image::RgbImage::from_raw(2, 1, vec![255, 0, 0, 0, 255, 0]).unwrap();
        let result = apply_orientation(DynamicImage::ImageRgb8(rgb), Orientation::FlipHorizontal)
            .into_rgb8();
        assert_eq!(result.get_pixel(0, 0).0, [0, 255, 0]);
        assert_eq!(result.get_pixel(1, 0).0, [255, 0, 0]);
    }
}
