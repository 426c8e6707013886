//! Default limits for profile picture ingest.

/// Maximum size of a stored profile picture, in bytes (300 KiB).
pub const DEFAULT_MAX_BYTES: usize = 300 * 1024;

/// Edge length of the square the image is scaled to before re-encoding.
pub const DEFAULT_MAX_DIMENSION: u32 = 400;

/// First JPEG quality tried by the quality search.
pub const LADDER_START_QUALITY: u8 = 75;

/// Quality decrement between two search attempts.
pub const LADDER_STEP: u8 = 10;

/// The search stops once quality is at or below this value.
pub const LADDER_FLOOR: u8 = 20;

/// Edge length callers should ask their image picker for.
pub const PICKER_MAX_DIMENSION: u32 = 512;

/// Quality callers should ask their image picker for.
pub const PICKER_QUALITY: u8 = 85;

/// MIME type of everything the quality search produces.
pub const JPEG_MIME: &str = "image/jpeg";
