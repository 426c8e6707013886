//! Size-bounded JPEG quality search.
//!
//! Walks a [`QualityLadder`] from the top, re-encoding at each rung until the
//! output fits the byte budget. The first fitting encode wins; nothing below
//! it is tried.

use thiserror::Error;
use tracing::debug;

use super::{encode_image, EncodeError, QualityLadder};
use crate::constants::JPEG_MIME;
use crate::decode::DecodedImage;

/// One rung of the ladder and what it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityAttempt {
    pub quality: u8,
    pub size: usize,
}

/// An encoded picture that fits its byte budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    /// Quality of the final encode; `None` when the input was passed through.
    pub quality: Option<u8>,
    pub mime_type: &'static str,
    /// Pixel dimensions of the encoded output, when known.
    pub dimensions: Option<(u32, u32)>,
    pub attempts: Vec<QualityAttempt>,
}

impl EncodedImage {
    /// Wrap picker JPEG bytes that already satisfy the budget.
    pub fn passthrough(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            quality: None,
            mime_type: JPEG_MIME,
            dimensions: None,
            attempts: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn is_passthrough(&self) -> bool {
        self.quality.is_none()
    }

    /// Qualities tried, in order.
    pub fn attempted_qualities(&self) -> Vec<u8> {
        self.attempts.iter().map(|a| a.quality).collect()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Every rung of the ladder produced more than `budget` bytes.
    #[error("Encoded size {achieved} bytes exceeds budget of {budget} bytes at lowest quality")]
    BudgetExceeded {
        achieved: usize,
        budget: usize,
        attempts: Vec<QualityAttempt>,
    },

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Encode `image` at descending qualities until the output is `<= max_bytes`.
///
/// # Errors
///
/// `SearchError::BudgetExceeded` carries the size reached at the last rung.
pub fn search_best_quality(
    image: &DecodedImage,
    max_bytes: usize,
    ladder: &QualityLadder,
) -> Result<EncodedImage, SearchError> {
    let mut attempts = Vec::new();
    let mut achieved = 0;

    for quality in ladder.levels() {
        let bytes = encode_image(image, quality)?;
        let size = bytes.len();
        attempts.push(QualityAttempt { quality, size });
        debug!(quality, size, max_bytes, "jpeg encode attempt");

        if size <= max_bytes {
            return Ok(EncodedImage {
                bytes,
                quality: Some(quality),
                mime_type: JPEG_MIME,
                dimensions: Some(image.dimensions()),
                attempts,
            });
        }
        achieved = size;
    }

    Err(SearchError::BudgetExceeded {
        achieved,
        budget: max_bytes,
        attempts,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        /// Success always respects the budget and tries a ladder prefix.
        #[test]
        fn prop_result_within_budget(
            size in 8u32..=48,
            budget in 200usize..=6000,
            seed in any::<u8>(),
        ) {
            let pixels: Vec<u8> = (0..(size * size * 3) as usize)
                .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
                .collect();
            let img = DecodedImage::new(size, size, pixels);
            let ladder = QualityLadder::default();
            let levels = ladder.levels();

            match search_best_quality(&img, budget, &ladder) {
                Ok(encoded) => {
                    prop_assert!(encoded.len() <= budget);
                    let tried = encoded.attempted_qualities();
                    prop_assert_eq!(&tried[..], &levels[..tried.len()]);
                    prop_assert_eq!(encoded.quality, tried.last().copied());
                    for a in &encoded.attempts[..encoded.attempts.len() - 1] {
                        prop_assert!(a.size > budget);
                    }
                }
                Err(SearchError::BudgetExceeded { achieved, budget: b, .. }) => {
                    prop_assert_eq!(b, budget);
                    prop_assert!(achieved > budget);
                }
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
        }
    }
}
