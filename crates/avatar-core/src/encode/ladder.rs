//! The descending sequence of JPEG qualities tried by the size search.

use serde::{Deserialize, Serialize};

use crate::constants::{LADDER_FLOOR, LADDER_START_QUALITY, LADDER_STEP};

/// A linear quality ladder: `start`, `start - step`, ... while above `floor`.
///
/// The first rung is always attempted, even when `start <= floor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityLadder {
    pub start: u8,
    pub step: u8,
    pub floor: u8,
}

impl Default for QualityLadder {
    fn default() -> Self {
        Self {
            start: LADDER_START_QUALITY,
            step: LADDER_STEP,
            floor: LADDER_FLOOR,
        }
    }
}

impl QualityLadder {
    pub fn new(start: u8, step: u8, floor: u8) -> Self {
        Self { start, step, floor }
    }

    /// Qualities in the order they are attempted.
    pub fn levels(&self) -> Vec<u8> {
        let mut levels = vec![self.start];
        if self.step == 0 {
            return levels;
        }
        let mut quality = self.start;
        while let Some(next) = quality.checked_sub(self.step) {
            if next <= self.floor {
                break;
            }
            levels.push(next);
            quality = next;
        }
        levels
    }
}
