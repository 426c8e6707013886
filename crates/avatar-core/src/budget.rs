//! Size and dimension limits for an ingest run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_MAX_BYTES, DEFAULT_MAX_DIMENSION, PICKER_MAX_DIMENSION, PICKER_QUALITY,
};
use crate::decode::FilterType;
use crate::encode::QualityLadder;
use crate::transform::ResizePolicy;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BudgetError {
    #[error("max_bytes must be greater than zero")]
    ZeroMaxBytes,

    #[error("max_dimension must be greater than zero")]
    ZeroMaxDimension,

    #[error("ladder start quality {0} is outside 1..=100")]
    InvalidLadderStart(u8),

    #[error("Invalid budget JSON: {0}")]
    Parse(String),
}

/// Limits the pipeline enforces on every picture.
///
/// Missing fields deserialize to the defaults (300 KiB, 400 px square,
/// stretch, bilinear, quality 75 down to 25).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionBudget {
    /// Hard ceiling on the stored byte size.
    pub max_bytes: usize,
    /// Edge length of the square re-encode target.
    pub max_dimension: u32,
    pub resize_policy: ResizePolicy,
    pub filter: FilterType,
    pub ladder: QualityLadder,
}

impl Default for CompressionBudget {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            max_dimension: DEFAULT_MAX_DIMENSION,
            resize_policy: ResizePolicy::default(),
            filter: FilterType::default(),
            ladder: QualityLadder::default(),
        }
    }
}

impl CompressionBudget {
    pub fn new(max_bytes: usize, max_dimension: u32) -> Self {
        Self {
            max_bytes,
            max_dimension,
            ..Self::default()
        }
    }

    pub fn with_resize_policy(mut self, policy: ResizePolicy) -> Self {
        self.resize_policy = policy;
        self
    }

    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_ladder(mut self, ladder: QualityLadder) -> Self {
        self.ladder = ladder;
        self
    }

    pub fn validate(&self) -> Result<(), BudgetError> {
        if self.max_bytes == 0 {
            return Err(BudgetError::ZeroMaxBytes);
        }
        if self.max_dimension == 0 {
            return Err(BudgetError::ZeroMaxDimension);
        }
        if !(1..=100).contains(&self.ladder.start) {
            return Err(BudgetError::InvalidLadderStart(self.ladder.start));
        }
        Ok(())
    }

    /// Parse and validate a JSON budget.
    pub fn from_json(json: &str) -> Result<Self, BudgetError> {
        let budget: Self =
            serde_json::from_str(json).map_err(|e| BudgetError::Parse(e.to_string()))?;
        budget.validate()?;
        Ok(budget)
    }
}

/// What callers should ask their image picker for.
///
/// The pipeline never checks picker output against this; it only documents
/// the request that makes the fast path likely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerRequest {
    pub max_width: u32,
    pub max_height: u32,
    pub quality: u8,
}

impl Default for PickerRequest {
    fn default() -> Self {
        Self {
            max_width: PICKER_MAX_DIMENSION,
            max_height: PICKER_MAX_DIMENSION,
            quality: PICKER_QUALITY,
        }
    }
}
