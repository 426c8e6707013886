//! Picker bytes in, size-bounded data URL out.
//!
//! ```text
//! raw ──len <= max_bytes && JPEG──▶ decode check ──▶ passthrough ──┐
//!  │                                                               ▼
//!  └─▶ decode ─▶ resize_to_square ─▶ quality search ─────▶ DataUrlPayload
//! ```
//!
//! Output is always JPEG. Small inputs in any other format take the slow
//! path.
//!
//! Every run is independent: no shared state, no I/O. Callers that fire
//! several runs for the same profile must decide themselves which result to
//! keep.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::budget::{BudgetError, CompressionBudget};
use crate::decode::{decode_image, sniff_format, DecodeError, SourceFormat};
use crate::encode::{search_best_quality, EncodeError, EncodedImage, SearchError};
use crate::payload::DataUrlPayload;
use crate::transform::resize_to_square;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IngestError {
    #[error("No image data supplied")]
    EmptyInput,

    #[error("Invalid compression budget: {0}")]
    InvalidBudget(#[from] BudgetError),

    #[error("Could not decode image: {0}")]
    Decode(#[from] DecodeError),

    #[error(
        "Image is still {achieved} bytes after compression, limit is {budget} bytes; select a smaller image"
    )]
    BudgetExceeded { achieved: usize, budget: usize },

    #[error("Could not encode image: {0}")]
    Encode(#[from] EncodeError),
}

impl From<SearchError> for IngestError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::BudgetExceeded {
                achieved, budget, ..
            } => IngestError::BudgetExceeded { achieved, budget },
            SearchError::Encode(e) => IngestError::Encode(e),
        }
    }
}

/// Successful result of one ingest run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOutcome {
    pub image: EncodedImage,
    pub payload: DataUrlPayload,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageIngestPipeline {
    budget: CompressionBudget,
}

impl ImageIngestPipeline {
    pub fn new(budget: CompressionBudget) -> Self {
        Self { budget }
    }

    pub fn budget(&self) -> &CompressionBudget {
        &self.budget
    }

    /// Run the pipeline on one picker result.
    ///
    /// Never returns bytes larger than `max_bytes`.
    pub fn ingest(&self, raw: &[u8]) -> Result<IngestOutcome, IngestError> {
        let span = tracing::debug_span!("ingest", input_len = raw.len());
        let _guard = span.enter();

        if raw.is_empty() {
            return Err(IngestError::EmptyInput);
        }
        self.budget.validate()?;

        let format = sniff_format(raw)?;
        let image = if raw.len() <= self.budget.max_bytes && format == SourceFormat::Jpeg {
            // A valid header is not enough; the body must decode too.
            decode_image(raw)?;
            debug!("jpeg within budget, passing through");
            EncodedImage::passthrough(raw.to_vec())
        } else {
            debug!(?format, "recompressing");
            self.recompress(raw)?
        };

        debug_assert!(image.len() <= self.budget.max_bytes);
        info!(
            size = image.len(),
            quality = ?image.quality,
            max_bytes = self.budget.max_bytes,
            "image ingested"
        );

        let payload = DataUrlPayload::from_encoded(&image);
        Ok(IngestOutcome { image, payload })
    }

    /// Convenience wrapper returning only the string to persist.
    pub fn ingest_data_url(&self, raw: &[u8]) -> Result<String, IngestError> {
        self.ingest(raw).map(|outcome| outcome.payload.into_string())
    }

    fn recompress(&self, raw: &[u8]) -> Result<EncodedImage, IngestError> {
        let decoded = decode_image(raw)?;
        debug!(
            width = decoded.width,
            height = decoded.height,
            "decoded oversized input"
        );

        let resized = resize_to_square(
            &decoded,
            self.budget.max_dimension,
            self.budget.resize_policy,
            self.budget.filter,
        )?;

        search_best_quality(&resized, self.budget.max_bytes, &self.budget.ladder).map_err(|e| {
            if let SearchError::BudgetExceeded {
                achieved, budget, ..
            } = &e
            {
                warn!(achieved, budget, "compression could not meet budget");
            }
            IngestError::from(e)
        })
    }
}

/// One-shot helper using the given budget.
pub fn ingest(raw: &[u8], budget: CompressionBudget) -> Result<IngestOutcome, IngestError> {
    ImageIngestPipeline::new(budget).ingest(raw)
}
