//! Off-thread ingest for async callers.
//!
//! Decode and re-encode are CPU-bound and can take a noticeable fraction of a
//! second on a large photo, so the work runs on tokio's blocking pool. The
//! returned future resolves exactly once; dropping it abandons the result
//! but does not stop the encode already in flight.

use thiserror::Error;

use crate::pipeline::{ImageIngestPipeline, IngestError, IngestOutcome};

#[derive(Debug, Error)]
pub enum AsyncIngestError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("Ingest task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Run [`ImageIngestPipeline::ingest`] on the blocking pool.
pub async fn ingest_async(
    pipeline: ImageIngestPipeline,
    raw: Vec<u8>,
) -> Result<IngestOutcome, AsyncIngestError> {
    let outcome = tokio::task::spawn_blocking(move || pipeline.ingest(&raw)).await??;
    Ok(outcome)
}
