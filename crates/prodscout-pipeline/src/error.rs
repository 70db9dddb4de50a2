use thiserror::Error;

use prodscout_inference::InferenceError;
use prodscout_openai::OpenAiError;

/// Unrecovered stage failures.
///
/// Partial failures (one source, one extraction batch, a corrupt cache
/// value) are handled inside their stages and never reach this type.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("inference capability failed: {0}")]
    Inference(#[from] InferenceError),

    #[error("generation capability failed: {0}")]
    Generation(#[from] OpenAiError),

    #[error("cache store failed: {0}")]
    Cache(String),
}
