use elide_codec::CodecError;
use elide_core::{Direction, RetentionPolicy, TextTransform, TransformError};
use elide_oracle::{ConfigError, OracleTransform};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("transform failed: {0}")]
    Transform(#[from] TransformError),

    #[error("codec failed: {0}")]
    Codec(#[from] CodecError),
}

/// Composes a transform and the entropy codec into `compress` / `decompress`.
///
/// Each operation is a stateless two-step sequence: the first failing step
/// aborts the whole call and nothing partial is returned. The blob carries no
/// record of the policy, so the caller must pass the same policy to both
/// sides.
#[derive(Debug)]
pub struct Pipeline<T: TextTransform> {
    transform: T,
}

impl Pipeline<OracleTransform> {
    /// Oracle-backed pipeline. Fails fast when no credential is available,
    /// before any operation runs.
    pub fn new(api_key: Option<String>) -> Result<Self, PipelineError> {
        Ok(Self {
            transform: OracleTransform::new(api_key)?,
        })
    }
}

impl<T: TextTransform> Pipeline<T> {
    /// Pipeline over any transform implementation.
    pub fn with_transform(transform: T) -> Self {
        Self { transform }
    }

    /// Strip per the policy, then entropy-encode the result.
    pub fn compress(&self, policy: RetentionPolicy, text: &str) -> Result<Vec<u8>, PipelineError> {
        let stripped = self.transform.transform(policy, Direction::Strip, text)?;
        let blob = elide_codec::encode(&stripped).map_err(|e| {
            tracing::error!(policy = %policy, error = %e, "entropy encode failed");
            e
        })?;
        tracing::debug!(
            policy = %policy,
            input_bytes = text.len(),
            blob_bytes = blob.len(),
            "compressed"
        );
        Ok(blob)
    }

    /// Entropy-decode, then ask the transform to restore the elided text.
    ///
    /// A codec failure aborts before the transform is invoked.
    pub fn decompress(&self, policy: RetentionPolicy, blob: &[u8]) -> Result<String, PipelineError> {
        let stripped = elide_codec::decode(blob).map_err(|e| {
            tracing::error!(policy = %policy, error = %e, "entropy decode failed");
            e
        })?;
        let restored = self
            .transform
            .transform(policy, Direction::Restore, &stripped)?;
        Ok(restored)
    }
}

/// Byte length of a blob or text, for instrumentation only.
pub fn size(data: impl AsRef<[u8]>) -> usize {
    data.as_ref().len()
}
