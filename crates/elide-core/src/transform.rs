//! The pluggable transform contract shared by rule-based and oracle-backed
//! implementations

use crate::policy::{Direction, RetentionPolicy};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    /// The oracle call itself failed (transport, auth, HTTP status).
    #[error("oracle request failed: {0}")]
    Oracle(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The oracle answered but the response carried no usable text.
    #[error("oracle returned an empty or malformed response")]
    EmptyResponse,

    /// Restoration of elided text needs a language model; the rule-based
    /// transform refuses rather than guessing.
    #[error("rule-based transform cannot restore elided text")]
    RestoreUnsupported,
}

/// A best-effort text rewrite in either direction under a retention policy.
///
/// Implementations make no correctness guarantee: the oracle-backed transform
/// follows the policy only approximately, and even the rule-based one cannot
/// honor the name/equation exceptions.
pub trait TextTransform {
    fn transform(
        &self,
        policy: RetentionPolicy,
        direction: Direction,
        text: &str,
    ) -> Result<String, TransformError>;
}
