//! Failure taxonomy for artifact parsing.
//!
//! Every variant is non-fatal and collapses to a bare "no result" at the
//! public boundary; the distinctions exist so that skip and fallback paths
//! can log a concrete reason. Malformed input data never becomes a hard
//! error anywhere in the crate - only a broken static rule table may panic,
//! at first use.

use thiserror::Error;

/// Why an artifact yielded no records.
#[derive(Error, Debug)]
#[non_exhaustive]
pub(crate) enum ParseFailure {
    /// Extension or XML root outside the supported set.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Content could not be decoded after all fallbacks.
    #[error("undecodable content: {0}")]
    DecodeFailed(String),

    /// Parsing succeeded structurally but no usable rows survived
    /// validation.
    #[error("no usable rows after validation")]
    EmptyResult,

    /// Path matched a known non-BOM pattern; rejected before parsing.
    #[error("false-positive path: {0}")]
    FalsePositivePath(String),
}
