// error.rs — Error types for the redaction subsystem.
//
// Strict-mode rejection is an ordinary `Err(SecretsDetected)` rather than a
// panic or a sentinel value, so callers handle both outcomes of a scan with
// a plain `match` or `?`.

use thiserror::Error;

/// Strict-mode scan found credential-like content.
///
/// `findings` holds one `path: preview` entry per match, in walk order.
/// Previews are truncated; the full matched text is never kept here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} potential secret(s) detected: {}", .findings.len(), .findings.join(", "))]
pub struct SecretsDetected {
    pub findings: Vec<String>,
}

/// A caller-supplied extra pattern failed to compile.
#[derive(Debug, Error)]
#[error("invalid redaction pattern `{pattern}`: {source}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}
