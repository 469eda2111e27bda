// error.rs — Error types for the ledger store.
//
// Uses `thiserror` to derive the standard Rust `Error` trait automatically.
// A missing ledger file is not an error anywhere in this crate: readers treat
// it as an empty ledger.

use std::path::PathBuf;

use al_redact::SecretsDetected;
use thiserror::Error;

/// How many characters of an offending line a [`ParseFault`] keeps.
pub const FAULT_PREVIEW_CHARS: usize = 120;

/// A record (or candidate record) does not satisfy the schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Wrong shape: missing field, wrong type, unknown action type, bad timestamp.
    #[error("{0}")]
    Shape(#[from] serde_json::Error),

    /// A field that must carry text is empty or whitespace.
    #[error("`{0}` must not be empty")]
    Empty(&'static str),
}

/// Why a single ledger line was rejected.
#[derive(Debug, Error)]
pub enum FaultCause {
    #[error("invalid JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("schema violation: {0}")]
    Schema(#[source] SchemaError),
}

/// One ledger line that failed to decode or validate.
#[derive(Debug, Error)]
#[error("ledger line {line}: {cause} (content: {content})")]
pub struct ParseFault {
    /// 1-based line number within the file.
    pub line: usize,
    /// Truncated copy of the raw line.
    pub content: String,
    #[source]
    pub cause: FaultCause,
}

impl ParseFault {
    pub(crate) fn new(line: usize, raw: &[u8], cause: FaultCause) -> Self {
        let text = String::from_utf8_lossy(raw);
        let text = text.trim_end();
        let content = if text.chars().count() > FAULT_PREVIEW_CHARS {
            let head: String = text.chars().take(FAULT_PREVIEW_CHARS).collect();
            format!("{head}...")
        } else {
            text.to_string()
        };
        Self {
            line,
            content,
            cause,
        }
    }
}

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A filesystem operation on the ledger failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize a record.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A ledger line failed to decode or validate (fail-fast reads).
    #[error(transparent)]
    Parse(#[from] ParseFault),

    /// A candidate record was rejected before it reached the file.
    #[error("invalid record: {0}")]
    InvalidRecord(#[from] SchemaError),

    /// Strict redaction refused the record.
    #[error(transparent)]
    Secrets(#[from] SecretsDetected),
}

impl LedgerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
