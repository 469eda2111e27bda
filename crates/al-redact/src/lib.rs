//! # al-redact
//!
//! Credential detection and redaction for the agent ledger.
//!
//! Every value headed for the ledger passes through a [`Redactor`] first.
//! The redactor walks an arbitrary JSON tree and applies a
//! [`PatternCatalog`] of key-name and value-content patterns:
//!
//! - [`RedactionMode::Redact`] replaces each match with `[REDACTED]` and
//!   returns a new tree.
//! - [`RedactionMode::Strict`] refuses the input with [`SecretsDetected`],
//!   listing each match as `path: preview`.
//!
//! ## Quick Example
//!
//! ```rust
//! use al_redact::{scan, ScanOptions};
//! use serde_json::json;
//!
//! let clean = scan(&json!({ "password": "hunter2" }), &ScanOptions::default()).unwrap();
//! assert_eq!(clean, json!({ "password": "[REDACTED]" }));
//!
//! let rejected = scan(&json!({ "password": "hunter2" }), &ScanOptions::strict());
//! assert!(rejected.is_err());
//! ```

pub mod catalog;
pub mod engine;
pub mod error;

pub use catalog::{ExtraPatterns, PatternCatalog};
pub use engine::{RedactionMode, Redactor, ScanOptions, REDACTED};
pub use error::{PatternError, SecretsDetected};

use serde_json::Value;

/// Scan `value` with the built-in catalog.
pub fn scan(value: &Value, options: &ScanOptions) -> Result<Value, SecretsDetected> {
    Redactor::default().scan(value, options)
}

/// Would a strict scan with the built-in catalog reject `value`?
pub fn contains_secrets(value: &Value) -> bool {
    Redactor::default().contains_secrets(value)
}

/// Is `name` a sensitive key under the built-in catalog plus `extra`?
pub fn is_sensitive_key(name: &str, extra: &ExtraPatterns) -> bool {
    PatternCatalog::builtin().is_sensitive_key(name, extra)
}

/// Truncated previews of built-in (plus `extra`) value-pattern hits in `text`.
pub fn find_matches(text: &str, extra: &ExtraPatterns) -> Vec<String> {
    PatternCatalog::builtin().find_matches(text, extra)
}
