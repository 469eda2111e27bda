// engine.rs — Depth-first redaction walk over JSON-shaped values.
//
// The walk tracks a dotted path (`user.credentials.token`, `items[2]`) so
// strict-mode findings say where each secret was found. Redact mode builds a
// new tree and never touches its input; strict mode only inspects and returns
// the input unchanged when it is clean.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::{preview, ExtraPatterns, PatternCatalog};
use crate::error::SecretsDetected;

/// The literal that stands in for redacted content.
pub const REDACTED: &str = "[REDACTED]";

/// What a scan does when it finds a secret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionMode {
    /// Replace matches with the replacement text and carry on.
    #[default]
    Redact,
    /// Reject the whole input if anything matches.
    Strict,
}

/// Per-call scan options.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub mode: RedactionMode,
    pub replacement: String,
    pub extra: ExtraPatterns,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            mode: RedactionMode::Redact,
            replacement: REDACTED.to_string(),
            extra: ExtraPatterns::default(),
        }
    }
}

impl ScanOptions {
    pub fn strict() -> Self {
        Self {
            mode: RedactionMode::Strict,
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: RedactionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = replacement.into();
        self
    }

    pub fn with_extra(mut self, extra: ExtraPatterns) -> Self {
        self.extra = extra;
        self
    }
}

/// Applies a [`PatternCatalog`] to arbitrary JSON values.
///
/// The catalog is fixed at construction; use [`PatternCatalog::with_extra`]
/// for a redactor that always carries extra patterns, or
/// [`ScanOptions::extra`] for a single call. The default redactor borrows
/// the shared built-in catalog.
#[derive(Debug, Clone)]
pub struct Redactor {
    catalog: Cow<'static, PatternCatalog>,
}

impl Default for Redactor {
    fn default() -> Self {
        Self {
            catalog: Cow::Borrowed(PatternCatalog::builtin()),
        }
    }
}

impl Redactor {
    pub fn new(catalog: PatternCatalog) -> Self {
        Self {
            catalog: Cow::Owned(catalog),
        }
    }

    /// Scan `value` according to `options`.
    ///
    /// Redact mode always returns `Ok` with a redacted copy. Strict mode
    /// returns `Ok` with the input unchanged when nothing matched, and
    /// `Err(SecretsDetected)` listing every match otherwise.
    pub fn scan(&self, value: &Value, options: &ScanOptions) -> Result<Value, SecretsDetected> {
        match options.mode {
            RedactionMode::Redact => {
                let walk = Walk::new(&self.catalog, options);
                Ok(walk.redact(value))
            }
            RedactionMode::Strict => {
                let findings = self.findings(value, &options.extra);
                if findings.is_empty() {
                    Ok(value.clone())
                } else {
                    tracing::debug!(count = findings.len(), "strict scan rejected input");
                    Err(SecretsDetected { findings })
                }
            }
        }
    }

    /// Redact with the default replacement and no extra patterns.
    pub fn redact(&self, value: &Value) -> Value {
        Walk::new(&self.catalog, &ScanOptions::default()).redact(value)
    }

    /// Every `path: preview` a strict scan would report, without failing.
    pub fn findings(&self, value: &Value, extra: &ExtraPatterns) -> Vec<String> {
        let options = ScanOptions::strict().with_extra(extra.clone());
        let mut walk = Walk::new(&self.catalog, &options);
        walk.inspect(value, "");
        walk.findings
    }

    /// True exactly when a strict scan of `value` would fail.
    pub fn contains_secrets(&self, value: &Value) -> bool {
        !self.findings(value, &ExtraPatterns::default()).is_empty()
    }
}

struct Walk<'a> {
    catalog: &'a PatternCatalog,
    options: &'a ScanOptions,
    findings: Vec<String>,
}

impl<'a> Walk<'a> {
    fn new(catalog: &'a PatternCatalog, options: &'a ScanOptions) -> Self {
        Self {
            catalog,
            options,
            findings: Vec::new(),
        }
    }

    fn redact(&self, value: &Value) -> Value {
        match value {
            Value::String(s) if s.is_empty() => value.clone(),
            Value::String(s) => Value::String(self.catalog.replace_all(
                s,
                &self.options.extra,
                &self.options.replacement,
            )),
            Value::Array(items) => Value::Array(items.iter().map(|v| self.redact(v)).collect()),
            Value::Object(map) => {
                let mut out = Map::with_capacity(map.len());
                for (key, child) in map {
                    let redacted = if self.sensitive_entry(key, child) {
                        Value::String(self.options.replacement.clone())
                    } else {
                        self.redact(child)
                    };
                    out.insert(key.clone(), redacted);
                }
                Value::Object(out)
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
        }
    }

    fn inspect(&mut self, value: &Value, path: &str) {
        match value {
            Value::String(s) => {
                for hit in self.catalog.find_matches(s, &self.options.extra) {
                    self.record(path, &hit);
                }
            }
            Value::Array(items) => {
                for (index, child) in items.iter().enumerate() {
                    self.inspect(child, &format!("{path}[{index}]"));
                }
            }
            Value::Object(map) => {
                for (key, child) in map {
                    let child_path = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{path}.{key}")
                    };
                    match child {
                        Value::String(s) if self.sensitive_entry(key, child) => {
                            self.record(&child_path, &preview(s));
                        }
                        _ => self.inspect(child, &child_path),
                    }
                }
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => {}
        }
    }

    /// A sensitive key holding a non-empty string hides the whole value.
    fn sensitive_entry(&self, key: &str, value: &Value) -> bool {
        matches!(value, Value::String(s) if !s.is_empty())
            && self.catalog.is_sensitive_key(key, &self.options.extra)
    }

    fn record(&mut self, path: &str, hit: &str) {
        let location = if path.is_empty() { "(root)" } else { path };
        self.findings.push(format!("{location}: {hit}"));
    }
}
