// reader.rs — Streaming, fault-tolerant ledger reader.
//
// One code path serves both fault policies, so line numbering and ordering
// are identical whichever policy the caller picks:
//
//   FailFast    — the first bad line is yielded as `Err` and the stream ends.
//   SkipInvalid — bad lines are logged, kept in `faults()`, and skipped.
//
// Lines are read as raw bytes. Invalid UTF-8 surfaces as a decode fault on
// that line rather than as an I/O error for the whole file.

use std::fs::File;
use std::io::{BufRead, BufReader, Split};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FaultCause, LedgerError, ParseFault};
use crate::record::Record;

/// What the reader does with a line that fails to decode or validate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultPolicy {
    /// Stop at the first bad line and report it.
    #[default]
    FailFast,
    /// Report bad lines and keep reading.
    SkipInvalid,
}

/// Per-call read options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    pub policy: FaultPolicy,
}

impl ReadOptions {
    pub fn fail_fast() -> Self {
        Self {
            policy: FaultPolicy::FailFast,
        }
    }

    pub fn skip_invalid() -> Self {
        Self {
            policy: FaultPolicy::SkipInvalid,
        }
    }
}

/// Forward-only iterator over the records of one ledger file.
///
/// Yields records in file order. Once an `Err` has been yielded the
/// iterator is exhausted.
pub struct LedgerReader {
    path: PathBuf,
    lines: Option<Split<BufReader<File>>>,
    line_no: usize,
    policy: FaultPolicy,
    faults: Vec<ParseFault>,
}

impl LedgerReader {
    /// Open `path` for reading. A missing file reads as an empty ledger.
    pub fn open(path: impl AsRef<Path>, options: ReadOptions) -> Result<Self, LedgerError> {
        let path = path.as_ref().to_path_buf();
        let lines = match File::open(&path) {
            Ok(file) => Some(BufReader::new(file).split(b'\n')),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(LedgerError::io(path, e)),
        };
        Ok(Self {
            path,
            lines,
            line_no: 0,
            policy: options.policy,
            faults: Vec::new(),
        })
    }

    /// Faults skipped so far (always empty under `FailFast`).
    pub fn faults(&self) -> &[ParseFault] {
        &self.faults
    }

    /// Consume the reader and return the skipped faults.
    pub fn into_faults(self) -> Vec<ParseFault> {
        self.faults
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Iterator for LedgerReader {
    type Item = Result<Record, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = match self.lines.as_mut()?.next() {
                None => {
                    self.lines = None;
                    return None;
                }
                Some(Err(e)) => {
                    self.lines = None;
                    return Some(Err(LedgerError::io(self.path.clone(), e)));
                }
                Some(Ok(raw)) => raw,
            };
            self.line_no += 1;

            if raw.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            match parse_line(self.line_no, &raw) {
                Ok(record) => return Some(Ok(record)),
                Err(fault) => match self.policy {
                    FaultPolicy::FailFast => {
                        self.lines = None;
                        return Some(Err(fault.into()));
                    }
                    FaultPolicy::SkipInvalid => {
                        tracing::warn!(
                            path = %self.path.display(),
                            line = fault.line,
                            error = %fault.cause,
                            "skipping invalid ledger line"
                        );
                        self.faults.push(fault);
                    }
                },
            }
        }
    }
}

/// Decode one non-blank line and validate it against the record schema.
pub fn parse_line(line_no: usize, raw: &[u8]) -> Result<Record, ParseFault> {
    let value: serde_json::Value = serde_json::from_slice(raw)
        .map_err(|e| ParseFault::new(line_no, raw, FaultCause::Decode(e)))?;
    Record::from_json_value(value).map_err(|e| ParseFault::new(line_no, raw, FaultCause::Schema(e)))
}
