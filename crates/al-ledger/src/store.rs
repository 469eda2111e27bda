// store.rs — Append-only JSONL ledger file.
//
// The ledger is stored as a JSONL (JSON Lines) file: one record per line,
// in append order, which is also creation order. Nothing in this crate ever
// rewrites or removes a line.
//
// There is no index: every query re-streams the file from the start. There
// is no locking either. Concurrent appenders rely on the OS keeping a single
// small O_APPEND write from interleaving with another one.

use std::collections::VecDeque;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::LedgerError;
use crate::reader::{LedgerReader, ReadOptions};
use crate::record::Record;

/// Handle on a ledger file. Cheap to create; holds no open file.
#[derive(Debug, Clone)]
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Return the path to the ledger file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record as a single compact JSON line.
    ///
    /// Creates missing parent directories and the file itself. Performs no
    /// redaction and no schema check; use [`crate::LedgerWriter`] for that.
    pub fn append(&self, record: &Record) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| LedgerError::io(parent, e))?;
        }

        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LedgerError::io(&self.path, e))?;
        // One write call per record.
        file.write_all(line.as_bytes())
            .map_err(|e| LedgerError::io(&self.path, e))?;

        tracing::debug!(id = %record.id, path = %self.path.display(), "appended ledger record");
        Ok(())
    }

    /// Stream every record in file order.
    pub fn read_all(&self, options: ReadOptions) -> Result<LedgerReader, LedgerError> {
        LedgerReader::open(&self.path, options)
    }

    /// The last `n` records, oldest first.
    pub fn tail(&self, n: usize, options: ReadOptions) -> Result<Vec<Record>, LedgerError> {
        if n == 0 {
            return Ok(Vec::new());
        }
        let mut window = VecDeque::with_capacity(n);
        for record in self.read_all(options)? {
            if window.len() == n {
                window.pop_front();
            }
            window.push_back(record?);
        }
        Ok(window.into())
    }

    /// The record with this id. If several share it, the last one wins.
    pub fn find(&self, id: &str, options: ReadOptions) -> Result<Option<Record>, LedgerError> {
        let mut found = None;
        for record in self.read_all(options)? {
            let record = record?;
            if record.id == id {
                found = Some(record);
            }
        }
        Ok(found)
    }

    /// Records whose text fields contain `query` (case-insensitive), in order.
    pub fn search(&self, query: &str, options: ReadOptions) -> Result<Vec<Record>, LedgerError> {
        let mut hits = Vec::new();
        for record in self.read_all(options)? {
            let record = record?;
            if record.mentions(query) {
                hits.push(record);
            }
        }
        Ok(hits)
    }

    /// Number of readable records.
    pub fn count(&self, options: ReadOptions) -> Result<usize, LedgerError> {
        let mut n = 0;
        for record in self.read_all(options)? {
            record?;
            n += 1;
        }
        Ok(n)
    }
}
