// writer.rs — The guarded write path: validate, redact, append.
//
// `Ledger::append` is the raw primitive. Callers that build records from
// agent output go through `LedgerWriter::record` instead, which refuses
// invalid records and runs the whole record tree through the redactor before
// a single byte reaches the file.

use al_redact::{Redactor, ScanOptions};

use crate::error::LedgerError;
use crate::record::Record;
use crate::store::Ledger;

pub struct LedgerWriter {
    ledger: Ledger,
    redactor: Redactor,
    options: ScanOptions,
}

impl LedgerWriter {
    /// Writer using the built-in patterns in redact mode.
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger,
            redactor: Redactor::default(),
            options: ScanOptions::default(),
        }
    }

    pub fn with_redactor(mut self, redactor: Redactor) -> Self {
        self.redactor = redactor;
        self
    }

    pub fn with_scan_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Validate, redact, and append `record`. Returns what was written.
    ///
    /// In strict mode a record containing secrets fails with
    /// [`LedgerError::Secrets`] and the ledger is left untouched.
    pub fn record(&self, record: Record) -> Result<Record, LedgerError> {
        record.validate()?;
        let value = serde_json::to_value(&record)?;
        let scanned = self.redactor.scan(&value, &self.options)?;
        let clean = Record::from_json_value(scanned)?;
        self.ledger.append(&clean)?;
        Ok(clean)
    }
}
