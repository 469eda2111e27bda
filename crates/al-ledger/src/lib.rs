//! # al-ledger
//!
//! Append-only ledger of agent actions for the agent ledger.
//!
//! Each [`Record`] says what an agent did, what it assumed, and what it is
//! unsure about. Records are stored one per line in a JSONL file and read
//! back through a streaming [`LedgerReader`] that re-validates every line
//! against the same schema the writer enforced.
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use al_ledger::{ActionKind, Ledger, LedgerWriter, ReadOptions, Record};
//!
//! let writer = LedgerWriter::new(Ledger::new("/tmp/ledger.jsonl"));
//! let record = Record::new(ActionKind::FileEdit, "Fixed off-by-one in pager")
//!     .with_artifact("src/pager.rs")
//!     .with_assumption("page size is never zero");
//! writer.record(record).unwrap();
//!
//! for record in writer.ledger().read_all(ReadOptions::default()).unwrap() {
//!     println!("{}", record.unwrap().action.summary);
//! }
//! ```

pub mod error;
pub mod id;
pub mod reader;
pub mod record;
pub mod store;
pub mod writer;

pub use error::{FaultCause, LedgerError, ParseFault, SchemaError};
pub use id::generate_id;
pub use reader::{FaultPolicy, LedgerReader, ReadOptions};
pub use record::{Action, ActionKind, Record, RecordContext, Verification};
pub use store::Ledger;
pub use writer::LedgerWriter;
