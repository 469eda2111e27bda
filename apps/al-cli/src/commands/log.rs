// log.rs — `al log`: build a record, redact it, append it.

use al_ledger::{ActionKind, Ledger, LedgerWriter, Record, RecordContext, Verification};
use al_redact::RedactionMode;
use clap::Args;

use crate::config::LedgerConfig;

#[derive(Args)]
pub struct LogArgs {
    /// One-line summary of the action.
    #[arg(long, short)]
    pub summary: String,

    /// Action type (defaults to AGENT_LEDGER_DEFAULT_TYPE or `other`).
    #[arg(long = "type", short = 't')]
    pub kind: Option<ActionKind>,

    /// A step that was taken. Repeatable.
    #[arg(long)]
    pub did: Vec<String>,

    /// An assumption that was made. Repeatable.
    #[arg(long = "assume")]
    pub assumptions: Vec<String>,

    /// Something that remains uncertain. Repeatable.
    #[arg(long = "unsure")]
    pub uncertainties: Vec<String>,

    /// A path or URL the action touched. Repeatable.
    #[arg(long = "artifact")]
    pub artifacts: Vec<String>,

    #[arg(long)]
    pub channel: Option<String>,

    #[arg(long)]
    pub session: Option<String>,

    #[arg(long)]
    pub request: Option<String>,

    /// A check a reviewer could run. Repeatable.
    #[arg(long = "suggest")]
    pub suggested: Vec<String>,

    /// A result that was observed. Repeatable.
    #[arg(long)]
    pub observed: Vec<String>,

    /// Refuse to write if anything looks like a secret.
    #[arg(long)]
    pub strict: bool,

    /// Print the written record as JSON instead of just its id.
    #[arg(long)]
    pub json: bool,
}

impl LogArgs {
    fn to_record(&self, default_kind: ActionKind) -> Record {
        let mut record = Record::new(self.kind.unwrap_or(default_kind), self.summary.clone())
            .with_context(RecordContext {
                channel: self.channel.clone(),
                session: self.session.clone(),
                request: self.request.clone(),
            });
        record.action.artifacts = self.artifacts.clone();
        record.what_i_did = self.did.clone();
        record.assumptions = self.assumptions.clone();
        record.uncertainties = self.uncertainties.clone();
        if !self.suggested.is_empty() || !self.observed.is_empty() {
            record = record.with_verification(Verification {
                suggested: self.suggested.clone(),
                observed: self.observed.clone(),
            });
        }
        record
    }
}

pub fn execute(args: &LogArgs, config: &LedgerConfig) -> anyhow::Result<()> {
    let mut options = config.scan_options()?;
    if args.strict {
        options.mode = RedactionMode::Strict;
    }

    let writer = LedgerWriter::new(Ledger::new(&config.ledger_path)).with_scan_options(options);
    let written = writer.record(args.to_record(config.default_action_type))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&written)?);
    } else {
        println!("{}", written.id);
    }
    Ok(())
}
