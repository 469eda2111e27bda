// check.rs — `al check`: read the whole ledger and report every bad line.

use al_ledger::{Ledger, ReadOptions};

use crate::config::LedgerConfig;

pub fn execute(config: &LedgerConfig) -> anyhow::Result<()> {
    let ledger = Ledger::new(&config.ledger_path);
    if !ledger.path().exists() {
        println!("No ledger found at {}", ledger.path().display());
        return Ok(());
    }

    let mut reader = ledger.read_all(ReadOptions::skip_invalid())?;
    let mut valid = 0usize;
    for record in reader.by_ref() {
        record?;
        valid += 1;
    }
    let path = reader.path().display().to_string();
    let faults = reader.into_faults();

    if faults.is_empty() {
        println!("{path}: OK, {valid} entr(y/ies), no invalid lines.");
        return Ok(());
    }

    println!("{path}: {valid} valid entr(y/ies), {} invalid line(s):", faults.len());
    for fault in &faults {
        println!("  line {}: {}", fault.line, fault.cause);
        println!("    {}", fault.content);
    }
    anyhow::bail!("ledger contains {} invalid line(s)", faults.len())
}
