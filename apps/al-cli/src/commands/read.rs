// read.rs — Read-side subcommands: tail, show, search.

use al_ledger::{Ledger, ReadOptions, Record};

use crate::config::LedgerConfig;

fn read_options(config: &LedgerConfig, skip_invalid: bool) -> ReadOptions {
    if skip_invalid {
        ReadOptions::skip_invalid()
    } else {
        config.read_options()
    }
}

fn print_table(records: &[Record]) {
    println!("{:<22} {:<14} SUMMARY", "ID", "TYPE");
    println!("{}", "-".repeat(80));
    for record in records {
        println!(
            "{:<22} {:<14} {}",
            record.id,
            record.action.kind.as_str(),
            record.action.summary.lines().next().unwrap_or_default()
        );
    }
}

pub fn tail(config: &LedgerConfig, n: usize, skip_invalid: bool) -> anyhow::Result<()> {
    let ledger = Ledger::new(&config.ledger_path);
    let records = ledger.tail(n, read_options(config, skip_invalid))?;
    if records.is_empty() {
        println!("No ledger entries at {}", ledger.path().display());
        return Ok(());
    }
    print_table(&records);
    Ok(())
}

pub fn show(config: &LedgerConfig, id: &str, skip_invalid: bool) -> anyhow::Result<()> {
    let ledger = Ledger::new(&config.ledger_path);
    match ledger.find(id, read_options(config, skip_invalid))? {
        Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
        None => anyhow::bail!("no ledger entry with id {id}"),
    }
    Ok(())
}

pub fn search(config: &LedgerConfig, query: &str, skip_invalid: bool) -> anyhow::Result<()> {
    let ledger = Ledger::new(&config.ledger_path);
    let hits = ledger.search(query, read_options(config, skip_invalid))?;
    if hits.is_empty() {
        println!("No entries mention \"{query}\".");
        return Ok(());
    }
    print_table(&hits);
    Ok(())
}
