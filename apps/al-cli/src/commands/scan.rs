// scan.rs — `al scan`: redact (or reject) JSON read from stdin.

use std::io::Read;

use al_redact::{RedactionMode, Redactor, SecretsDetected};
use anyhow::Context;

use crate::config::LedgerConfig;

pub fn execute(config: &LedgerConfig, strict: bool) -> anyhow::Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    let value: serde_json::Value =
        serde_json::from_str(&input).context("stdin is not valid JSON")?;

    let mut options = config.scan_options()?;
    if strict {
        options.mode = RedactionMode::Strict;
    }

    match Redactor::default().scan(&value, &options) {
        Ok(clean) => {
            println!("{}", serde_json::to_string_pretty(&clean)?);
            Ok(())
        }
        Err(SecretsDetected { findings }) => {
            for finding in &findings {
                eprintln!("  {finding}");
            }
            anyhow::bail!("{} potential secret(s) detected", findings.len())
        }
    }
}
