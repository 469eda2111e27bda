// config.rs — Ledger configuration for the CLI.
//
// The library crates take explicit paths and options. This module is where
// those values come from, in increasing precedence:
//
//   1. defaults: `<project>/.agent-ledger/ledger.jsonl`, action type `other`
//   2. `<project>/.agent-ledger/config.toml`
//   3. environment: AGENT_LEDGER_PATH, AGENT_LEDGER_DEFAULT_TYPE
//   4. command-line flags (applied by the caller)

use std::path::{Path, PathBuf};

use al_ledger::{ActionKind, ReadOptions};
use al_redact::{ExtraPatterns, RedactionMode, ScanOptions};
use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const LEDGER_DIR: &str = ".agent-ledger";
pub const PATH_ENV: &str = "AGENT_LEDGER_PATH";
pub const TYPE_ENV: &str = "AGENT_LEDGER_DEFAULT_TYPE";

/// Redaction settings from config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionConfig {
    /// "redact" (default) or "strict".
    #[serde(default)]
    pub mode: RedactionMode,

    /// Extra key names (regex, whole-name, case-insensitive) to treat as sensitive.
    #[serde(default)]
    pub extra_key_patterns: Vec<String>,

    /// Extra value regexes to redact anywhere in string content.
    #[serde(default)]
    pub extra_value_patterns: Vec<String>,
}

/// On-disk shape of `.agent-ledger/config.toml`. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub ledger_path: Option<PathBuf>,
    pub default_action_type: Option<ActionKind>,
    #[serde(default)]
    pub skip_invalid: bool,
    #[serde(default)]
    pub redaction: RedactionConfig,
}

impl ConfigFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid config in {}", path.display()))
    }

    /// Load the file if present; a missing file means defaults.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Fully resolved settings for one CLI invocation.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    pub ledger_path: PathBuf,
    pub default_action_type: ActionKind,
    pub skip_invalid: bool,
    pub redaction: RedactionConfig,
}

impl LedgerConfig {
    /// Defaults for a project, before any file or environment overrides.
    pub fn for_project(project_root: impl AsRef<Path>) -> Self {
        Self {
            ledger_path: project_root.as_ref().join(LEDGER_DIR).join("ledger.jsonl"),
            default_action_type: ActionKind::Other,
            skip_invalid: false,
            redaction: RedactionConfig::default(),
        }
    }

    /// Resolve config for `project_root` from the config file and process environment.
    pub fn load(project_root: &Path) -> anyhow::Result<Self> {
        Self::resolve(project_root, |key| std::env::var(key).ok())
    }

    /// Resolve config using `env` to look up environment variables.
    pub fn resolve(
        project_root: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let mut config = Self::for_project(project_root);

        let file = ConfigFile::load_or_default(&project_root.join(LEDGER_DIR).join("config.toml"))?;
        if let Some(path) = file.ledger_path {
            config.ledger_path = project_root.join(path);
        }
        if let Some(kind) = file.default_action_type {
            config.default_action_type = kind;
        }
        config.skip_invalid = file.skip_invalid;
        config.redaction = file.redaction;

        if let Some(path) = env(PATH_ENV).filter(|p| !p.trim().is_empty()) {
            config.ledger_path = PathBuf::from(path);
        }
        if let Some(kind) = env(TYPE_ENV).filter(|k| !k.trim().is_empty()) {
            config.default_action_type = kind
                .trim()
                .parse()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("invalid {TYPE_ENV}"))?;
        }

        Ok(config)
    }

    /// Scan options for writes, with extra patterns compiled.
    pub fn scan_options(&self) -> anyhow::Result<ScanOptions> {
        let extra = ExtraPatterns::compile(
            &self.redaction.extra_key_patterns,
            &self.redaction.extra_value_patterns,
        )?;
        Ok(ScanOptions::default()
            .with_mode(self.redaction.mode)
            .with_extra(extra))
    }

    pub fn read_options(&self) -> ReadOptions {
        if self.skip_invalid {
            ReadOptions::skip_invalid()
        } else {
            ReadOptions::fail_fast()
        }
    }
}
