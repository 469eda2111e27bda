// record.rs — The ledger record: one line in the JSONL ledger.
//
// A record says what an agent did, what it assumed, and what it is unsure
// about. The three core lists are always present (possibly empty); serde
// fills them with `[]` when a line omits them, so every decoded record is
// normalized the same way.
//
// Records are immutable once appended. Corrections are new records.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::id::generate_id;

/// What kind of action a record describes. Closed set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    FileRead,
    FileWrite,
    FileEdit,
    Browser,
    ApiCall,
    Exec,
    MessageSend,
    ConfigChange,
    #[default]
    Other,
}

impl ActionKind {
    pub const ALL: [ActionKind; 9] = [
        ActionKind::FileRead,
        ActionKind::FileWrite,
        ActionKind::FileEdit,
        ActionKind::Browser,
        ActionKind::ApiCall,
        ActionKind::Exec,
        ActionKind::MessageSend,
        ActionKind::ConfigChange,
        ActionKind::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::FileRead => "file_read",
            ActionKind::FileWrite => "file_write",
            ActionKind::FileEdit => "file_edit",
            ActionKind::Browser => "browser",
            ActionKind::ApiCall => "api_call",
            ActionKind::Exec => "exec",
            ActionKind::MessageSend => "message_send",
            ActionKind::ConfigChange => "config_change",
            ActionKind::Other => "other",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = ActionKind::ALL.iter().map(|k| k.as_str()).collect();
                format!("unknown action type `{s}` (expected one of: {})", valid.join(", "))
            })
    }
}

/// The action itself. Artifacts are references (paths, URLs), never secret values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub summary: String,
    #[serde(default)]
    pub artifacts: Vec<String>,
}

/// Optional correlators tying a record to a conversation or request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<String>,
}

impl RecordContext {
    pub fn is_empty(&self) -> bool {
        self.channel.is_none() && self.session.is_none() && self.request.is_none()
    }
}

/// How a reviewer could check the work, and what was actually observed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    #[serde(default)]
    pub suggested: Vec<String>,
    #[serde(default)]
    pub observed: Vec<String>,
}

/// A single ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Sortable identifier, see [`generate_id`].
    pub id: String,

    /// Creation time (UTC).
    pub ts: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<RecordContext>,

    pub action: Action,

    #[serde(default)]
    pub what_i_did: Vec<String>,

    #[serde(default)]
    pub assumptions: Vec<String>,

    #[serde(default)]
    pub uncertainties: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<Verification>,
}

impl Record {
    /// Create a record stamped with the current time and a fresh id.
    pub fn new(kind: ActionKind, summary: impl Into<String>) -> Self {
        let ts = Utc::now();
        Self {
            id: generate_id(ts),
            ts,
            context: None,
            action: Action {
                kind,
                summary: summary.into(),
                artifacts: Vec::new(),
            },
            what_i_did: Vec::new(),
            assumptions: Vec::new(),
            uncertainties: Vec::new(),
            verification: None,
        }
    }

    /// Decode and validate a JSON value against the record schema.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, SchemaError> {
        let record: Record = serde_json::from_value(value)?;
        record.validate()?;
        Ok(record)
    }

    /// Check the invariants serde cannot express.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.id.trim().is_empty() {
            return Err(SchemaError::Empty("id"));
        }
        if self.action.summary.trim().is_empty() {
            return Err(SchemaError::Empty("action.summary"));
        }
        Ok(())
    }

    pub fn with_did(mut self, step: impl Into<String>) -> Self {
        self.what_i_did.push(step.into());
        self
    }

    pub fn with_assumption(mut self, assumption: impl Into<String>) -> Self {
        self.assumptions.push(assumption.into());
        self
    }

    pub fn with_uncertainty(mut self, uncertainty: impl Into<String>) -> Self {
        self.uncertainties.push(uncertainty.into());
        self
    }

    pub fn with_artifact(mut self, artifact: impl Into<String>) -> Self {
        self.action.artifacts.push(artifact.into());
        self
    }

    /// Attach correlators. An all-empty context is dropped.
    pub fn with_context(mut self, context: RecordContext) -> Self {
        self.context = (!context.is_empty()).then_some(context);
        self
    }

    pub fn with_verification(mut self, verification: Verification) -> Self {
        self.verification = Some(verification);
        self
    }

    /// Case-insensitive substring match over the human-readable fields.
    pub fn mentions(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        let hit = |s: &String| s.to_lowercase().contains(&needle);
        hit(&self.action.summary)
            || self.action.artifacts.iter().any(hit)
            || self.what_i_did.iter().any(hit)
            || self.assumptions.iter().any(hit)
            || self.uncertainties.iter().any(hit)
    }
}
