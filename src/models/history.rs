use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

/// What kind of event a history entry records. The UI resolves icons and
/// colors from the kind; the domain stores only the kind itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum HistoryKind {
    Created,
    Submitted,
    StatusChanged,
    ItemAdded,
    ItemAdjudicated,
    Comment,
}

/// Immutable append-only record attached to an order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub kind: HistoryKind,
    /// Free-text event description shown in the order timeline.
    pub description: String,
    /// Who performed the action (client user or manager).
    pub actor: String,
}

impl HistoryEntry {
    pub fn new(kind: HistoryKind, description: impl Into<String>, actor: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            description: description.into(),
            actor: actor.into(),
        }
    }
}
