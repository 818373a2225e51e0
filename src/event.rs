//! Recent change records, shaped like the `mediawiki/recentchange`
//! stream payloads so they deserialize straight from the feed.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Edit,
    New,
    Log,
    Categorize,
    External,
}

#[derive(Deserialize, Debug, Clone, Copy, Default)]
pub struct OldNew {
    pub old: Option<u64>,
    pub new: Option<u64>,
}

/// Stream envelope. The formatter ignores it; it is carried so full
/// payloads deserialize without loss.
#[derive(Deserialize, Debug, Clone)]
pub struct EventMeta {
    #[serde(with = "crate::util::dt")]
    pub dt: DateTime<Utc>,
    pub stream: String,
    pub domain: Option<String>,
    pub uri: Option<String>,
    pub id: Option<String>,
}

/// https://schema.wikimedia.org/repositories/primary/jsonschema/mediawiki/recentchange/latest.json
#[derive(Deserialize, Debug, Clone)]
pub struct ChangeEvent {
    pub meta: Option<EventMeta>,
    #[serde(rename = "type")]
    pub ty: ChangeType,
    /// Recent changes row id, used for `rcid` patrol links.
    pub id: Option<u64>,
    /// Prefixed name of the page the event refers to. For log events
    /// this is the affected page, not the log page.
    pub title: String,
    pub namespace: Option<i64>,
    #[serde(default)]
    pub comment: String,
    pub user: String,
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub minor: bool,
    pub patrolled: Option<bool>,
    /// Page size in bytes before and after.
    pub length: Option<OldNew>,
    /// Previous and current revision ids.
    pub revision: Option<OldNew>,
    pub log_id: Option<u64>,
    pub log_type: Option<String>,
    pub log_action: Option<String>,
    pub log_params: Option<Value>,
    /// Action description; may embed the acting user's name.
    pub log_action_comment: Option<String>,
}

impl ChangeEvent {
    pub fn from_json(s: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// The `4::target` parameter of a move log entry.
    pub fn move_target(&self) -> Option<&str> {
        if self.log_type.as_deref() != Some("move") {
            return None;
        }
        self.log_params.as_ref()?.get("4::target")?.as_str()
    }
}
