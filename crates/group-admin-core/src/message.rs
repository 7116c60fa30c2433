//! Message Model
//!
//! Wire types for message history, sending and dashboard stats.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::tree::GroupId;

/// Longest content that still fits a single SMS
pub const SMS_LENGTH: usize = 160;

/// Format the backend uses for `expiry` and `timestamp`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Backend message identifier; only positive values are real ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub i64);

impl MessageId {
    pub fn is_valid(&self) -> bool {
        self.0 > 0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority '{}'", other)),
        }
    }
}

/// A sent message as listed in the history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub id: MessageId,
    /// Display name of the target group
    pub group: String,
    pub content: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub expiry: String,
    #[serde(default)]
    pub timestamp: String,
}

impl MessageRecord {
    pub fn timestamp_at(&self) -> Option<NaiveDateTime> {
        parse_backend_time(&self.timestamp)
    }

    pub fn expiry_at(&self) -> Option<NaiveDateTime> {
        parse_backend_time(&self.expiry)
    }

    pub fn sms_kind(&self) -> SmsKind {
        sms_kind(&self.content)
    }
}

/// Accepts the backend's short format as well as full ISO 8601
fn parse_backend_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_utc()))
}

/// Partial update of a message; unset fields are left alone server-side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
}

impl MessageUpdate {
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.priority.is_none() && self.expiry.is_none()
    }

    pub fn apply_to(&self, record: &mut MessageRecord) {
        if let Some(content) = &self.content {
            record.content = content.clone();
        }
        if let Some(priority) = self.priority {
            record.priority = priority;
        }
        if let Some(expiry) = &self.expiry {
            record.expiry = expiry.clone();
        }
    }
}

/// Everything the backend needs to fan a message out to a group subtree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendMessageRequest {
    pub group_id: GroupId,
    pub content: String,
    pub priority: Priority,
    pub expiry_days: u32,
}

impl SendMessageRequest {
    /// Query parameters of the send endpoint
    pub fn query_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("content", self.content.clone()),
            ("priority", self.priority.as_str().to_string()),
            ("expiry_days", self.expiry_days.to_string()),
        ]
    }
}

/// Ack of a send; lists every group the fan-out reached
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SendReceipt {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub group_ids: Vec<GroupId>,
}

/// Generic ack of uploads, updates and deletes
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub status: String,
}

/// Dashboard aggregates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total_groups: u64,
    #[serde(default)]
    pub total_contacts: u64,
    #[serde(default)]
    pub total_messages: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmsKind {
    Sms,
    LongSms,
}

impl SmsKind {
    pub fn label(&self) -> &'static str {
        match self {
            SmsKind::Sms => "SMS",
            SmsKind::LongSms => "Long SMS",
        }
    }
}

pub fn sms_kind(content: &str) -> SmsKind {
    if content.chars().count() > SMS_LENGTH {
        SmsKind::LongSms
    } else {
        SmsKind::Sms
    }
}
