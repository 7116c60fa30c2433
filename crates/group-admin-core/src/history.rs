//! Message History
//!
//! Client-side list of sent messages with per-record delete and inline
//! edit. The list only changes after the gateway acknowledges.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime};

use crate::error::{ApiError, ApiResult};
use crate::message::{Ack, MessageId, MessageRecord, MessageUpdate, Priority};

/// Window of the "recent messages" counter
pub const RECENT_DAYS: i64 = 7;

/// Inline edit form of one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: MessageId,
    pub content: String,
    pub priority: Priority,
    pub expiry: String,
}

impl EditDraft {
    fn from_record(record: &MessageRecord) -> Self {
        Self {
            id: record.id,
            content: record.content.clone(),
            priority: record.priority,
            expiry: record.expiry.clone(),
        }
    }

    /// Only the fields that differ from `record`
    fn diff(&self, record: &MessageRecord) -> MessageUpdate {
        MessageUpdate {
            content: (self.content != record.content).then(|| self.content.clone()),
            priority: (self.priority != record.priority).then_some(self.priority),
            expiry: (self.expiry.trim() != record.expiry).then(|| self.expiry.trim().to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    InvalidId(MessageId),
    Busy(MessageId),
    NotFound(MessageId),
    NotEditing,
    NothingChanged,
    EmptyContent,
    Saving,
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryError::InvalidId(id) => write!(f, "The message ID \"{}\" is not valid.", id),
            HistoryError::Busy(id) => write!(f, "Message {} is being deleted", id),
            HistoryError::NotFound(id) => write!(f, "Message {} is no longer in the list", id),
            HistoryError::NotEditing => write!(f, "No message is being edited"),
            HistoryError::NothingChanged => write!(f, "Nothing to save"),
            HistoryError::EmptyContent => write!(f, "Message content cannot be empty"),
            HistoryError::Saving => write!(f, "A save is already in progress"),
        }
    }
}

impl std::error::Error for HistoryError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageHistory {
    records: Vec<MessageRecord>,
    deleting: HashSet<MessageId>,
    editing: Option<EditDraft>,
    saving: bool,
}

impl MessageHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wholesale refresh from the backend
    pub fn replace(&mut self, records: Vec<MessageRecord>) {
        self.records = records;
        let still_listed = self
            .editing
            .as_ref()
            .map(|draft| self.records.iter().any(|r| r.id == draft.id))
            .unwrap_or(true);
        if !still_listed {
            self.editing = None;
        }
    }

    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn get(&self, id: MessageId) -> Option<&MessageRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Case-insensitive match on content or group name
    pub fn filter(&self, term: &str) -> Vec<&MessageRecord> {
        let needle = term.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.content.to_lowercase().contains(&needle) || r.group.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Records sent within the last `days` days before `now`
    pub fn recent_count(&self, now: NaiveDateTime, days: i64) -> usize {
        let cutoff = now - Duration::days(days);
        self.records
            .iter()
            .filter_map(|r| r.timestamp_at())
            .filter(|ts| *ts > cutoff)
            .count()
    }

    // ========================
    // Delete
    // ========================

    pub fn is_deleting(&self, id: MessageId) -> bool {
        self.deleting.contains(&id)
    }

    /// Mark one record busy; other records stay actionable
    pub fn begin_delete(&mut self, id: MessageId) -> Result<MessageId, HistoryError> {
        if !id.is_valid() {
            return Err(HistoryError::InvalidId(id));
        }
        if !self.deleting.insert(id) {
            return Err(HistoryError::Busy(id));
        }
        Ok(id)
    }

    /// Drop the record only once the backend acknowledged
    pub fn finish_delete(&mut self, id: MessageId, result: ApiResult<Ack>) -> ApiResult<()> {
        self.deleting.remove(&id);
        match result {
            Ok(_) => {
                self.records.retain(|r| r.id != id);
                if self.editing.as_ref().map(|d| d.id) == Some(id) {
                    self.editing = None;
                }
                log::info!("[HISTORY] deleted message {}", id);
                Ok(())
            }
            Err(err) => {
                log::warn!("[HISTORY] delete of {} failed: {}", id, err);
                Err(err)
            }
        }
    }

    // ========================
    // Inline edit
    // ========================

    pub fn editing(&self) -> Option<&EditDraft> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut EditDraft> {
        self.editing.as_mut()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn begin_edit(&mut self, id: MessageId) -> Result<(), HistoryError> {
        if self.saving {
            return Err(HistoryError::Saving);
        }
        if self.is_deleting(id) {
            return Err(HistoryError::Busy(id));
        }
        let record = self.get(id).ok_or(HistoryError::NotFound(id))?;
        self.editing = Some(EditDraft::from_record(record));
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        if !self.saving {
            self.editing = None;
        }
    }

    /// Build the partial update for the open draft and mark it saving
    pub fn begin_save(&mut self) -> Result<(MessageId, MessageUpdate), HistoryError> {
        if self.saving {
            return Err(HistoryError::Saving);
        }
        let draft = self.editing.as_ref().ok_or(HistoryError::NotEditing)?;
        if draft.content.trim().is_empty() {
            return Err(HistoryError::EmptyContent);
        }
        let record = self.get(draft.id).ok_or(HistoryError::NotFound(draft.id))?;
        let update = draft.diff(record);
        if update.is_empty() {
            return Err(HistoryError::NothingChanged);
        }
        let id = draft.id;
        self.saving = true;
        Ok((id, update))
    }

    /// Apply the update locally after ack; on failure the draft stays open
    pub fn finish_save(
        &mut self,
        id: MessageId,
        update: &MessageUpdate,
        result: ApiResult<Ack>,
    ) -> ApiResult<()> {
        self.saving = false;
        match result {
            Ok(_) => {
                if let Some(record) = self.records.iter_mut().find(|r| r.id == id) {
                    update.apply_to(record);
                }
                if self.editing.as_ref().map(|d| d.id) == Some(id) {
                    self.editing = None;
                }
                Ok(())
            }
            Err(err) => {
                log::warn!("[HISTORY] update of {} failed: {}", id, err);
                Err(err)
            }
        }
    }
}

impl From<HistoryError> for ApiError {
    fn from(err: HistoryError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: i64, group: &str, content: &str, timestamp: &str) -> MessageRecord {
        MessageRecord {
            id: MessageId(id),
            group: group.to_string(),
            content: content.to_string(),
            priority: Priority::Low,
            expiry: "2025-03-20 09:00".to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    fn sample() -> MessageHistory {
        let mut history = MessageHistory::new();
        history.replace(vec![
            record(42, "CSE", "Lab closed today", "2025-03-10 09:00"),
            record(41, "Physics", "Seminar at 5", "2025-03-01 09:00"),
            record(40, "Arts", "Exhibition", "not a date"),
        ]);
        history
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 12).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn test_filter_content_or_group() {
        let history = sample();
        assert_eq!(history.filter("").len(), 3);
        let ids: Vec<i64> = history.filter("cse").iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![42]);
        assert_eq!(history.filter("SEMINAR")[0].id, MessageId(41));
        assert!(history.filter("nothing").is_empty());
    }

    #[test]
    fn test_recent_count() {
        assert_eq!(sample().recent_count(now(), RECENT_DAYS), 1);
        assert_eq!(sample().recent_count(now(), 30), 2);
    }

    #[test]
    fn test_delete_invalid_id() {
        let mut history = sample();
        assert_eq!(history.begin_delete(MessageId(0)), Err(HistoryError::InvalidId(MessageId(0))));
        assert_eq!(history.begin_delete(MessageId(-3)), Err(HistoryError::InvalidId(MessageId(-3))));
    }

    #[test]
    fn test_delete_busy_only_per_record() {
        let mut history = sample();
        history.begin_delete(MessageId(42)).unwrap();
        assert!(history.is_deleting(MessageId(42)));
        assert!(!history.is_deleting(MessageId(41)));
        assert_eq!(history.begin_delete(MessageId(42)), Err(HistoryError::Busy(MessageId(42))));
        assert!(history.begin_delete(MessageId(41)).is_ok());
    }

    #[test]
    fn test_delete_removes_after_ack() {
        let mut history = sample();
        history.begin_delete(MessageId(42)).unwrap();
        assert_eq!(history.len(), 3);
        assert!(history.finish_delete(MessageId(42), Ok(Ack::default())).is_ok());
        assert_eq!(history.len(), 2);
        assert!(!history.is_deleting(MessageId(42)));
    }

    #[test]
    fn test_delete_failure_keeps_record() {
        let mut history = sample();
        history.begin_delete(MessageId(42)).unwrap();
        let err = ApiError::Status { status: 500, body: String::new() };
        assert_eq!(history.finish_delete(MessageId(42), Err(err.clone())), Err(err));
        assert_eq!(history.len(), 3);
        assert!(!history.is_deleting(MessageId(42)));
        assert!(history.begin_delete(MessageId(42)).is_ok());
    }

    #[test]
    fn test_edit_sends_only_changes() {
        let mut history = sample();
        history.begin_edit(MessageId(41)).unwrap();
        {
            let draft = history.editing_mut().unwrap();
            draft.priority = Priority::High;
        }
        let (id, update) = history.begin_save().unwrap();
        assert_eq!(id, MessageId(41));
        assert_eq!(update, MessageUpdate { priority: Some(Priority::High), ..Default::default() });
        assert!(history.is_saving());
        assert_eq!(history.begin_save(), Err(HistoryError::Saving));

        history.finish_save(id, &update, Ok(Ack::default())).unwrap();
        assert!(history.editing().is_none());
        assert_eq!(history.records()[1].priority, Priority::High);
        assert_eq!(history.records()[1].content, "Seminar at 5");
    }

    #[test]
    fn test_edit_validation() {
        let mut history = sample();
        assert_eq!(history.begin_save(), Err(HistoryError::NotEditing));
        assert_eq!(history.begin_edit(MessageId(7)), Err(HistoryError::NotFound(MessageId(7))));

        history.begin_edit(MessageId(42)).unwrap();
        assert_eq!(history.begin_save(), Err(HistoryError::NothingChanged));

        history.editing_mut().unwrap().content = "  ".to_string();
        assert_eq!(history.begin_save(), Err(HistoryError::EmptyContent));
        assert!(!history.is_saving());
    }

    #[test]
    fn test_edit_failure_keeps_draft() {
        let mut history = sample();
        history.begin_edit(MessageId(42)).unwrap();
        history.editing_mut().unwrap().content = "Lab open".to_string();
        let (id, update) = history.begin_save().unwrap();

        let result = history.finish_save(id, &update, Err(ApiError::Network("offline".into())));
        assert!(result.is_err());
        assert_eq!(history.editing().unwrap().content, "Lab open");
        assert_eq!(history.records()[0].content, "Lab closed today");
    }

    #[test]
    fn test_replace_drops_stale_draft() {
        let mut history = sample();
        history.begin_edit(MessageId(40)).unwrap();
        history.replace(vec![record(42, "CSE", "Lab closed today", "2025-03-10 09:00")]);
        assert!(history.editing().is_none());
    }
}
