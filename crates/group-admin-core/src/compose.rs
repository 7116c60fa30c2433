//! Compose Flow
//!
//! Draft and phase of the "send message" view:
//! Idle -> Composing -> Sending -> Sent | Failed.
//! Validation and the in-flight guard run before the gateway is touched.

use crate::error::ApiError;
use crate::message::{Priority, SendMessageRequest, SendReceipt};
use crate::tree::GroupId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeDraft {
    pub content: String,
    pub group: Option<GroupId>,
    pub priority: Priority,
    pub expiry_days: u32,
}

impl ComposeDraft {
    pub fn new(expiry_days: u32) -> Self {
        Self {
            content: String::new(),
            group: None,
            priority: Priority::default(),
            expiry_days,
        }
    }

    /// Nothing the user typed or picked yet
    pub fn is_blank(&self) -> bool {
        self.content.is_empty() && self.group.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposePhase {
    Idle,
    Composing,
    Sending,
    Sent,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    AlreadySending,
    EmptyContent,
    NoGroup,
    InvalidExpiry,
}

impl std::fmt::Display for ComposeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComposeError::AlreadySending => write!(f, "A message is already being sent"),
            ComposeError::EmptyContent => write!(f, "Message content cannot be empty"),
            ComposeError::NoGroup => write!(f, "Select a target group first"),
            ComposeError::InvalidExpiry => write!(f, "Expiry must be at least one day"),
        }
    }
}

impl std::error::Error for ComposeError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeFlow {
    pub draft: ComposeDraft,
    pub phase: ComposePhase,
    default_expiry_days: u32,
}

impl ComposeFlow {
    pub fn new(default_expiry_days: u32) -> Self {
        Self {
            draft: ComposeDraft::new(default_expiry_days),
            phase: ComposePhase::Idle,
            default_expiry_days,
        }
    }

    pub fn is_sending(&self) -> bool {
        self.phase == ComposePhase::Sending
    }

    /// Whether the send button should be enabled
    pub fn can_send(&self) -> bool {
        !self.is_sending()
            && !self.draft.content.trim().is_empty()
            && self.draft.group.is_some()
            && self.draft.expiry_days > 0
    }

    pub fn set_content(&mut self, content: String) {
        self.draft.content = content;
        self.touch();
    }

    pub fn select_group(&mut self, group: Option<GroupId>) {
        self.draft.group = group;
        self.touch();
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.draft.priority = priority;
        self.touch();
    }

    pub fn set_expiry_days(&mut self, days: u32) {
        self.draft.expiry_days = days;
        self.touch();
    }

    // Edits while a send is in flight keep the Sending phase
    fn touch(&mut self) {
        if self.is_sending() {
            return;
        }
        self.phase = if self.draft.is_blank() {
            ComposePhase::Idle
        } else {
            ComposePhase::Composing
        };
    }

    /// Validate the draft and enter Sending
    pub fn begin_send(&mut self) -> Result<SendMessageRequest, ComposeError> {
        if self.is_sending() {
            return Err(ComposeError::AlreadySending);
        }
        if self.draft.content.trim().is_empty() {
            return Err(ComposeError::EmptyContent);
        }
        let group_id = self.draft.group.clone().ok_or(ComposeError::NoGroup)?;
        if self.draft.expiry_days == 0 {
            return Err(ComposeError::InvalidExpiry);
        }

        self.phase = ComposePhase::Sending;
        Ok(SendMessageRequest {
            group_id,
            content: self.draft.content.clone(),
            priority: self.draft.priority,
            expiry_days: self.draft.expiry_days,
        })
    }

    /// Record the gateway outcome. Success resets the draft, failure keeps
    /// it so the user can try again.
    pub fn finish(&mut self, result: Result<SendReceipt, ApiError>) {
        match result {
            Ok(receipt) => {
                log::info!("[COMPOSE] sent to {} group(s)", receipt.group_ids.len());
                self.draft = ComposeDraft::new(self.default_expiry_days);
                self.phase = ComposePhase::Sent;
            }
            Err(err) => {
                log::warn!("[COMPOSE] send failed: {}", err);
                self.phase = ComposePhase::Failed(err.user_message());
            }
        }
    }
}
