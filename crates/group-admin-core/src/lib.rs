//! Group Admin Core
//!
//! Target-agnostic domain layer of the group messaging dashboard:
//! - tree / query: the group hierarchy and everything derived from it
//! - message / compose / history: message model and the view state machines
//! - upload / notify / config: small supporting pieces shared by the views
//! - gateway: the contract of the external backend service

mod error;
mod config;
mod tree;
mod query;
mod message;
mod compose;
mod history;
mod upload;
mod notify;
mod gateway;

#[cfg(test)]
mod tests;

pub use error::{ApiError, ApiResult};
pub use config::DashboardConfig;
pub use tree::{decode_forest, GroupId, GroupNode, GroupTree, TreeSummary};
pub use query::{
    count_contacts, count_nodes, find_flat, flatten, is_visible, matches, visible_rows,
    ExpansionState, FlatGroup, TreeRow, LABEL_SEPARATOR,
};
pub use message::{
    sms_kind, Ack, MessageId, MessageRecord, MessageUpdate, Priority, SendMessageRequest,
    SendReceipt, SmsKind, Stats, SMS_LENGTH,
};
pub use compose::{ComposeDraft, ComposeError, ComposeFlow, ComposePhase};
pub use history::{EditDraft, HistoryError, MessageHistory, RECENT_DAYS};
pub use upload::{format_megabytes, validate_spreadsheet, UploadFile, SPREADSHEET_MIME_TYPES};
pub use notify::{Notice, NoticeBoard, NoticeKind};
pub use gateway::Gateway;
