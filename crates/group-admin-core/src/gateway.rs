//! Backend Gateway
//!
//! Contract of the external service that owns all groups, contacts and
//! messages. The browser implementation lives in the UI crate.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::message::{Ack, MessageId, MessageRecord, MessageUpdate, SendMessageRequest, SendReceipt, Stats};
use crate::tree::{GroupId, GroupNode};
use crate::upload::UploadFile;

/// Futures are `?Send`: in the browser every request runs on the UI thread.
#[async_trait(?Send)]
pub trait Gateway {
    /// Create groups and subgroups from a spreadsheet
    async fn upload_groups(&self, file: UploadFile) -> ApiResult<Ack>;

    /// Attach the contacts of a spreadsheet to one group
    async fn upload_contacts(&self, group_id: &GroupId, file: UploadFile) -> ApiResult<Ack>;

    /// Whole forest, or the subtree rooted at the named group
    async fn hierarchy(&self, name_filter: Option<&str>) -> ApiResult<Vec<GroupNode>>;

    async fn stats(&self) -> ApiResult<Stats>;

    /// Fan a message out to a group and all of its descendants
    async fn send_message(&self, request: &SendMessageRequest) -> ApiResult<SendReceipt>;

    /// Newest first
    async fn message_history(&self) -> ApiResult<Vec<MessageRecord>>;

    async fn update_message(&self, id: MessageId, update: &MessageUpdate) -> ApiResult<Ack>;

    /// Irreversible
    async fn delete_message(&self, id: MessageId) -> ApiResult<Ack>;

    /// Unexpired messages reaching the contact with this phone number
    async fn messages_for_contact(&self, phone_number: &str) -> ApiResult<Vec<MessageRecord>>;
}
