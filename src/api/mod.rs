//! Backend Gateway over HTTP
//!
//! JSON-over-HTTP bindings to the backend service, organized by domain.
//! Requests go through reqwest, which uses `fetch` on wasm32.

mod groups;
mod messages;
mod files;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use group_admin_core::{
    Ack, ApiError, ApiResult, DashboardConfig, Gateway, GroupId, GroupNode, MessageId, MessageRecord, MessageUpdate,
    SendMessageRequest, SendReceipt, Stats, UploadFile,
};

pub use files::read_file;

/// Characters left as-is inside a path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Gateway to the backend at `base_url`
///
/// Clones share one `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    base_url: String,
    client: reqwest::Client,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.api_base_url.as_str())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

/// Percent-encode one path segment
fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

/// Send and return the body of a successful response
async fn send(request: reqwest::RequestBuilder) -> ApiResult<String> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !status.is_success() {
        log::error!("[API] request failed with {}: {}", status, body);
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

async fn send_json<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> ApiResult<T> {
    let body = send(request).await?;
    serde_json::from_str(&body).map_err(|e| {
        log::error!("[API] unexpected response body: {}", e);
        ApiError::from(e)
    })
}

#[async_trait(?Send)]
impl Gateway for HttpGateway {
    async fn upload_groups(&self, file: UploadFile) -> ApiResult<Ack> {
        groups::upload_groups(self, file).await
    }

    async fn upload_contacts(&self, group_id: &GroupId, file: UploadFile) -> ApiResult<Ack> {
        groups::upload_contacts(self, group_id, file).await
    }

    async fn hierarchy(&self, name_filter: Option<&str>) -> ApiResult<Vec<GroupNode>> {
        groups::hierarchy(self, name_filter).await
    }

    async fn stats(&self) -> ApiResult<Stats> {
        groups::stats(self).await
    }

    async fn send_message(&self, request: &SendMessageRequest) -> ApiResult<SendReceipt> {
        messages::send_message(self, request).await
    }

    async fn message_history(&self) -> ApiResult<Vec<MessageRecord>> {
        messages::message_history(self).await
    }

    async fn update_message(&self, id: MessageId, update: &MessageUpdate) -> ApiResult<Ack> {
        messages::update_message(self, id, update).await
    }

    async fn delete_message(&self, id: MessageId) -> ApiResult<Ack> {
        messages::delete_message(self, id).await
    }

    async fn messages_for_contact(&self, phone_number: &str) -> ApiResult<Vec<MessageRecord>> {
        messages::messages_for_contact(self, phone_number).await
    }
}
