//! Message Endpoints

use group_admin_core::{
    Ack, ApiResult, MessageId, MessageRecord, MessageUpdate, SendMessageRequest, SendReceipt,
};

use super::{segment, send_json, HttpGateway};

pub async fn send_message(gateway: &HttpGateway, request: &SendMessageRequest) -> ApiResult<SendReceipt> {
    let path = format!("/send-message/{}/", segment(request.group_id.as_str()));
    let http = gateway
        .client()
        .post(gateway.url(&path))
        .query(&request.query_pairs());
    send_json(http).await
}

pub async fn message_history(gateway: &HttpGateway) -> ApiResult<Vec<MessageRecord>> {
    send_json(gateway.client().get(gateway.url("/messages/history/"))).await
}

pub async fn update_message(gateway: &HttpGateway, id: MessageId, update: &MessageUpdate) -> ApiResult<Ack> {
    let request = gateway
        .client()
        .put(gateway.url(&format!("/messages/{}/", id)))
        .json(update);
    send_json(request).await
}

pub async fn delete_message(gateway: &HttpGateway, id: MessageId) -> ApiResult<Ack> {
    send_json(gateway.client().delete(gateway.url(&format!("/messages/{}/", id)))).await
}

pub async fn messages_for_contact(gateway: &HttpGateway, phone_number: &str) -> ApiResult<Vec<MessageRecord>> {
    let path = format!("/messages/{}/", segment(phone_number.trim()));
    send_json(gateway.client().get(gateway.url(&path))).await
}
