//! Group Endpoints
//!
//! Hierarchy, stats and the two spreadsheet uploads.

use reqwest::multipart::{Form, Part};

use group_admin_core::{decode_forest, Ack, ApiError, ApiResult, GroupId, GroupNode, Stats, UploadFile};

use super::{segment, send, send_json, HttpGateway};

/// Multipart body with the spreadsheet under `file`
fn file_form(file: UploadFile) -> ApiResult<Form> {
    let UploadFile { name, mime, bytes } = file;
    let mut part = Part::bytes(bytes).file_name(name);
    if !mime.is_empty() {
        part = part
            .mime_str(&mime)
            .map_err(|e| ApiError::Validation(e.to_string()))?;
    }
    Ok(Form::new().part("file", part))
}

pub async fn upload_groups(gateway: &HttpGateway, file: UploadFile) -> ApiResult<Ack> {
    log::info!("[API] uploading group structure '{}' ({} bytes)", file.name, file.size());
    let form = file_form(file)?;
    let request = gateway.client().post(gateway.url("/upload-groups/")).multipart(form);
    send_json(request).await
}

pub async fn upload_contacts(gateway: &HttpGateway, group_id: &GroupId, file: UploadFile) -> ApiResult<Ack> {
    log::info!("[API] uploading contacts '{}' into group {}", file.name, group_id);
    let form = file_form(file)?;
    let path = format!("/upload-contacts/{}/", segment(group_id.as_str()));
    let request = gateway.client().post(gateway.url(&path)).multipart(form);
    send_json(request).await
}

/// Blank filters fetch the whole forest
pub async fn hierarchy(gateway: &HttpGateway, name_filter: Option<&str>) -> ApiResult<Vec<GroupNode>> {
    let mut request = gateway.client().get(gateway.url("/groups/hierarchy/"));
    if let Some(name) = name_filter.map(str::trim).filter(|name| !name.is_empty()) {
        request = request.query(&[("group_name", name)]);
    }
    let body = send(request).await?;
    decode_forest(&body).map_err(|err| {
        log::error!("[API] unexpected hierarchy body: {}", err);
        err
    })
}

pub async fn stats(gateway: &HttpGateway) -> ApiResult<Stats> {
    send_json(gateway.client().get(gateway.url("/stats/"))).await
}
