//! Browser File Access

use wasm_bindgen_futures::JsFuture;

use group_admin_core::{ApiError, ApiResult, UploadFile};

/// Read a picked or dropped file into memory
pub async fn read_file(file: &web_sys::File) -> ApiResult<UploadFile> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::Validation(format!("Could not read file: {:?}", e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(UploadFile {
        name: file.name(),
        mime: file.type_(),
        bytes,
    })
}
