//! Upload Groups Page
//!
//! Spreadsheet upload that creates root groups and nested subgroups.

use leptos::prelude::*;
use leptos::task::spawn_local;

use group_admin_core::{validate_spreadsheet, Gateway, UploadFile};

use crate::components::FileDropZone;
use crate::context::use_app_context;

#[component]
pub fn UploadGroups() -> impl IntoView {
    let ctx = use_app_context();
    let (file, set_file) = signal::<Option<UploadFile>>(None);
    let (uploading, set_uploading) = signal(false);

    let upload = move |_| {
        if uploading.get() {
            return;
        }
        let Some(chosen) = file.get() else { return };
        if let Err(err) = validate_spreadsheet(&chosen.name, &chosen.mime) {
            ctx.notify_error("Invalid file type", err.user_message());
            return;
        }

        set_uploading.set(true);
        let gateway = ctx.gateway();
        spawn_local(async move {
            match gateway.upload_groups(chosen).await {
                Ok(_) => {
                    ctx.notify_success("Success!", "Groups uploaded successfully");
                    set_file.set(None);
                }
                Err(err) => {
                    log::warn!("[UPLOAD] group upload failed: {}", err);
                    ctx.notify_error("Upload failed", "Failed to upload groups. Please try again.");
                }
            }
            set_uploading.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Upload Groups"</h1>
                <p>"Upload Excel files to create main groups and nested subgroups"</p>
            </div>

            <div class="card">
                <h2 class="card-title">"⬆ Group Structure Upload"</h2>
                <FileDropZone file=file set_file=set_file />
                <div class="actions">
                    <button
                        class="btn primary"
                        disabled=move || file.with(|f| f.is_none()) || uploading.get()
                        on:click=upload
                    >
                        {move || if uploading.get() { "Uploading..." } else { "Upload Groups" }}
                    </button>
                </div>
            </div>

            <div class="card">
                <h2 class="card-title">"ⓘ File Format Instructions"</h2>
                <h3>"Excel File Structure:"</h3>
                <ul>
                    <li>"Column A: group_name"</li>
                    <li>"Column B: parent_name"</li>
                    <li>"For root-level groups, leave " <strong>"parent_name"</strong> " empty."</li>
                </ul>
                <p class="note">
                    <strong>"Note: "</strong>
                    "The system will automatically create a hierarchical structure based on your Excel data."
                </p>
            </div>
        </div>
    }
}
