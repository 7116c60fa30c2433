//! Upload Contacts Page
//!
//! Attach the contacts of a spreadsheet to one chosen group.

use leptos::prelude::*;
use leptos::task::spawn_local;

use group_admin_core::{flatten, validate_spreadsheet, Gateway, UploadFile};

use crate::components::{FileDropZone, GroupPicker};
use crate::context::use_app_context;
use crate::models::{FlatGroup, GroupId};

#[component]
pub fn UploadContacts() -> impl IntoView {
    let ctx = use_app_context();
    let (groups, set_groups) = signal(Vec::<FlatGroup>::new());
    let (selected, set_selected) = signal::<Option<GroupId>>(None);
    let (file, set_file) = signal::<Option<UploadFile>>(None);
    let (uploading, set_uploading) = signal(false);

    // Load groups on mount
    Effect::new(move |_| {
        let gateway = ctx.gateway();
        spawn_local(async move {
            match gateway.hierarchy(None).await {
                Ok(forest) => set_groups.set(flatten(&forest)),
                Err(err) => {
                    log::warn!("[UPLOAD] failed to load groups: {}", err);
                    ctx.notify_error("Failed to load groups", err.user_message());
                }
            }
        });
    });

    let upload = move |_| {
        if uploading.get() {
            return;
        }
        let Some(group_id) = selected.get() else {
            ctx.notify_error("No group selected", "Choose the group these contacts belong to.");
            return;
        };
        let Some(chosen) = file.get() else { return };
        if let Err(err) = validate_spreadsheet(&chosen.name, &chosen.mime) {
            ctx.notify_error("Invalid file type", err.user_message());
            return;
        }

        set_uploading.set(true);
        let gateway = ctx.gateway();
        spawn_local(async move {
            match gateway.upload_contacts(&group_id, chosen).await {
                Ok(_) => {
                    ctx.notify_success("Success!", "Contacts uploaded successfully");
                    set_file.set(None);
                }
                Err(err) => {
                    log::warn!("[UPLOAD] contact upload into {} failed: {}", group_id, err);
                    ctx.notify_error("Upload failed", "Failed to upload contacts. Please try again.");
                }
            }
            set_uploading.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Upload Contacts"</h1>
                <p>"Upload an Excel file of contacts into a group"</p>
            </div>

            <div class="card">
                <h2 class="card-title">"👥 Contacts Upload"</h2>
                <label class="field-label">"Target Group *"</label>
                <GroupPicker
                    groups=groups
                    selected=selected
                    on_select=move |choice| set_selected.set(choice)
                />
                <FileDropZone file=file set_file=set_file />
                <div class="actions">
                    <button
                        class="btn primary"
                        disabled=move || {
                            file.with(|f| f.is_none()) || selected.with(|s| s.is_none()) || uploading.get()
                        }
                        on:click=upload
                    >
                        {move || if uploading.get() { "Uploading..." } else { "Upload Contacts" }}
                    </button>
                </div>
            </div>

            <div class="card">
                <h2 class="card-title">"ⓘ File Format Instructions"</h2>
                <ul>
                    <li>"Column: name"</li>
                    <li>"Column: phone"</li>
                    <li>"Contacts already known by phone number are added to the group, not duplicated."</li>
                </ul>
            </div>
        </div>
    }
}
