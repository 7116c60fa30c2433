//! File Drop Zone Component
//!
//! Drag-and-drop target plus file picker for spreadsheet uploads.
//! Non-spreadsheet files are rejected before they are read.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::DragEvent;

use group_admin_core::{format_megabytes, validate_spreadsheet, UploadFile};

use crate::api;
use crate::context::use_app_context;

/// Drop zone showing either a prompt or the chosen file
#[component]
pub fn FileDropZone(
    /// Currently chosen file
    file: ReadSignal<Option<UploadFile>>,
    /// Receives the accepted file, or None when removed
    set_file: WriteSignal<Option<UploadFile>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (drag_active, set_drag_active) = signal(false);

    let accept = move |picked: web_sys::File| {
        if let Err(err) = validate_spreadsheet(&picked.name(), &picked.type_()) {
            ctx.notify_error("Invalid file type", err.user_message());
            return;
        }
        spawn_local(async move {
            match api::read_file(&picked).await {
                Ok(upload) => set_file.set(Some(upload)),
                Err(err) => ctx.notify_error("Could not read file", err.user_message()),
            }
        });
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);
        let dropped = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        if let Some(dropped) = dropped {
            accept(dropped);
        }
    };

    let on_pick = move |ev: web_sys::Event| {
        let picked = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(picked) = picked {
            accept(picked);
        }
    };

    view! {
        <div
            class=move || if drag_active.get() { "drop-area active" } else { "drop-area" }
            on:dragenter=on_dragover
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            {move || match file.get() {
                Some(chosen) => view! {
                    <div class="drop-area-file">
                        <div class="drop-area-icon ok">"✔ 📊"</div>
                        <p class="drop-area-name">{chosen.name.clone()}</p>
                        <p class="drop-area-hint">{format_megabytes(chosen.size() as u64)}</p>
                        <button class="btn outline" on:click=move |_| set_file.set(None)>
                            "Remove File"
                        </button>
                    </div>
                }.into_any(),
                None => view! {
                    <div class="drop-area-prompt">
                        <div class="drop-area-icon">"⬆ 📊"</div>
                        <p class="drop-area-name">"Drop your Excel file here"</p>
                        <p class="drop-area-hint">"or click to browse files"</p>
                        <input
                            type="file"
                            accept=".xlsx,.xls"
                            class="drop-area-input"
                            on:change=on_pick
                        />
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
