//! Toast Host Component
//!
//! Renders the notice board kept in the app store.

use leptos::prelude::*;

use group_admin_core::NoticeKind;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    view! {
        <div class="toast-host">
            <For
                each=move || store.notices().read().items().to_vec()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let class = match notice.kind {
                        NoticeKind::Success => "toast success",
                        NoticeKind::Error => "toast error",
                    };
                    view! {
                        <div class=class role="status">
                            <div class="toast-body">
                                <div class="toast-title">{notice.title}</div>
                                <div class="toast-description">{notice.description}</div>
                            </div>
                            <button class="toast-close" title="Dismiss" on:click=move |_| ctx.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
