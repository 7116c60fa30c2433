//! Group Admin Frontend App
//!
//! Sidebar layout; the main area switches between sections in memory.

use leptos::prelude::*;
use reactive_stores::Store;
use group_admin_core::DashboardConfig;

use crate::components::{
    Dashboard, SendMessages, Sidebar, ToastHost, UploadContacts, UploadGroups, ViewHierarchy,
    ViewMessages,
};
use crate::context::AppContext;
use crate::models::Section;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);
    provide_context(AppContext::new(&config, store));

    view! {
        <div class="app-layout">
            <Sidebar />

            <main class="main-content">
                {move || match store.section().get() {
                    Section::Dashboard => view! { <Dashboard /> }.into_any(),
                    Section::UploadGroups => view! { <UploadGroups /> }.into_any(),
                    Section::UploadContacts => view! { <UploadContacts /> }.into_any(),
                    Section::ViewHierarchy => view! { <ViewHierarchy /> }.into_any(),
                    Section::SendMessages => view! { <SendMessages /> }.into_any(),
                    Section::ViewMessages => view! { <ViewMessages /> }.into_any(),
                }}
            </main>

            <ToastHost />
        </div>
    }
}
