//! Sidebar Component
//!
//! Section navigation. Collapses into a drawer on narrow screens.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Section;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let toggle_menu = move |_| {
        let open = !store.menu_open().get();
        *store.menu_open().write() = open;
    };

    view! {
        <button class="menu-toggle" title="Menu" on:click=toggle_menu>
            {move || if store.menu_open().get() { "✕" } else { "☰" }}
        </button>
        <Show when=move || store.menu_open().get()>
            <div class="sidebar-backdrop" on:click=move |_| *store.menu_open().write() = false></div>
        </Show>
        <aside class=move || if store.menu_open().get() { "sidebar open" } else { "sidebar" }>
            <div class="sidebar-brand">
                <h2>"Group Admin"</h2>
                <p>"Messaging dashboard"</p>
            </div>
            <nav class="sidebar-nav">
                {Section::ALL.iter().map(|section| {
                    let section = *section;
                    view! {
                        <button
                            class=move || if store.section().get() == section { "nav-item active" } else { "nav-item" }
                            on:click=move |_| ctx.navigate(section)
                        >
                            <span class="nav-icon">{section.icon()}</span>
                            <span class="nav-label">{section.label()}</span>
                        </button>
                    }
                }).collect_view()}
            </nav>
        </aside>
    }
}
