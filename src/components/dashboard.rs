//! Dashboard Page
//!
//! Aggregate counts and shortcuts to the other sections.

use leptos::prelude::*;
use leptos::task::spawn_local;

use group_admin_core::Gateway;

use crate::components::StatCard;
use crate::context::use_app_context;
use crate::models::{Section, Stats};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let (stats, set_stats) = signal::<Option<Stats>>(None);

    Effect::new(move |_| {
        let gateway = ctx.gateway();
        spawn_local(async move {
            match gateway.stats().await {
                Ok(loaded) => {
                    log::debug!("[APP] stats loaded: {:?}", loaded);
                    set_stats.set(Some(loaded));
                }
                Err(err) => {
                    log::warn!("[APP] failed to load stats: {}", err);
                    ctx.notify_error("Failed to load statistics", err.user_message());
                }
            }
        });
    });

    let total_groups = Signal::derive(move || stats.get().map(|s| s.total_groups));
    let total_contacts = Signal::derive(move || stats.get().map(|s| s.total_contacts));
    let total_messages = Signal::derive(move || stats.get().map(|s| s.total_messages));

    let shortcuts = [
        Section::UploadGroups,
        Section::UploadContacts,
        Section::ViewHierarchy,
        Section::SendMessages,
        Section::ViewMessages,
    ];

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Dashboard"</h1>
                <p>"Overview of groups, contacts and messages"</p>
            </div>

            <div class="stat-grid">
                <StatCard title="Total Groups" icon="🌲" color="blue" value=total_groups />
                <StatCard title="Total Contacts" icon="👥" color="green" value=total_contacts />
                <StatCard title="Messages Sent" icon="💬" color="purple" value=total_messages />
            </div>

            <div class="card">
                <h2 class="card-title">"Quick Actions"</h2>
                <div class="quick-actions">
                    {shortcuts.into_iter().map(|section| view! {
                        <button class="quick-action" on:click=move |_| ctx.navigate(section)>
                            <span class="quick-action-icon">{section.icon()}</span>
                            <span class="quick-action-title">{section.label()}</span>
                            <span class="quick-action-blurb">{section.blurb()}</span>
                        </button>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
