//! View Messages Page
//!
//! Sent message history with search, inline edit and delete.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use group_admin_core::{Gateway, MessageHistory, RECENT_DAYS};

use crate::components::{ContactLookup, MessageRow, StatCard};
use crate::context::use_app_context;
use crate::models::MessageId;

#[component]
pub fn ViewMessages() -> impl IntoView {
    let ctx = use_app_context();
    let history = RwSignal::new(MessageHistory::new());
    let (loading, set_loading) = signal(false);
    let (search, set_search) = signal(String::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let gateway = ctx.gateway();
        set_loading.set(true);
        spawn_local(async move {
            match gateway.message_history().await {
                Ok(records) => {
                    log::info!("[HISTORY] loaded {} message(s)", records.len());
                    history.try_update(|h| h.replace(records));
                }
                Err(err) => {
                    log::warn!("[HISTORY] failed to load messages: {}", err);
                    ctx.notify_error("Failed to load messages", err.user_message());
                }
            }
            set_loading.set(false);
        });
    });

    let total = Signal::derive(move || Some(history.with(|h| h.len()) as u64));
    let recent = Signal::derive(move || {
        let now = Utc::now().naive_utc();
        Some(history.with(|h| h.recent_count(now, RECENT_DAYS)) as u64)
    });

    let filtered = Memo::new(move |_| {
        let term = search.get();
        history.with(|h| h.filter(term.trim()).into_iter().cloned().collect::<Vec<_>>())
    });

    let delete = Callback::new(move |id: MessageId| {
        let started = history.try_update(|h| h.begin_delete(id));
        let id = match started {
            Some(Ok(id)) => id,
            Some(Err(err)) => {
                ctx.notify_error("Cannot delete message", err.to_string());
                return;
            }
            None => return,
        };
        let gateway = ctx.gateway();
        spawn_local(async move {
            let result = gateway.delete_message(id).await;
            match history.try_update(|h| h.finish_delete(id, result)) {
                Some(Ok(())) => ctx.notify_success("Message deleted", "The message was removed for all recipients."),
                Some(Err(err)) => ctx.notify_error("Delete failed", err.user_message()),
                None => {}
            }
        });
    });

    let save = Callback::new(move |_: ()| {
        let (id, update) = match history.try_update(|h| h.begin_save()) {
            Some(Ok(pending)) => pending,
            Some(Err(err)) => {
                ctx.notify_error("Cannot save message", err.to_string());
                return;
            }
            None => return,
        };
        let gateway = ctx.gateway();
        spawn_local(async move {
            let result = gateway.update_message(id, &update).await;
            match history.try_update(|h| h.finish_save(id, &update, result)) {
                Some(Ok(())) => ctx.notify_success("Message updated", "Your changes were saved."),
                Some(Err(err)) => ctx.notify_error("Update failed", err.user_message()),
                None => {}
            }
        });
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Message History"</h1>
                <p>"Review, edit and delete sent messages"</p>
            </div>

            <div class="stat-grid">
                <StatCard title="Total Messages" icon="💬" color="blue" value=total />
                <StatCard title="Last 7 Days" icon="🕘" color="green" value=recent />
            </div>

            <div class="card">
                <div class="toolbar">
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Search messages or groups..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <button
                        class="btn"
                        disabled=move || loading.get()
                        on:click=move |_| set_reload_trigger.update(|n| *n += 1)
                    >
                        {move || if loading.get() { "⟳ Loading..." } else { "⟳ Refresh" }}
                    </button>
                </div>

                <p class="note warning">
                    "⚠ Deleting a message removes it for every recipient and cannot be undone."
                </p>

                <Show
                    when=move || !filtered.with(|records| records.is_empty())
                    fallback=move || view! {
                        <div class="empty-state">
                            {move || if loading.get() {
                                "Loading messages..."
                            } else if history.with(|h| h.is_empty()) {
                                "No messages sent yet."
                            } else {
                                "No messages match your search."
                            }}
                        </div>
                    }
                >
                    <div class="message-list">
                        <For
                            each=move || filtered.get()
                            key=|record| (
                                record.id,
                                record.content.clone(),
                                record.priority,
                                record.expiry.clone(),
                            )
                            children=move |record| view! {
                                <MessageRow record=record history=history on_delete=delete on_save=save />
                            }
                        />
                    </div>
                </Show>
            </div>

            <ContactLookup />
        </div>
    }
}
