//! Contact Lookup Component
//!
//! Unexpired messages that reach one phone number.

use leptos::prelude::*;
use leptos::task::spawn_local;

use group_admin_core::Gateway;

use crate::context::use_app_context;
use crate::models::MessageRecord;

#[component]
pub fn ContactLookup() -> impl IntoView {
    let ctx = use_app_context();
    let (phone, set_phone) = signal(String::new());
    let (results, set_results) = signal::<Option<Vec<MessageRecord>>>(None);
    let (searching, set_searching) = signal(false);

    let lookup = move || {
        let number = phone.get().trim().to_string();
        if number.is_empty() || searching.get() {
            return;
        }
        set_searching.set(true);
        let gateway = ctx.gateway();
        spawn_local(async move {
            match gateway.messages_for_contact(&number).await {
                Ok(found) => {
                    log::debug!("[HISTORY] {} message(s) for {}", found.len(), number);
                    set_results.set(Some(found));
                }
                Err(err) => {
                    log::warn!("[HISTORY] contact lookup failed: {}", err);
                    ctx.notify_error("Lookup failed", err.user_message());
                    set_results.set(None);
                }
            }
            set_searching.set(false);
        });
    };

    view! {
        <div class="card">
            <h2 class="card-title">"📱 Messages for a Contact"</h2>
            <div class="toolbar">
                <input
                    type="tel"
                    class="search-input"
                    placeholder="Phone number"
                    prop:value=move || phone.get()
                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            lookup();
                        }
                    }
                />
                <button class="btn" disabled=move || searching.get() on:click=move |_| lookup()>
                    {move || if searching.get() { "Searching..." } else { "Look up" }}
                </button>
            </div>
            {move || results.get().map(|found| {
                if found.is_empty() {
                    view! { <p class="empty-state">"No active messages for this contact."</p> }.into_any()
                } else {
                    view! {
                        <ul class="contact-messages">
                            {found.into_iter().map(|record| view! {
                                <li>
                                    <span class=format!("priority-badge {}", record.priority.as_str())>
                                        {record.priority.label()}
                                    </span>
                                    <span class="message-group">{record.group}</span>
                                    <span class="message-content">{record.content}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    }.into_any()
                }
            })}
        </div>
    }
}
