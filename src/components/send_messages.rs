//! Send Messages Page
//!
//! Compose a message and fan it out to a group and all its subgroups.

use leptos::prelude::*;
use leptos::task::spawn_local;

use group_admin_core::{find_flat, flatten, sms_kind, ComposeFlow, ComposePhase, Gateway};

use crate::components::{GroupPicker, PrioritySelector};
use crate::context::use_app_context;
use crate::models::{FlatGroup, Priority};

#[component]
pub fn SendMessages() -> impl IntoView {
    let ctx = use_app_context();
    let flow = RwSignal::new(ComposeFlow::new(ctx.default_expiry_days));
    let (groups, set_groups) = signal(Vec::<FlatGroup>::new());

    // Load groups on mount
    Effect::new(move |_| {
        let gateway = ctx.gateway();
        spawn_local(async move {
            match gateway.hierarchy(None).await {
                Ok(forest) => set_groups.set(flatten(&forest)),
                Err(err) => {
                    log::warn!("[COMPOSE] failed to load groups: {}", err);
                    ctx.notify_error("Failed to load groups", err.user_message());
                }
            }
        });
    });

    let content = Memo::new(move |_| flow.with(|f| f.draft.content.clone()));
    let selected = Signal::derive(move || flow.with(|f| f.draft.group.clone()));
    let priority = Signal::derive(move || flow.with(|f| f.draft.priority));
    let sending = Memo::new(move |_| flow.with(|f| f.is_sending()));
    let can_send = Memo::new(move |_| flow.with(|f| f.can_send()));

    let selected_info = Memo::new(move |_| {
        let id = selected.get()?;
        groups.with(|groups| find_flat(groups, &id).cloned())
    });

    let send = move |_| {
        let request = match flow.try_update(|f| f.begin_send()) {
            Some(Ok(request)) => request,
            Some(Err(err)) => {
                ctx.notify_error("Cannot send message", err.to_string());
                return;
            }
            None => return,
        };

        log::info!(
            "[COMPOSE] sending to group {} ({} priority, {} days)",
            request.group_id,
            request.priority.as_str(),
            request.expiry_days
        );
        let gateway = ctx.gateway();
        spawn_local(async move {
            let result = gateway.send_message(&request).await;
            match &result {
                Ok(receipt) => ctx.notify_success(
                    "Message sent!",
                    format!("Delivered to {} group(s) including subgroups", receipt.group_ids.len()),
                ),
                Err(_) => ctx.notify_error("Send failed", "Failed to send message. Please try again."),
            }
            flow.try_update(|f| f.finish(result));
        });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Send Messages"</h1>
                <p>"Send a message to a group and all of its subgroups"</p>
            </div>

            <div class="compose-layout">
                <div class="card">
                    <h2 class="card-title">"💬 Compose Message"</h2>

                    <label class="field-label">"Target Group *"</label>
                    <GroupPicker
                        groups=groups
                        selected=selected
                        on_select=move |choice| flow.update(|f| f.select_group(choice))
                        disabled=Signal::from(sending)
                    />
                    {move || selected_info.get().map(|info| view! {
                        <div class="selected-group">
                            <span class="selected-group-label">{info.label}</span>
                            <span class="contact-badge">{format!("{} contacts", info.contact_count)}</span>
                        </div>
                    })}

                    <label class="field-label">"Priority"</label>
                    <PrioritySelector
                        current=priority
                        on_change=move |p: Priority| flow.update(|f| f.set_priority(p))
                    />

                    <label class="field-label">"Expires after (days)"</label>
                    <input
                        type="number"
                        min="1"
                        class="expiry-input"
                        prop:value=move || flow.with(|f| f.draft.expiry_days.to_string())
                        on:input=move |ev| {
                            let days = event_target_value(&ev).trim().parse::<u32>().unwrap_or(0);
                            flow.update(|f| f.set_expiry_days(days));
                        }
                    />

                    <label class="field-label">"Message *"</label>
                    <textarea
                        class="message-input"
                        rows="6"
                        placeholder="Type your message..."
                        prop:value=move || content.get()
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            flow.update(|f| f.set_content(text));
                        }
                    ></textarea>
                    <div class="char-count">
                        {move || {
                            let text = content.get();
                            format!("{} characters · {}", text.chars().count(), sms_kind(&text).label())
                        }}
                    </div>

                    <div class="actions">
                        <button class="btn primary" disabled=move || !can_send.get() on:click=send>
                            {move || if sending.get() { "Sending..." } else { "Send Message" }}
                        </button>
                    </div>

                    {move || flow.with(|f| match &f.phase {
                        ComposePhase::Failed(reason) => Some(view! {
                            <p class="form-error">{reason.clone()}</p>
                        }),
                        _ => None,
                    })}
                </div>

                <div class="card preview-card">
                    <h2 class="card-title">"Preview"</h2>
                    <Show
                        when=move || !content.with(|c| c.trim().is_empty())
                        fallback=|| view! { <p class="empty-state">"Your message preview will appear here"</p> }
                    >
                        <div class=move || format!("message-bubble {}", priority.get().as_str())>
                            <div class="message-bubble-meta">
                                <span>{move || selected_info.get().map(|i| i.name).unwrap_or_else(|| "No group".to_string())}</span>
                                <span class=move || format!("priority-badge {}", priority.get().as_str())>
                                    {move || priority.get().label()}
                                </span>
                            </div>
                            <p class="message-bubble-text">{move || content.get()}</p>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
