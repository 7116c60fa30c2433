//! Message Row Component
//!
//! One history record, either read-only or as an inline edit form.

use leptos::prelude::*;

use group_admin_core::MessageHistory;

use crate::components::{DeleteConfirmButton, PrioritySelector};
use crate::models::{MessageId, MessageRecord, Priority};

#[component]
pub fn MessageRow(
    record: MessageRecord,
    history: RwSignal<MessageHistory>,
    #[prop(into)] on_delete: Callback<MessageId>,
    #[prop(into)] on_save: Callback<()>,
) -> impl IntoView {
    let id = record.id;
    let is_editing = Memo::new(move |_| history.with(|h| h.editing().map(|d| d.id) == Some(id)));
    let deleting = Signal::derive(move || history.with(|h| h.is_deleting(id)));
    let saving = Signal::derive(move || history.with(|h| h.is_saving()));

    let draft_priority = Signal::derive(move || {
        history.with(|h| h.editing().map(|d| d.priority).unwrap_or_default())
    });

    let start_edit = move |_| {
        history.update(|h| {
            if let Err(err) = h.begin_edit(id) {
                log::warn!("[HISTORY] cannot edit {}: {}", id, err);
            }
        });
    };

    let MessageRecord { group, content, priority, expiry, timestamp, .. } = record;
    let kind = group_admin_core::sms_kind(&content).label();

    view! {
        <div class="message-row">
            <Show
                when=move || is_editing.get()
                fallback=move || {
                    let content = content.clone();
                    view! {
                        <div class="message-row-header">
                            <span class="message-group">{group.clone()}</span>
                            <span class=format!("priority-badge {}", priority.as_str())>{priority.label()}</span>
                            <span class="message-kind">{kind}</span>
                            <div class="message-row-actions">
                                <button class="edit-btn" title="Edit" disabled=move || deleting.get() on:click=start_edit>
                                    "✎"
                                </button>
                                <DeleteConfirmButton
                                    button_class="delete-btn"
                                    busy=deleting
                                    on_confirm=move |_| on_delete.run(id)
                                />
                            </div>
                        </div>
                        <p class="message-content">{content}</p>
                        <div class="message-meta">
                            <span>{format!("Sent: {}", timestamp)}</span>
                            <span>{format!("Expires: {}", expiry)}</span>
                        </div>
                    }
                }
            >
                <div class="message-edit">
                    <textarea
                        class="message-input"
                        rows="4"
                        prop:value=move || history.with(|h| h.editing().map(|d| d.content.clone()).unwrap_or_default())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            history.update(|h| {
                                if let Some(draft) = h.editing_mut() {
                                    draft.content = text;
                                }
                            });
                        }
                    ></textarea>
                    <PrioritySelector
                        current=draft_priority
                        on_change=move |p: Priority| history.update(|h| {
                            if let Some(draft) = h.editing_mut() {
                                draft.priority = p;
                            }
                        })
                    />
                    <input
                        type="text"
                        class="expiry-input"
                        placeholder="YYYY-MM-DD HH:MM"
                        prop:value=move || history.with(|h| h.editing().map(|d| d.expiry.clone()).unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            history.update(|h| {
                                if let Some(draft) = h.editing_mut() {
                                    draft.expiry = value;
                                }
                            });
                        }
                    />
                    <div class="actions">
                        <button class="btn primary" disabled=move || saving.get() on:click=move |_| on_save.run(())>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                        <button class="btn" disabled=move || saving.get() on:click=move |_| history.update(|h| h.cancel_edit())>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
