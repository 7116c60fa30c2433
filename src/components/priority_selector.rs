//! Priority Selector Component
//!
//! Reusable message priority buttons.

use leptos::prelude::*;

use crate::models::Priority;

/// Priority buttons for composing or editing a message
#[component]
pub fn PrioritySelector(
    #[prop(into)] current: Signal<Priority>,
    on_change: impl Fn(Priority) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="priority-selector">
            {Priority::ALL.iter().map(|priority| {
                let priority = *priority;
                let is_selected = move || current.get() == priority;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() {
                            format!("priority-btn {} active", priority.as_str())
                        } else {
                            format!("priority-btn {}", priority.as_str())
                        }
                        on:click=move |_| on_change(priority)
                    >
                        {priority.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
