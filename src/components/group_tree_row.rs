//! Group Tree Row Component
//!
//! Individual group in the hierarchy view.

use leptos::prelude::*;

use crate::models::{GroupId, TreeRow};

/// A single group row in the tree
#[component]
pub fn GroupTreeRow(
    row: TreeRow,
    #[prop(into)] on_toggle: Callback<GroupId>,
) -> impl IntoView {
    let indent = row.depth * 20 + 8;
    let id = row.id.clone();

    view! {
        <div
            class=if row.self_match { "group-row highlighted" } else { "group-row" }
            style=format!("padding-left: {}px;", indent)
        >
            // Expand toggle
            {if row.has_children {
                view! {
                    <button class="collapse-btn" on:click=move |_| on_toggle.run(id.clone())>
                        {if row.expanded { "▼" } else { "▶" }}
                    </button>
                }.into_any()
            } else {
                view! { <span class="collapse-placeholder"></span> }.into_any()
            }}

            <span class="group-icon">{if row.has_children { "📁" } else { "👥" }}</span>
            <span class="group-name">{row.name}</span>

            {row.contact_count.map(|count| view! {
                <span class="contact-badge">
                    {format!("{} contact{}", count, if count == 1 { "" } else { "s" })}
                </span>
            })}
        </div>
    }
}
