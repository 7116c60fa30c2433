//! Group Picker Component
//!
//! Flat select over the whole hierarchy, labelled with the ancestry path.

use leptos::prelude::*;

use crate::models::{FlatGroup, GroupId};

#[component]
pub fn GroupPicker(
    #[prop(into)] groups: Signal<Vec<FlatGroup>>,
    #[prop(into)] selected: Signal<Option<GroupId>>,
    #[prop(into)] on_select: Callback<Option<GroupId>>,
    #[prop(optional)] disabled: Option<Signal<bool>>,
) -> impl IntoView {
    let disabled = disabled.unwrap_or_else(|| Signal::derive(|| false));

    view! {
        <select
            class="group-picker"
            disabled=move || disabled.get()
            prop:value=move || selected.get().map(|id| id.to_string()).unwrap_or_default()
            on:change=move |ev| {
                let value = event_target_value(&ev);
                let choice = if value.is_empty() { None } else { Some(GroupId::new(value)) };
                on_select.run(choice);
            }
        >
            <option value="">"Choose a group..."</option>
            <For
                each=move || groups.get()
                key=|group| group.id.clone()
                children=move |group| {
                    let value = group.id.to_string();
                    view! {
                        <option value=value>
                            {format!("{} ({} contacts)", group.label, group.contact_count)}
                        </option>
                    }
                }
            />
        </select>
    }
}
