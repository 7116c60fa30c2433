//! View Hierarchy Page
//!
//! Interactive, searchable tree of every group with its contact counts.

use leptos::prelude::*;
use leptos::task::spawn_local;

use group_admin_core::{visible_rows, ExpansionState, Gateway, GroupTree};

use crate::components::{GroupTreeRow, StatCard};
use crate::context::use_app_context;
use crate::models::GroupId;

#[component]
pub fn ViewHierarchy() -> impl IntoView {
    let ctx = use_app_context();
    let tree = RwSignal::new(GroupTree::new());
    let expansion = RwSignal::new(ExpansionState::new());
    let (loading, set_loading) = signal(false);
    let (search, set_search) = signal(String::new());
    let (name_filter, set_name_filter) = signal(String::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Fetch on mount and on every refresh/filter
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let filter = name_filter.get_untracked();
        let gateway = ctx.gateway();
        set_loading.set(true);
        spawn_local(async move {
            let name = filter.trim();
            let name = if name.is_empty() { None } else { Some(name) };
            match gateway.hierarchy(name).await {
                Ok(forest) => {
                    tree.try_update(|tree| tree.load(forest));
                    if let Some(current) = tree.try_get_untracked() {
                        expansion.try_update(|state| state.retain_known(current.roots()));
                    }
                }
                Err(err) => {
                    log::warn!("[TREE] failed to load hierarchy: {}", err);
                    ctx.notify_error("Failed to load hierarchy", err.user_message());
                }
            }
            set_loading.set(false);
        });
    });

    let summary = Memo::new(move |_| tree.with(|tree| tree.summary()));
    let total_groups = Signal::derive(move || Some(summary.get().nodes as u64));
    let total_contacts = Signal::derive(move || Some(summary.get().contacts));
    let root_groups = Signal::derive(move || Some(summary.get().roots as u64));

    let rows = Memo::new(move |_| {
        let term = search.get();
        expansion.with(|state| tree.with(|tree| visible_rows(tree.roots(), state, &term)))
    });

    let toggle = Callback::new(move |id: GroupId| {
        expansion.update(|state| {
            let open = state.toggle(&id);
            log::debug!("[TREE] {} {}", id, if open { "expanded" } else { "collapsed" });
        });
    });

    let refresh = move || set_reload_trigger.update(|n| *n += 1);

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Group Hierarchy"</h1>
                <p>"Browse groups, subgroups and their contacts"</p>
            </div>

            <div class="stat-grid">
                <StatCard title="Total Groups" icon="🌲" color="blue" value=total_groups />
                <StatCard title="Total Contacts" icon="👥" color="green" value=total_contacts />
                <StatCard title="Root Groups" icon="📁" color="purple" value=root_groups />
            </div>

            <div class="card">
                <div class="toolbar">
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Search groups..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        class="filter-input"
                        placeholder="Group name"
                        prop:value=move || name_filter.get()
                        on:input=move |ev| set_name_filter.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                refresh();
                            }
                        }
                    />
                    <button class="btn" disabled=move || loading.get() on:click=move |_| refresh()>
                        "Filter"
                    </button>
                    <button class="btn" disabled=move || loading.get() on:click=move |_| {
                        expansion.update(|state| state.collapse_all());
                        refresh();
                    }>
                        {move || if loading.get() { "⟳ Loading..." } else { "⟳ Refresh" }}
                    </button>
                </div>

                <Show
                    when=move || !rows.with(|rows| rows.is_empty())
                    fallback=move || view! {
                        <div class="empty-state">
                            {move || if loading.get() {
                                "Loading groups..."
                            } else if tree.with(|tree| tree.is_empty()) {
                                "No groups found. Upload a group structure to get started."
                            } else {
                                "No groups match your search."
                            }}
                        </div>
                    }
                >
                    <div class="tree-view">
                        <For
                            each=move || rows.get()
                            key=|row| (row.id.clone(), row.depth, row.expanded, row.self_match, row.contact_count)
                            children=move |row| view! { <GroupTreeRow row=row on_toggle=toggle /> }
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}
