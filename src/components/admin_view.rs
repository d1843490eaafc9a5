//! Admin View Component
//!
//! Dashboard table over every menu item with toggle, edit and create.
//! The held list lives in the admin store; every confirmed mutation is
//! merged locally instead of re-fetching the whole table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::format_price;
use crate::components::{AdminRow, ItemFormModal};
use crate::context::AppContext;
use crate::models::MenuItem;
use crate::store::{
    store_apply_availability, store_replace_items, use_admin_store, AdminStateStoreFields,
};
use crate::sync::{MutationGuard, MutationOutcome};

#[component]
pub fn AdminView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_admin_store();

    let (loading, set_loading) = signal(true);
    let (editing, set_editing) = signal::<Option<MenuItem>>(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let guard = StoredValue::new(MutationGuard::default());

    // Load all items on mount and whenever a refresh is requested
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[ADMIN] Loading items, trigger={}", trigger).into());
        set_loading.set(true);
        let client = ctx.client();
        spawn_local(async move {
            match client.fetch_all().await {
                Ok(rows) => {
                    web_sys::console::log_1(&format!("[ADMIN] Loaded {} items", rows.len()).into());
                    store_replace_items(&store, rows);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[ADMIN] Error fetching items: {}", e).into(),
                    );
                }
            }
            set_loading.set(false);
        });
    });

    // Toggle availability; the guard discards responses overtaken by a
    // newer mutation on the same row.
    let toggle = move |(id, current): (String, bool)| {
        let Some(ticket) = guard.try_update_value(|g| g.issue(&id)) else {
            return;
        };
        let client = ctx.client();
        spawn_local(async move {
            let outcome = match client.set_availability(&id, !current).await {
                Ok(()) => {
                    let still_current = guard
                        .try_with_value(|g| g.is_current(&id, ticket))
                        .unwrap_or(false);
                    if still_current {
                        store_apply_availability(&store, &id, !current);
                        MutationOutcome::Applied
                    } else {
                        MutationOutcome::Stale
                    }
                }
                Err(e) => MutationOutcome::Failed(e.to_string()),
            };
            ctx.report("toggle availability", &outcome);
        });
    };

    view! {
        <div class="admin-view">
            <header class="admin-header">
                <div>
                    <h1>"Admin Dashboard"</h1>
                    <p>"Manage your restaurant menu items"</p>
                </div>
                <div class="admin-actions">
                    <button
                        class="refresh-btn"
                        on:click=move |_| set_reload_trigger.update(|n| *n += 1)
                    >
                        "Refresh Data"
                    </button>
                    <button
                        class="add-btn"
                        on:click=move |_| set_editing.set(Some(MenuItem::draft()))
                    >
                        "Add Item"
                    </button>
                </div>
            </header>

            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Category"</th>
                        <th>"Price"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        if loading.get() {
                            return view! {
                                <tr>
                                    <td colspan="5" class="admin-placeholder">"Loading menu items..."</td>
                                </tr>
                            }.into_any();
                        }
                        if store.items().get().is_empty() {
                            return view! {
                                <tr>
                                    <td colspan="5" class="admin-placeholder">"No menu items found."</td>
                                </tr>
                            }.into_any();
                        }
                        view! {
                            <For
                                each=move || store.items().get()
                                key=|item| {
                                    // Key on all mutable fields so merges cause re-render
                                    (
                                        item.id.clone(),
                                        item.name.clone(),
                                        item.description.clone(),
                                        item.category.clone(),
                                        format_price(item.price),
                                        item.available,
                                    )
                                }
                                children=move |item| {
                                    view! {
                                        <AdminRow
                                            item=item
                                            on_toggle=toggle
                                            on_edit=move |it: MenuItem| set_editing.set(Some(it))
                                        />
                                    }
                                }
                            />
                        }.into_any()
                    }}
                </tbody>
            </table>

            {move || editing.get().map(|item| view! {
                <ItemFormModal item=item guard=guard set_editing=set_editing />
            })}
        </div>
    }
}
