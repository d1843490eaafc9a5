//! Item Form Modal
//!
//! Create/edit form for a menu item. A draft (no id) inserts; a persisted
//! item patches its editable fields. A failed submit keeps the modal open
//! with a blocking alert so the admin can retry.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::ItemPatch;
use crate::catalog::{format_price, ITEM_CATEGORIES};
use crate::context::AppContext;
use crate::models::MenuItem;
use crate::store::{store_append_created, store_replace_item, use_admin_store};
use crate::sync::{MutationGuard, MutationOutcome};

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn ItemFormModal(
    item: MenuItem,
    guard: StoredValue<MutationGuard>,
    set_editing: WriteSignal<Option<MenuItem>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_admin_store();

    let is_draft = item.is_draft();
    let (name, set_name) = signal(item.name.clone());
    let (description, set_description) = signal(item.description.clone());
    let (price_input, set_price_input) = signal(format_price(item.price));
    let (category, set_category) = signal(item.category.clone());
    let base = StoredValue::new(item);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let trimmed = name.get().trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        let Ok(price) = price_input.get().trim().parse::<f64>() else {
            alert("Enter a valid price");
            return;
        };
        if price < 0.0 {
            alert("Price cannot be negative");
            return;
        }

        let edited = MenuItem {
            name: trimmed,
            description: description.get(),
            price,
            category: category.get(),
            ..base.get_value()
        };

        let client = ctx.client();
        spawn_local(async move {
            if let Some(id) = edited.id.clone() {
                // Persisted row: patch the editable fields
                let Some(ticket) = guard.try_update_value(|g| g.issue(&id)) else {
                    return;
                };
                let patch = ItemPatch {
                    name: &edited.name,
                    description: &edited.description,
                    price: edited.price,
                    category: &edited.category,
                };
                match client.update_item(&id, &patch).await {
                    Ok(()) => {
                        let still_current = guard
                            .try_with_value(|g| g.is_current(&id, ticket))
                            .unwrap_or(false);
                        let outcome = if still_current {
                            store_replace_item(&store, &edited);
                            MutationOutcome::Applied
                        } else {
                            MutationOutcome::Stale
                        };
                        ctx.report("update item", &outcome);
                        set_editing.set(None);
                    }
                    Err(e) => {
                        ctx.report("update item", &MutationOutcome::Failed(e.to_string()));
                        alert(&format!("Error updating item: {}", e));
                    }
                }
            } else {
                // Draft: insert and append whatever the store returns
                match client.insert_item(&edited).await {
                    Ok(rows) => {
                        store_append_created(&store, rows);
                        ctx.report("create item", &MutationOutcome::Applied);
                        set_editing.set(None);
                    }
                    Err(e) => {
                        ctx.report("create item", &MutationOutcome::Failed(e.to_string()));
                        alert(&format!("Error creating item: {}", e));
                    }
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>{if is_draft { "Add Item" } else { "Edit Item" }}</h2>
                <form on:submit=submit>
                    <div class="form-field">
                        <label>"Item Name"</label>
                        <input
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label>"Description"</label>
                        <textarea
                            prop:value=move || description.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                set_description.set(input.value());
                            }
                        ></textarea>
                    </div>
                    <div class="form-field">
                        <label>"Price ($)"</label>
                        <input
                            type="number"
                            step="0.01"
                            min="0"
                            required
                            prop:value=move || price_input.get()
                            on:input=move |ev| set_price_input.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label>"Category"</label>
                        <select on:change=move |ev| set_category.set(event_target_value(&ev))>
                            {ITEM_CATEGORIES.iter().map(|&label| {
                                view! {
                                    <option value=label selected=move || category.get() == label>
                                        {label}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-buttons">
                        <button type="button" class="cancel-btn" on:click=move |_| set_editing.set(None)>
                            "Cancel"
                        </button>
                        <button type="submit" class="save-btn">
                            {if is_draft { "Create Item" } else { "Save Changes" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
