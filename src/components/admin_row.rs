//! Admin Row Component
//!
//! One dashboard table row: name with dimmed description, category badge,
//! price, the availability toggle, and the edit action.

use leptos::prelude::*;

use crate::catalog::format_price;
use crate::models::MenuItem;

#[component]
pub fn AdminRow(
    item: MenuItem,
    #[prop(into)] on_toggle: Callback<(String, bool)>,
    #[prop(into)] on_edit: Callback<MenuItem>,
) -> impl IntoView {
    let id = item.id.clone().unwrap_or_default();
    let available = item.available;
    let edit_item = item.clone();

    view! {
        <tr class="admin-row">
            <td>
                <div class="admin-item-name">{item.name}</div>
                <div class="admin-item-description">{item.description}</div>
            </td>
            <td>
                <span class="category-badge">{item.category}</span>
            </td>
            <td>{format!("${}", format_price(item.price))}</td>
            <td>
                <button
                    class=if available { "toggle-btn on" } else { "toggle-btn" }
                    on:click=move |_| on_toggle.run((id.clone(), available))
                >
                    <span class="toggle-knob"></span>
                </button>
                <span class="status-label">
                    {if available { "Available" } else { "Sold Out" }}
                </span>
            </td>
            <td>
                <button class="edit-btn" on:click=move |_| on_edit.run(edit_item.clone())>
                    "Edit"
                </button>
            </td>
        </tr>
    }
}
