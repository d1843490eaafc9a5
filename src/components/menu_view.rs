//! Menu View Component
//!
//! Public, read-only menu: loads available items once on display and
//! filters them client-side by category.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::{filter_by_category, format_price, ALL_LABEL};
use crate::components::CategoryFilter;
use crate::context::AppContext;
use crate::models::MenuItem;

#[component]
pub fn MenuView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (items, set_items) = signal(Vec::<MenuItem>::new());
    let (loading, set_loading) = signal(true);
    let (active_category, set_active_category) = signal(ALL_LABEL.to_string());

    // Load available items on mount
    Effect::new(move |_| {
        let client = ctx.client();
        spawn_local(async move {
            match client.fetch_available().await {
                Ok(rows) => {
                    web_sys::console::log_1(&format!("[MENU] Loaded {} items", rows.len()).into());
                    set_items.set(rows);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[MENU] Error fetching menu: {}", e).into());
                }
            }
            set_loading.set(false);
        });
    });

    let filtered = move || filter_by_category(&items.get(), &active_category.get());

    view! {
        <div class="menu-view">
            <header class="menu-header">
                <h1>"Our Menu"</h1>
                <p>"Freshly prepared, locally sourced ingredients."</p>
            </header>

            <CategoryFilter
                active=active_category
                on_select=move |label: String| set_active_category.set(label)
            />

            <main class="menu-content">
                {move || {
                    if loading.get() {
                        return view! {
                            <div class="menu-loading">"Loading menu..."</div>
                        }.into_any();
                    }
                    if filtered().is_empty() {
                        return view! {
                            <div class="menu-empty">
                                <p>"No items available in this category at the moment."</p>
                            </div>
                        }.into_any();
                    }
                    view! {
                        <div class="menu-grid">
                            <For
                                each=filtered
                                key=|item| item.id.clone()
                                children=move |item| {
                                    view! {
                                        <div class="menu-card">
                                            <div class="menu-card-top">
                                                <h3>{item.name}</h3>
                                                <span class="menu-price">
                                                    {format!("${}", format_price(item.price))}
                                                </span>
                                            </div>
                                            <p class="menu-description">{item.description}</p>
                                            <span class="menu-category">{item.category}</span>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    }.into_any()
                }}
            </main>

            <footer class="menu-footer">
                <p>"Menu items and prices are subject to change based on seasonality and availability."</p>
            </footer>
        </div>
    }
}
