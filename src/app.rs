//! Menu Board App
//!
//! Root component: constructs the store client, provides it and the admin
//! store via context, and switches between the public menu and the admin
//! dashboard.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::StoreClient;
use crate::components::{AdminView, MenuView, NoticeBar};
use crate::config::StoreConfig;
use crate::context::AppContext;
use crate::store::AdminState;

/// Top-level view selection
#[derive(Clone, Copy, PartialEq)]
enum ViewTab {
    Menu,
    Admin,
}

#[component]
pub fn App() -> impl IntoView {
    let (current_view, set_current_view) = signal(ViewTab::Menu);

    let config = StoreConfig::from_build_env();
    let client = StoreClient::new(&config);

    // Provide the injected client and the admin store to all children
    provide_context(AppContext::new(client));
    provide_context(Store::new(AdminState::default()));

    let tab_class = move |tab: ViewTab| {
        if current_view.get() == tab {
            "nav-tab active"
        } else {
            "nav-tab"
        }
    };

    view! {
        <div class="app-layout">
            <nav class="app-nav">
                <button
                    class=move || tab_class(ViewTab::Menu)
                    on:click=move |_| set_current_view.set(ViewTab::Menu)
                >
                    "Menu"
                </button>
                <button
                    class=move || tab_class(ViewTab::Admin)
                    on:click=move |_| set_current_view.set(ViewTab::Admin)
                >
                    "Admin"
                </button>
            </nav>

            <NoticeBar />

            {move || match current_view.get() {
                ViewTab::Menu => view! { <MenuView /> }.into_any(),
                ViewTab::Admin => view! { <AdminView /> }.into_any(),
            }}
        </div>
    }
}
