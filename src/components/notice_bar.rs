//! Notice Bar Component
//!
//! Transient, non-blocking banner for reported mutation failures.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.notice().map(|text| view! {
            <div class="notice-bar">{text}</div>
        })}
    }
}
