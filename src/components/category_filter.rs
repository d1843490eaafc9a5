//! Category Filter Component
//!
//! Filter chip row for the public menu view.

use leptos::prelude::*;

use crate::catalog::FILTER_LABELS;

/// Category chips; the "All" chip bypasses filtering
#[component]
pub fn CategoryFilter(
    active: ReadSignal<String>,
    on_select: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="category-filter">
            {FILTER_LABELS.iter().map(|&label| {
                let is_active = move || active.get() == label;
                view! {
                    <button
                        class=move || if is_active() { "filter-chip active" } else { "filter-chip" }
                        on:click=move |_| on_select(label.to_string())
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
