//! UI Components
//!
//! Leptos components for the public menu and the admin dashboard.

mod admin_row;
mod admin_view;
mod category_filter;
mod item_form;
mod menu_view;
mod notice_bar;

pub use admin_row::AdminRow;
pub use admin_view::AdminView;
pub use category_filter::CategoryFilter;
pub use item_form::ItemFormModal;
pub use menu_view::MenuView;
pub use notice_bar::NoticeBar;
