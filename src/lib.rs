pub mod api;
pub mod config;
pub mod domain;
pub mod session;
pub mod ui_dioxus;
