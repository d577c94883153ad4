//! Toggleable chat widget: a launcher that opens a panel, a message log and
//! an input that sends each message to a chatbot endpoint.
//!
//! `state` and `controller` hold all behaviour and have no DOM access;
//! `components` renders the state with Leptos and forwards DOM events.

pub mod api;
pub mod components;
pub mod config;
pub mod controller;
pub mod errors;
pub mod models;
pub mod state;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::widget::ChatWidgetRoot;
use config::WidgetConfig;

/// Mounts the widget at the end of `<body>`.
pub fn mount(config: WidgetConfig) {
    mount_to_body(move || view! { <ChatWidgetRoot config=config.clone() /> });
}
