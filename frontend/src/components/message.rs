use leptos::prelude::*;

use crate::models::{Message, TextFormat};

/// A single entry of the message log.
#[component]
pub fn MessageEntry(message: Message) -> impl IntoView {
    let classes = message.css_classes();

    match message.format {
        TextFormat::Markup => view! {
            <div class=classes inner_html=message.text></div>
        }
        .into_any(),
        TextFormat::Plain => view! {
            <div class=classes>{message.text}</div>
        }
        .into_any(),
    }
}
