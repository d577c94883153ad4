use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::BrowserWidget;
use super::message::MessageEntry;
use crate::api::HttpEndpoint;
use crate::config::WidgetConfig;
use crate::controller::ChatWidget;
use crate::state::WidgetState;

/// Root of the widget: builds the controller and provides it to the
/// launcher and the panel.
#[component]
pub fn ChatWidgetRoot(config: WidgetConfig) -> impl IntoView {
    let state = RwSignal::new(WidgetState::new());
    let endpoint = HttpEndpoint::new(config.endpoint_url.clone());
    log::debug!("Chat widget talking to {}", endpoint.url());

    provide_context::<BrowserWidget>(ChatWidget::new(state, endpoint, config));

    view! {
        <Launcher />
        <ChatPanel />
    }
}

/// Runs a send on the browser event loop.
fn submit(widget: BrowserWidget) {
    spawn_local(async move {
        widget.send().await;
    });
}

/// The always-present control that opens the panel.
#[component]
fn Launcher() -> impl IntoView {
    let widget = expect_context::<BrowserWidget>();
    let state = *widget.store();
    let is_open = Memo::new(move |_| state.with(WidgetState::is_open));

    view! {
        <button
            id="chat-bubble"
            type="button"
            aria-label="Abrir chat"
            style:display=move || if is_open.get() { "none" } else { "flex" }
            on:click=move |_| widget.open()
        >
            "💬"
        </button>
    }
}

/// The chat window: header with close control, message log and input row.
#[component]
fn ChatPanel() -> impl IntoView {
    let widget = expect_context::<BrowserWidget>();
    let state = *widget.store();

    let log_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let is_open = Memo::new(move |_| state.with(WidgetState::is_open));
    let newest = Memo::new(move |_| state.with(WidgetState::last_message_id));

    // Focus the input each time the panel opens.
    Effect::new(move || {
        if is_open.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    // Keep the newest entry in view.
    Effect::new(move || {
        let _ = newest.get();
        if let Some(el) = log_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let on_close = {
        let widget = widget.clone();
        move |_| widget.close()
    };

    let on_input = {
        let widget = widget.clone();
        move |ev: ev::Event| widget.set_input(event_target_value(&ev))
    };

    let on_keydown = {
        let widget = widget.clone();
        move |ev: ev::KeyboardEvent| {
            if widget.is_submit_key(&ev.key()) {
                ev.prevent_default();
                submit(widget.clone());
            }
        }
    };

    let on_send = move |_| submit(widget.clone());

    view! {
        <div id="chat-window" class="chat-window" class:active=move || is_open.get()>
            <div class="chat-header">
                <span class="chat-title">"Novembro Azul"</span>
                <button
                    id="chat-close-btn"
                    type="button"
                    aria-label="Fechar chat"
                    on:click=on_close
                >
                    "×"
                </button>
            </div>

            <div id="chat-messages" class="chat-messages" node_ref=log_ref>
                <For
                    each=move || state.with(|s| s.messages().to_vec())
                    key=|m| m.id
                    let:message
                >
                    <MessageEntry message=message />
                </For>
            </div>

            <div class="chat-input-row">
                <input
                    id="chat-input"
                    type="text"
                    autocomplete="off"
                    placeholder="Digite sua mensagem..."
                    node_ref=input_ref
                    prop:value=move || state.with(|s| s.input().to_string())
                    on:input=on_input
                    on:keydown=on_keydown
                />
                <button id="chat-send-btn" type="button" on:click=on_send>
                    "Enviar"
                </button>
            </div>
        </div>
    }
}
