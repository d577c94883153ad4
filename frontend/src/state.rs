#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::errors::ChatError;
use crate::models::{Message, MessageId, MessageKind, Sender, TextFormat};

/// Visibility of the chat panel. The launcher is visible exactly when the
/// panel is closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Closed,
    Open,
}

/// Everything the widget knows, for the lifetime of the page.
///
/// Plain data with no DOM access: the Leptos view renders it, the
/// controller mutates it through a [`WidgetStore`].
#[derive(Clone, Debug, Default)]
pub struct WidgetState {
    panel: Panel,
    has_greeted: bool,
    input: String,
    messages: Vec<Message>,
    next_id: MessageId,
}

/// A send that has been started and is waiting for the endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSend {
    /// Trimmed text that was sent.
    pub message: String,
    pub placeholder: MessageId,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn is_open(&self) -> bool {
        self.panel == Panel::Open
    }

    pub fn has_greeted(&self) -> bool {
        self.has_greeted
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_message_id(&self) -> Option<MessageId> {
        self.messages.last().map(|m| m.id)
    }

    pub fn placeholder_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_typing()).count()
    }

    /// Opens the panel. The greeting is appended on the first open only;
    /// returns whether it was.
    pub fn open(&mut self, config: &WidgetConfig) -> bool {
        self.panel = Panel::Open;
        if self.has_greeted {
            return false;
        }
        self.append_message(config.greeting.clone(), Sender::Bot, TextFormat::Markup);
        self.has_greeted = true;
        true
    }

    pub fn close(&mut self) {
        self.panel = Panel::Closed;
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn append_message(
        &mut self,
        text: impl Into<String>,
        sender: Sender,
        format: TextFormat,
    ) -> MessageId {
        self.push(text.into(), sender, format, MessageKind::Regular)
    }

    fn push(
        &mut self,
        text: String,
        sender: Sender,
        format: TextFormat,
        kind: MessageKind,
    ) -> MessageId {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message { id, text, sender, format, kind });
        id
    }

    /// Removes a typing placeholder. Regular entries are never removed.
    pub fn remove_placeholder(&mut self, id: MessageId) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| !(m.id == id && m.is_typing()));
        self.messages.len() != before
    }

    /// First half of a send: takes the trimmed input, clears the field and
    /// appends the user entry followed by a typing placeholder.
    ///
    /// Returns `None`, touching nothing, when the input is blank.
    pub fn begin_send(&mut self, config: &WidgetConfig) -> Option<PendingSend> {
        let message = self.input.trim().to_string();
        if message.is_empty() {
            return None;
        }
        self.input.clear();
        self.append_message(message.clone(), Sender::User, TextFormat::Plain);
        let placeholder = self.push(
            config.typing_text.clone(),
            Sender::Bot,
            TextFormat::Plain,
            MessageKind::Typing,
        );
        Some(PendingSend { message, placeholder })
    }

    /// Second half of a send: swaps the placeholder for the reply, or for
    /// the fixed error text when the request failed.
    pub fn resolve_send(
        &mut self,
        pending: &PendingSend,
        outcome: &Result<String, ChatError>,
        config: &WidgetConfig,
    ) -> MessageId {
        self.remove_placeholder(pending.placeholder);
        match outcome {
            Ok(reply) => self.append_message(
                reply.clone(),
                Sender::Bot,
                config.render_mode.reply_format(),
            ),
            Err(_) => self.append_message(config.error_text.clone(), Sender::Bot, TextFormat::Plain),
        }
    }
}

/// Owner of the [`WidgetState`] the controller works on.
///
/// `with_mut` returns `None` when the state is gone (a disposed signal).
pub trait WidgetStore: Clone + 'static {
    fn with_mut<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> Option<R>;
}

impl WidgetStore for RwSignal<WidgetState> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl WidgetStore for Rc<RefCell<WidgetState>> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
