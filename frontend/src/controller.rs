#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::sync::Arc;

use crate::api::ChatEndpoint;
use crate::config::WidgetConfig;
use crate::errors::ChatError;
use crate::models::{MessageId, Sender, TextFormat};
use crate::state::{WidgetState, WidgetStore};

/// What a call to [`ChatWidget::send`] ended up doing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input; nothing appended, nothing sent.
    Ignored,
    Replied,
    Failed(ChatError),
}

/// The chat widget's behaviour, independent of how its state is rendered.
pub struct ChatWidget<S, E> {
    store: S,
    endpoint: Arc<E>,
    config: Arc<WidgetConfig>,
}

impl<S: Clone, E> Clone for ChatWidget<S, E> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            endpoint: Arc::clone(&self.endpoint),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: WidgetStore, E: ChatEndpoint> ChatWidget<S, E> {
    pub fn new(store: S, endpoint: E, config: WidgetConfig) -> Self {
        Self {
            store,
            endpoint: Arc::new(endpoint),
            config: Arc::new(config),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Launcher activated. Moving focus to the input is left to the view.
    pub fn open(&self) {
        let greeted = self.store.with_mut(|s| s.open(&self.config));
        if greeted == Some(true) {
            log::debug!("Chat opened for the first time, greeting shown");
        }
    }

    /// Close control activated.
    pub fn close(&self) {
        self.store.with_mut(WidgetState::close);
    }

    /// Text field edited.
    pub fn set_input(&self, value: String) {
        self.store.with_mut(|s| s.set_input(value));
    }

    /// Appends a plain-text entry to the log.
    pub fn append_message(&self, text: impl Into<String>, sender: Sender) -> Option<MessageId> {
        let text = text.into();
        self.store
            .with_mut(|s| s.append_message(text, sender, TextFormat::Plain))
    }

    /// Whether a key pressed in the input should trigger [`send`](Self::send).
    pub fn is_submit_key(&self, key: &str) -> bool {
        self.config.is_submit_key(key)
    }

    /// Sends the current input to the endpoint and renders the result.
    ///
    /// The state is only borrowed before and after the request, never
    /// across it, so overlapping sends each settle on their own.
    pub async fn send(&self) -> SendOutcome {
        let Some(pending) = self.store.with_mut(|s| s.begin_send(&self.config)).flatten() else {
            return SendOutcome::Ignored;
        };
        log::debug!("Sending message ({} chars)", pending.message.chars().count());

        let outcome = self.endpoint.send_message(&pending.message).await;
        if let Err(e) = &outcome {
            log::error!("Chatbot request failed: {e}");
        }

        self.store
            .with_mut(|s| s.resolve_send(&pending, &outcome, &self.config));

        match outcome {
            Ok(_) => SendOutcome::Replied,
            Err(e) => SendOutcome::Failed(e),
        }
    }
}
