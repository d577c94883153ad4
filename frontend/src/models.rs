use serde::{Deserialize, Serialize};

/// Identifier of a log entry, unique for the lifetime of a `WidgetState`.
pub type MessageId = u64;

/// Who produced a log entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }

    /// CSS class tagging an entry in the message log.
    pub fn css_class(&self) -> &'static str {
        match self {
            Sender::User => "user-message",
            Sender::Bot => "bot-message",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an entry's text is inserted into the log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextFormat {
    /// Inserted as a text node; markup characters are shown literally.
    #[default]
    Plain,
    /// Inserted as HTML.
    Markup,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageKind {
    #[default]
    Regular,
    /// The transient "typing" entry shown while a request is pending.
    Typing,
}

/// One entry of the message log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub format: TextFormat,
    pub kind: MessageKind,
}

impl Message {
    pub fn is_typing(&self) -> bool {
        self.kind == MessageKind::Typing
    }

    /// Space separated class list for the rendered entry.
    pub fn css_classes(&self) -> String {
        let mut classes = format!("chat-message {}", self.sender.css_class());
        if self.is_typing() {
            classes.push_str(" typing-indicator");
        }
        classes
    }
}

/// Body of `POST /chatbot`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

/// Successful reply from the chatbot endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: String,
}

/// Error body the endpoint may send with a non-success status.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
