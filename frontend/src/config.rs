#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::models::TextFormat;

/// Chatbot endpoint used when no build-time override is given.
pub const DEFAULT_ENDPOINT_URL: &str = "http://127.0.0.1:5000/chatbot";

pub const DEFAULT_GREETING: &str =
    "Olá! Sou o Chatbot do Novembro Azul. Pergunte sobre sintomas, prevenção ou check-ups.";
pub const DEFAULT_TYPING_TEXT: &str = "Digitando...";
pub const DEFAULT_ERROR_TEXT: &str = "❌ Erro de conexão. Tente novamente.";
pub const DEFAULT_SUBMIT_KEY: &str = "Enter";

/// How replies from the endpoint are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    #[default]
    Text,
    /// Render endpoint replies as HTML. Only for a fully trusted endpoint.
    Markup,
}

impl RenderMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Some(RenderMode::Text),
            "markup" | "html" => Some(RenderMode::Markup),
            _ => None,
        }
    }

    pub fn reply_format(&self) -> TextFormat {
        match self {
            RenderMode::Text => TextFormat::Plain,
            RenderMode::Markup => TextFormat::Markup,
        }
    }
}

/// Widget settings. All fields are fixed for the page lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub endpoint_url: String,
    /// Shown once, on the first open. Trusted, rendered as markup.
    pub greeting: String,
    pub typing_text: String,
    /// Shown for every failed send, whatever the cause.
    pub error_text: String,
    /// `KeyboardEvent.key` value that submits the input.
    pub submit_key: String,
    pub render_mode: RenderMode,
    pub log_level: log::Level,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            greeting: DEFAULT_GREETING.to_string(),
            typing_text: DEFAULT_TYPING_TEXT.to_string(),
            error_text: DEFAULT_ERROR_TEXT.to_string(),
            submit_key: DEFAULT_SUBMIT_KEY.to_string(),
            render_mode: RenderMode::default(),
            log_level: log::Level::Info,
        }
    }
}

impl WidgetConfig {
    /// Defaults with the overrides baked in at compile time
    /// (`CHATBOT_API_URL`, `CHAT_WIDGET_RENDER`, `CHAT_WIDGET_LOG`).
    pub fn from_build_env() -> Self {
        Self::default().with_overrides(
            option_env!("CHATBOT_API_URL"),
            option_env!("CHAT_WIDGET_RENDER"),
            option_env!("CHAT_WIDGET_LOG"),
        )
    }

    /// Applies optional overrides. Blank or unparseable values keep the
    /// current setting.
    pub fn with_overrides(
        mut self,
        endpoint_url: Option<&str>,
        render_mode: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        if let Some(url) = endpoint_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.endpoint_url = url.to_string();
        }
        if let Some(raw) = render_mode {
            match RenderMode::parse(raw) {
                Some(mode) => self.render_mode = mode,
                None => log::warn!("Ignoring unknown render mode '{raw}'"),
            }
        }
        if let Some(raw) = log_level {
            match raw.trim().parse::<log::Level>() {
                Ok(level) => self.log_level = level,
                Err(_) => log::warn!("Ignoring unknown log level '{raw}'"),
            }
        }
        self
    }

    pub fn is_submit_key(&self, key: &str) -> bool {
        key == self.submit_key
    }
}
