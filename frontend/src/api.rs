#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gloo_net::http::Request;

use crate::errors::ChatError;
use crate::models::{ChatRequest, ChatResponse, ErrorBody};

/// Something that answers a user message with a reply text.
#[allow(async_fn_in_trait)]
pub trait ChatEndpoint: 'static {
    async fn send_message(&self, message: &str) -> Result<String, ChatError>;
}

/// The chatbot endpoint reached over HTTP with `fetch`.
#[derive(Clone, Debug)]
pub struct HttpEndpoint {
    url: String,
}

impl HttpEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ChatEndpoint for HttpEndpoint {
    async fn send_message(&self, message: &str) -> Result<String, ChatError> {
        let body = ChatRequest {
            message: message.to_string(),
        };

        let resp = Request::post(&self.url)
            .json(&body)
            .map_err(|e| ChatError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let ok = resp.ok();
        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        interpret_response(ok, status, &text)
    }
}

/// Turns a settled HTTP exchange into the reply text or the reason there
/// is none.
pub fn interpret_response(ok: bool, status: u16, body: &str) -> Result<String, ChatError> {
    if !ok {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error);
        return Err(ChatError::status(status, detail));
    }

    serde_json::from_str::<ChatResponse>(body)
        .map(|r| r.response)
        .map_err(|e| ChatError::MalformedResponse(e.to_string()))
}
