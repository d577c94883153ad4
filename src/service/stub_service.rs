#[cfg(test)]
#[path = "stub_service_test.rs"]
mod stub_service_test;

use tracing::{info, warn};

use crate::config::StubMode;
use crate::errors::AppError;

pub const FALLBACK_REPLY: &str = "Olá! Sou o Chatbot do Novembro Azul. \
    Não consegui gerar uma resposta detalhada agora, mas lembre-se: \
    fazer check-ups regularmente e ficar atento aos sintomas é fundamental. \
    Pergunte sobre prevenção, sintomas ou exames!";

/// Answers `/chatbot` requests without any model behind it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubService {
    mode: StubMode,
}

impl StubService {
    pub fn new(mode: StubMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> StubMode {
        self.mode
    }

    pub fn reply(&self, message: &str) -> Result<String, AppError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::EmptyMessage);
        }

        info!(mode = %self.mode, chars = message.chars().count(), "Stub chatbot request");

        match self.mode {
            StubMode::Echo => Ok(format!("Você perguntou: {message}")),
            StubMode::Fallback => Ok(FALLBACK_REPLY.to_string()),
            StubMode::Fail => {
                warn!("Stub chatbot configured to fail");
                Err(AppError::SimulatedFailure)
            }
        }
    }
}
