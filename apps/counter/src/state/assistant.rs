//! Report assistant holder.
//!
//! Built once at startup from [`AppConfig`](crate::config::AppConfig).
//! Without an API key the assistant still exists and answers every request
//! with the fixed "not configured" message.

use std::sync::Arc;

use tracing::info;

use officine_assistant::{AssistantResult, GeminiClient, ReportAssistant, TextGenerator};

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AssistantState {
    assistant: ReportAssistant,
}

impl AssistantState {
    /// Gemini-backed assistant.
    pub fn from_config(config: &AppConfig) -> AssistantResult<Self> {
        let client = GeminiClient::new(config.gemini_config())?;
        info!(
            model = %client.model(),
            configured = client.is_configured(),
            "Report assistant ready"
        );
        Ok(Self::with_generator(Arc::new(client)))
    }

    /// Any generator (tests use `MockGenerator`).
    pub fn with_generator(generator: Arc<dyn TextGenerator>) -> Self {
        AssistantState {
            assistant: ReportAssistant::new(generator),
        }
    }

    pub fn assistant(&self) -> &ReportAssistant {
        &self.assistant
    }
}
