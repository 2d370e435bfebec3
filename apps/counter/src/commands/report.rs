//! # Report Command
//!
//! The assistant screen: a free-text request about the pharmacy.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ask_report("Analyse mes ventes")                                       │
//! │       │                                                                 │
//! │       ├── blank request ─────────────────────────► None (ignored)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  with_session: ReportContext::capture(catalog, sales)   ◄── lock held   │
//! │       │                                                     only here   │
//! │       ▼                                                                 │
//! │  assistant.ask(request, &context).await  ──► answer text (never error)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use officine_assistant::ReportContext;

use crate::state::{AssistantState, SessionState};

/// Asks the assistant about the current state.
///
/// ## Returns
/// `None` for a blank request, otherwise the assistant's answer or one of
/// its fixed fallback messages.
pub async fn ask_report(
    session: &SessionState,
    assistant: &AssistantState,
    request: &str,
) -> Option<String> {
    if request.trim().is_empty() {
        return None;
    }
    debug!(request_len = request.len(), "ask_report command");

    let context = session.with_session(|s| {
        ReportContext::capture(s.pharmacy.catalog().all(), s.pharmacy.sales().all())
    });

    Some(assistant.assistant().ask(request, &context).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use officine_assistant::prompts::NOT_CONFIGURED_MESSAGE;
    use officine_assistant::MockGenerator;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_blank_request_is_ignored() {
        let mock = Arc::new(MockGenerator::replying("ok"));
        let assistant = AssistantState::with_generator(mock.clone());
        let session = SessionState::with_fixtures(Utc::now());

        assert_eq!(ask_report(&session, &assistant, "   ").await, None);
        assert!(mock.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_reaches_the_prompt() {
        let mock = Arc::new(MockGenerator::replying("## Synthèse"));
        let assistant = AssistantState::with_generator(mock.clone());
        let session = SessionState::with_fixtures(Utc::now());

        let answer = ask_report(&session, &assistant, "Analyse mes ventes").await;
        assert_eq!(answer.as_deref(), Some("## Synthèse"));

        let prompt = &mock.prompts()[0];
        assert!(prompt.contains(r#""todaysSalesTotal":17000"#));
        assert!(prompt.contains(r#""salesCount":2"#));
        assert!(prompt.contains("Bronchokod"));
    }

    #[tokio::test]
    async fn test_unconfigured_assistant() {
        let assistant = AssistantState::with_generator(Arc::new(MockGenerator::unconfigured()));
        let session = SessionState::with_fixtures(Utc::now());
        assert_eq!(
            ask_report(&session, &assistant, "Stock ?").await.as_deref(),
            Some(NOT_CONFIGURED_MESSAGE)
        );
    }
}
