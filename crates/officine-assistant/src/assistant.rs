//! # Report Assistant
//!
//! ```text
//!   ask(request, context)
//!        │
//!        ├── generator not configured ──────────► NOT_CONFIGURED_MESSAGE
//!        │
//!        ├── prompt = template(context.json, request)
//!        │
//!        └── generator.generate(prompt)
//!              ├── Ok(text), non-blank ─────────► text (verbatim)
//!              ├── Ok(blank) ───────────────────► EMPTY_RESPONSE_MESSAGE
//!              └── Err(e)  ── error! log ───────► ERROR_MESSAGE
//! ```
//!
//! `ask` always returns a string; it has no error path.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::client::TextGenerator;
use crate::context::ReportContext;
use crate::prompts::{
    make_report_prompt, EMPTY_RESPONSE_MESSAGE, ERROR_MESSAGE, NOT_CONFIGURED_MESSAGE,
};

#[derive(Clone)]
pub struct ReportAssistant {
    generator: Arc<dyn TextGenerator>,
}

impl ReportAssistant {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        ReportAssistant { generator }
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_configured()
    }

    /// Answers a free-text request about the given snapshot.
    pub async fn ask(&self, request: &str, context: &ReportContext) -> String {
        if !self.generator.is_configured() {
            warn!("Report requested without an API key");
            return NOT_CONFIGURED_MESSAGE.to_string();
        }

        let prompt = make_report_prompt(&context.to_json(), request.trim());
        debug!(prompt_len = prompt.len(), "Sending report prompt");

        match self.generator.generate(&prompt).await {
            Ok(text) if text.trim().is_empty() => EMPTY_RESPONSE_MESSAGE.to_string(),
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, "Report assistant request failed");
                ERROR_MESSAGE.to_string()
            }
        }
    }
}

/// Plain-text rendering of a Markdown answer for a terminal: heading marks
/// are dropped and list dashes become bullets.
pub fn render_plain(answer: &str) -> String {
    answer
        .lines()
        .map(|line| {
            let line = match line.find(|c: char| c != '#') {
                Some(n) if n > 0 && line[n..].starts_with(char::is_whitespace) => {
                    line[n..].trim_start()
                }
                _ => line,
            };
            match line.strip_prefix("- ") {
                Some(rest) => format!("• {}", rest),
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
