//! # officine-assistant: Natural-Language Reports
//!
//! Asks a hosted text-generation model about the pharmacy's current state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Counter `ask` command                                                  │
//! │       │  snapshot taken under the session lock, lock released           │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              officine-assistant (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   context.rs ──► prompts.rs ──► client.rs ──► assistant.rs     │   │
//! │  │   snapshot       French          TextGenerator   fixed          │   │
//! │  │   JSON           template        (Gemini/mock)   fallbacks      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  HTTPS POST generativelanguage.googleapis.com                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One request per question: no retries, no streaming, no caching.

pub mod assistant;
pub mod client;
pub mod context;
pub mod error;
pub mod prompts;

pub use assistant::{render_plain, ReportAssistant};
pub use client::{GeminiClient, GeminiConfig, MockGenerator, TextGenerator};
pub use context::ReportContext;
pub use error::{AssistantError, AssistantResult};
