//! # State Module
//!
//! Manages application state for the counter.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, each concern
//! has its own state type and each command takes only what it needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬──────────────────┐                        │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐          │
//! │  │ SessionState │  │ AssistantState   │  │ DeliveryTicker   │          │
//! │  │              │  │                  │  │                  │          │
//! │  │  Arc<Mutex<  │  │  ReportAssistant │  │  watch::Receiver │          │
//! │  │    Session   │  │  (Arc<dyn        │  │  + spawned task  │          │
//! │  │  >>          │  │   TextGenerator>)│  │                  │          │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘          │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • SessionState: one mutex serialises every state transition           │
//! │  • AssistantState: immutable after startup                             │
//! │  • DeliveryTicker: single writer task, lock-free reads via watch        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod assistant;
mod delivery;
mod session;

pub use assistant::AssistantState;
pub use delivery::DeliveryTicker;
pub use session::{Session, SessionState};
