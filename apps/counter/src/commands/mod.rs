//! # Commands Module
//!
//! One function per user action on the counter screens.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs            ◄─── You are here (exports)
//! ├── catalog.rs        ◄─── Stock screen: search, categories, entry form
//! ├── pos.rs            ◄─── Cart, checkout, sales journal
//! ├── clients.rs        ◄─── Patient registry
//! ├── suppliers.rs      ◄─── Supplier registry, delivery animation
//! ├── prescriptions.rs  ◄─── Prescription board
//! ├── dashboard.rs      ◄─── Home-screen figures
//! ├── settings.rs       ◄─── Pharmacy profile, revenue goal
//! └── report.rs         ◄─── Report assistant (the only async command)
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  officine> add 3                                                        │
//! │         │                                                               │
//! │         │ (clap parses the line)                                        │
//! │         ▼                                                               │
//! │  fn add_to_cart(                                                        │
//! │      session: &SessionState,   ◄── only the state it needs             │
//! │      medicine_id: &str,        ◄── from the parsed line                │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Pretty JSON on stdout                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command logs `debug!` on entry, `info!` on state changes, and
//! `warn!` on rejected input.

pub mod catalog;
pub mod clients;
pub mod dashboard;
pub mod pos;
pub mod prescriptions;
pub mod report;
pub mod settings;
pub mod suppliers;
