//! # Officine Counter
//!
//! Console front-end for the pharmacy counter: stock, POS, clients,
//! suppliers, prescriptions, dashboard, settings, and the report assistant.
//!
//! ## Module Organization
//! ```text
//! counter/
//! ├── lib.rs          ◄─── You are here (startup & console loop)
//! ├── config.rs       ◄─── Environment configuration
//! ├── shell.rs        ◄─── clap grammar, line dispatch
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Pharmacy + POS session behind one mutex
//! │   ├── assistant.rs◄─── Report assistant holder
//! │   └── delivery.rs ◄─── Delivery animation task
//! ├── commands/       ◄─── One function per user action
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management: Multiple State Types
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐    │
//! │  │  SessionState    │ │  AssistantState  │ │  DeliveryTicker      │    │
//! │  │                  │ │                  │ │                      │    │
//! │  │  • Catalog       │ │  • Gemini client │ │  • Truck position    │    │
//! │  │  • Sales, cart   │ │    (or mock)     │ │  • Background task   │    │
//! │  │  • Clients, ...  │ │                  │ │                      │    │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘    │
//! │                                                                         │
//! │  Each command only takes the state it needs.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod shell;
pub mod state;

use chrono::Utc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use shell::{Reply, Shell};
use state::{AssistantState, DeliveryTicker, SessionState};

const PROMPT: &str = "officine> ";

/// Runs the counter until `quit` or end of input.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Counter Startup                                   │
/// │                                                                         │
/// │  1. Load Fixtures ────────────────────────────────────────────────────► │
/// │     • 6 medicines, 3 clients, 2 suppliers, 2 prescriptions, 2 sales     │
/// │                                                                         │
/// │  2. Build the Report Assistant ───────────────────────────────────────► │
/// │     • Gemini client; without API_KEY it answers "not configured"        │
/// │                                                                         │
/// │  3. Start the Delivery Ticker ────────────────────────────────────────► │
/// │                                                                         │
/// │  4. Read stdin line by line ──────────────────────────────────────────► │
/// │     • Each line → Shell::handle_line → printed reply                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Officine counter");

    let session = SessionState::with_fixtures(Utc::now());
    let assistant = AssistantState::from_config(&config)?;
    let delivery = DeliveryTicker::start(config.delivery_tick);

    let pharmacy_name = session.with_session(|s| s.pharmacy.settings().name.clone());
    let shell = Shell::new(session, assistant, delivery);

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let banner = format!(
        "{}\nTapez 'help' pour la liste des commandes.\n",
        pharmacy_name
    );
    stdout.write_all(banner.as_bytes()).await?;

    loop {
        stdout.write_all(PROMPT.as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let reply = shell.handle_line(&line).await;
        if reply == Reply::Quit {
            break;
        }
        if let Some(text) = reply.render() {
            stdout.write_all(text.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
        }
    }

    stdout.flush().await?;
    info!("Counter closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout carries only command output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=officine=trace` - Show trace for officine crates only
/// - Default: `info,officine=debug,counter=debug`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,officine=debug,counter=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
