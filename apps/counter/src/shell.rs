//! # Command Shell
//!
//! Parses one stdin line with clap and dispatches it to a command function.
//!
//! ## Line Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  officine> add-client --first-name Ama --last-name "Kpodar Ep. Tchala"  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  split_words ── whitespace, "double quotes" group words                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Line::try_parse_from ── help ──────────────► Reply::Help(usage)        │
//! │       │                └─ bad input ────────► Reply::Error(ApiError)    │
//! │       ▼                                                                 │
//! │  Command::AddClient ──► commands::clients::create_client                │
//! │       │                                                                 │
//! │       ├── Ok(card) ─────────────────────────► Reply::Output(JSON)       │
//! │       └── Err(api_error) ───────────────────► Reply::Error(ApiError)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The shell does no I/O of its own except the busy indicator of `ask`; the
//! caller prints whatever [`Reply`] comes back.

use chrono::{NaiveDate, NaiveDateTime};
use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use officine_assistant::render_plain;
use officine_core::{BloodGroup, MedicineForm, PaymentMethod, Sex, SupplierType};

use crate::commands::catalog::{self, MedicineFields};
use crate::commands::clients::{self, NewClient};
use crate::commands::suppliers::{self, NewSupplier};
use crate::commands::{dashboard, pos, prescriptions, report, settings};
use crate::error::{ApiError, ErrorCode};
use crate::state::{AssistantState, DeliveryTicker, SessionState};

// =============================================================================
// Grammar
// =============================================================================

/// One shell line.
#[derive(Debug, Parser)]
#[command(
    name = "officine",
    no_binary_name = true,
    disable_version_flag = true,
    color = clap::ColorChoice::Never,
    about = "Comptoir de la pharmacie"
)]
pub struct Line {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the whole catalog
    Stock,
    /// Search the catalog by name or category
    Search {
        query: Option<String>,
        /// Exact category ("All" for every category)
        #[arg(long, short)]
        category: Option<String>,
    },
    /// Category filter options
    Categories,
    /// Medicines at or below their minimum stock
    LowStock,
    /// Add a medicine (name and --price are required)
    AddMedicine(MedicineArgs),
    /// Edit a medicine; only the given fields change
    EditMedicine {
        id: String,
        #[command(flatten)]
        fields: MedicineArgs,
    },
    /// Delete a medicine
    DeleteMedicine { id: String },
    /// POS product picker (name search)
    Pick { query: Option<String> },
    /// Show the cart
    Cart,
    /// Add one unit of a medicine to the cart
    Add { id: String },
    /// Increase a cart line by one
    Inc { id: String },
    /// Decrease a cart line by one (minimum 1)
    Dec { id: String },
    /// Remove a cart line
    Remove { id: String },
    /// Open the payment panel
    Checkout,
    /// Back to the cart
    Cancel,
    /// Complete the sale: cash, card or mobile_money
    Pay { method: PaymentMethod },
    /// Sales journal
    Sales,
    /// List clients, optionally filtered by name or phone
    Clients { query: Option<String> },
    /// Patient card
    Client { id: String },
    /// Register a client
    AddClient(ClientArgs),
    /// List suppliers
    Suppliers,
    /// Register a supplier
    AddSupplier(SupplierArgs),
    /// Delivery map animation
    Delivery,
    /// Prescription board
    Prescriptions,
    /// Record a prescription
    AddPrescription {
        #[arg(long)]
        patient: String,
        #[arg(long)]
        doctor: String,
        /// Comma-separated medication names
        #[arg(long, default_value = "")]
        medications: String,
    },
    /// Move a prescription to the next stage
    Advance { id: String },
    /// Home-screen figures
    Dashboard,
    /// Show the pharmacy profile, or change the given fields
    Settings(SettingsArgs),
    /// Set the daily revenue target
    SetTarget {
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    /// Ask the report assistant
    Ask {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
        words: Vec<String>,
    },
    /// Leave the counter
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Default, Args)]
pub struct MedicineArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub dosage: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// tablet, syrup, injection, cream, capsule, drop
    #[arg(long)]
    pub form: Option<MedicineForm>,
    #[arg(long)]
    pub purchase_price: Option<i64>,
    /// Sale price
    #[arg(long)]
    pub price: Option<i64>,
    #[arg(long, allow_hyphen_values = true)]
    pub stock: Option<i64>,
    #[arg(long)]
    pub min_stock: Option<i64>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub expiry: Option<NaiveDate>,
    #[arg(long)]
    pub supplier: Option<String>,
}

impl From<MedicineArgs> for MedicineFields {
    fn from(args: MedicineArgs) -> Self {
        MedicineFields {
            name: args.name,
            description: args.description,
            dosage: args.dosage,
            category: args.category,
            form: args.form,
            purchase_price: args.purchase_price,
            sale_price: args.price,
            stock: args.stock,
            min_stock: args.min_stock,
            expiry_date: args.expiry,
            supplier_id: args.supplier,
        }
    }
}

#[derive(Debug, Default, Args)]
pub struct ClientArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    /// M or F
    #[arg(long)]
    pub sex: Option<Sex>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub birth_date: Option<NaiveDate>,
    #[arg(long, default_value = "")]
    pub phone: String,
    /// Centimetres
    #[arg(long, default_value_t = 0)]
    pub height: u32,
    /// Kilograms
    #[arg(long, default_value_t = 0)]
    pub weight: u32,
    /// A+, A-, B+, B-, AB+, AB-, O+, O-
    #[arg(long)]
    pub blood_group: Option<BloodGroup>,
    /// Comma-separated
    #[arg(long, value_delimiter = ',')]
    pub conditions: Vec<String>,
    /// Comma-separated
    #[arg(long, value_delimiter = ',')]
    pub allergies: Vec<String>,
    #[arg(long, default_value = "")]
    pub notes: String,
}

fn trimmed(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

impl From<ClientArgs> for NewClient {
    fn from(args: ClientArgs) -> Self {
        NewClient {
            first_name: args.first_name.unwrap_or_default(),
            last_name: args.last_name.unwrap_or_default(),
            sex: args.sex.unwrap_or_default(),
            birth_date: args.birth_date,
            phone: args.phone,
            height: args.height,
            weight: args.weight,
            blood_group: args.blood_group,
            chronic_conditions: trimmed(args.conditions),
            allergies: trimmed(args.allergies),
            notes: args.notes,
        }
    }
}

#[derive(Debug, Default, Args)]
pub struct SupplierArgs {
    #[arg(long)]
    pub name: Option<String>,
    /// wholesaler or laboratory
    #[arg(long = "type")]
    pub supplier_type: Option<SupplierType>,
    /// Phone number
    #[arg(long, default_value = "")]
    pub contact: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub address: String,
    /// YYYY-MM-DDTHH:MM:SS
    #[arg(long)]
    pub next_delivery: Option<NaiveDateTime>,
}

impl From<SupplierArgs> for NewSupplier {
    fn from(args: SupplierArgs) -> Self {
        NewSupplier {
            name: args.name.unwrap_or_default(),
            supplier_type: args.supplier_type.unwrap_or_default(),
            contact: args.contact,
            email: args.email,
            address: args.address,
            next_delivery: args.next_delivery,
        }
    }
}

#[derive(Debug, Default, Args)]
pub struct SettingsArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub nif: Option<String>,
    /// Percentage (18 = 18%)
    #[arg(long)]
    pub tax_rate: Option<f64>,
    #[arg(long)]
    pub currency: Option<String>,
}

impl SettingsArgs {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.address.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.nif.is_none()
            && self.tax_rate.is_none()
            && self.currency.is_none()
    }
}

// =============================================================================
// Replies
// =============================================================================

/// What the caller should print.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Command result (pretty JSON, or plain text for `ask`)
    Output(String),
    /// Usage text
    Help(String),
    /// Failed command
    Error(ApiError),
    /// Blank line or blank question: print nothing
    Empty,
    /// Leave the loop
    Quit,
}

impl Reply {
    fn json<T: Serialize>(value: &T) -> Reply {
        match serde_json::to_string_pretty(value) {
            Ok(text) => Reply::Output(text),
            Err(e) => Reply::Error(ApiError::internal(e.to_string())),
        }
    }

    fn from_result<T: Serialize>(result: Result<T, ApiError>) -> Reply {
        match result {
            Ok(value) => Reply::json(&value),
            Err(e) => Reply::Error(e),
        }
    }

    /// Text to print, if any.
    pub fn render(&self) -> Option<String> {
        match self {
            Reply::Output(text) | Reply::Help(text) => Some(text.clone()),
            Reply::Error(e) => Some(
                serde_json::to_string_pretty(e).unwrap_or_else(|_| e.to_string()),
            ),
            Reply::Empty | Reply::Quit => None,
        }
    }
}

// =============================================================================
// Tokenizer
// =============================================================================

/// Splits a line on whitespace; `"double quotes"` keep spaces together.
/// Single quotes are ordinary characters (French text is full of them).
pub fn split_words(line: &str) -> Result<Vec<String>, ApiError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if in_quotes {
        return Err(ApiError::new(ErrorCode::InvalidCommand, "unterminated quote"));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

// =============================================================================
// Shell
// =============================================================================

/// Line dispatcher over the counter state.
pub struct Shell {
    session: SessionState,
    assistant: AssistantState,
    delivery: DeliveryTicker,
}

impl Shell {
    pub fn new(session: SessionState, assistant: AssistantState, delivery: DeliveryTicker) -> Self {
        Shell {
            session,
            assistant,
            delivery,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Handles one input line.
    pub async fn handle_line(&self, line: &str) -> Reply {
        let words = match split_words(line) {
            Ok(words) if words.is_empty() => return Reply::Empty,
            Ok(words) => words,
            Err(e) => return Reply::Error(e),
        };

        match Line::try_parse_from(&words) {
            Ok(parsed) => self.execute(parsed.command).await,
            Err(e) => match e.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                | ErrorKind::DisplayVersion => Reply::Help(e.render().to_string()),
                _ => {
                    debug!(line = %line, "Unparsable shell line");
                    Reply::Error(e.into())
                }
            },
        }
    }

    async fn execute(&self, command: Command) -> Reply {
        let session = &self.session;

        match command {
            // Catalog
            Command::Stock => Reply::json(&catalog::list_medicines(session)),
            Command::Search { query, category } => Reply::from_result(catalog::search_medicines(
                session,
                query.as_deref().unwrap_or_default(),
                category.as_deref(),
            )),
            Command::Categories => Reply::json(&catalog::list_categories(session)),
            Command::LowStock => Reply::json(&catalog::low_stock_medicines(session)),
            Command::AddMedicine(args) => {
                Reply::from_result(catalog::add_medicine(session, args.into()))
            }
            Command::EditMedicine { id, fields } => {
                Reply::from_result(catalog::update_medicine(session, &id, fields.into()))
            }
            Command::DeleteMedicine { id } => Reply::json(&catalog::delete_medicine(session, &id)),

            // POS
            Command::Pick { query } => Reply::from_result(pos::search_products(
                session,
                query.as_deref().unwrap_or_default(),
            )),
            Command::Cart => Reply::json(&pos::get_cart(session)),
            Command::Add { id } => Reply::from_result(pos::add_to_cart(session, &id)),
            Command::Inc { id } => Reply::from_result(pos::increment_item(session, &id)),
            Command::Dec { id } => Reply::from_result(pos::decrement_item(session, &id)),
            Command::Remove { id } => Reply::from_result(pos::remove_from_cart(session, &id)),
            Command::Checkout => Reply::from_result(pos::begin_checkout(session)),
            Command::Cancel => Reply::from_result(pos::cancel_checkout(session)),
            Command::Pay { method } => Reply::from_result(pos::complete_sale(session, method)),
            Command::Sales => Reply::json(&pos::list_sales(session)),

            // Clients
            Command::Clients { query } => {
                Reply::json(&clients::list_clients(session, query.as_deref()))
            }
            Command::Client { id } => Reply::from_result(clients::get_client(session, &id)),
            Command::AddClient(args) => {
                Reply::from_result(clients::create_client(session, args.into()))
            }

            // Suppliers
            Command::Suppliers => Reply::json(&suppliers::list_suppliers(session)),
            Command::AddSupplier(args) => {
                Reply::from_result(suppliers::create_supplier(session, args.into()))
            }
            Command::Delivery => {
                Reply::json(&suppliers::delivery_status(session, &self.delivery))
            }

            // Prescriptions
            Command::Prescriptions => Reply::json(&prescriptions::prescription_board(session)),
            Command::AddPrescription {
                patient,
                doctor,
                medications,
            } => Reply::from_result(prescriptions::create_prescription(
                session,
                &patient,
                &doctor,
                &medications,
            )),
            Command::Advance { id } => {
                Reply::json(&prescriptions::advance_prescription(session, &id))
            }

            // Dashboard & settings
            Command::Dashboard => Reply::json(&dashboard::get_dashboard(session)),
            Command::Settings(args) if args.is_empty() => {
                Reply::json(&settings::get_settings(session))
            }
            Command::Settings(args) => {
                let mut profile = settings::get_settings(session);
                if let Some(name) = args.name {
                    profile.name = name;
                }
                if let Some(address) = args.address {
                    profile.address = address;
                }
                if let Some(phone) = args.phone {
                    profile.phone = phone;
                }
                if let Some(email) = args.email {
                    profile.email = email;
                }
                if let Some(nif) = args.nif {
                    profile.nif = nif;
                }
                if let Some(tax_rate) = args.tax_rate {
                    profile.tax_rate = tax_rate;
                }
                if let Some(currency) = args.currency {
                    profile.currency = currency;
                }
                Reply::json(&settings::update_settings(session, profile))
            }
            Command::SetTarget { amount } => {
                Reply::json(&settings::set_daily_target(session, amount))
            }

            // Assistant
            Command::Ask { words } => {
                let request = words.join(" ");
                if request.trim().is_empty() {
                    return Reply::Empty;
                }
                eprintln!("Analyse en cours...");
                match report::ask_report(session, &self.assistant, &request).await {
                    Some(answer) => Reply::Output(render_plain(&answer)),
                    None => Reply::Empty,
                }
            }

            Command::Quit => Reply::Quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(
            split_words(r#"add-prescription --patient "Ama Kpodar" --doctor Dr.Tchala"#).unwrap(),
            vec!["add-prescription", "--patient", "Ama Kpodar", "--doctor", "Dr.Tchala"]
        );
        assert_eq!(
            split_words("ask C'est l'heure  ").unwrap(),
            vec!["ask", "C'est", "l'heure"]
        );
        assert_eq!(split_words(r#"search """#).unwrap(), vec!["search", ""]);
        assert!(split_words("   ").unwrap().is_empty());
        assert!(split_words(r#"search "open"#).is_err());
    }

    #[test]
    fn test_grammar_kebab_case_names() {
        for line in [
            "low-stock",
            "add-medicine --name X --price 10",
            "edit-medicine 1 --stock 5",
            "delete-medicine 1",
            "set-target 150000",
            "add-client --first-name A --last-name B --allergies x,y",
            "add-supplier --name S --type laboratory",
            "add-prescription --patient P --doctor D",
            "pay mobile_money",
            "exit",
        ] {
            let words = split_words(line).unwrap();
            assert!(Line::try_parse_from(&words).is_ok(), "failed to parse {line}");
        }
    }

    #[test]
    fn test_grammar_rejects_bad_values() {
        let words = split_words("pay bitcoin").unwrap();
        assert!(Line::try_parse_from(&words).is_err());

        let words = split_words("add-medicine --form powder").unwrap();
        assert!(Line::try_parse_from(&words).is_err());
    }

    #[test]
    fn test_ask_collects_words() {
        let words = split_words("ask Quels produits commander ?").unwrap();
        match Line::try_parse_from(&words).unwrap().command {
            Command::Ask { words } => assert_eq!(words.join(" "), "Quels produits commander ?"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
