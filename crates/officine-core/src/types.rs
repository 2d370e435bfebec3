//! # Domain Types
//!
//! Core domain types used throughout Officine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Medicine     │   │      Sale       │   │     Client      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name, dosage   │   │  date           │   │  names, sex     │       │
//! │  │  sale_price     │   │  items (frozen) │   │  birth_date     │       │
//! │  │  stock          │   │  total          │   │  height, weight │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Supplier     │   │  Prescription   │   │PharmacySettings │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  location       │   │  status ──────► │   │  revenue target │       │
//! │  │  next_delivery  │   │  4 fixed stages │   │  tax rate, NIF  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Shape
//! Every record serialises with camelCase field names, which is the shape
//! the web front-end already consumes. Enumerations serialise as
//! SCREAMING_SNAKE_CASE and expose a French display label via `label()`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartItem;
use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1800 bps = 18% (Togolese VAT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct.max(0.0) * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Medicine
// =============================================================================

/// Galenic form of a medicine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MedicineForm {
    Tablet,
    Syrup,
    Injection,
    Cream,
    Capsule,
    Drop,
}

impl MedicineForm {
    /// All forms, in the order the entry form lists them.
    pub const ALL: [MedicineForm; 6] = [
        MedicineForm::Tablet,
        MedicineForm::Syrup,
        MedicineForm::Injection,
        MedicineForm::Cream,
        MedicineForm::Capsule,
        MedicineForm::Drop,
    ];

    /// French label shown at the counter.
    pub const fn label(&self) -> &'static str {
        match self {
            MedicineForm::Tablet => "Comprimé",
            MedicineForm::Syrup => "Sirop",
            MedicineForm::Injection => "Injection",
            MedicineForm::Cream => "Crème",
            MedicineForm::Capsule => "Gélule",
            MedicineForm::Drop => "Gouttes",
        }
    }
}

impl Default for MedicineForm {
    fn default() -> Self {
        MedicineForm::Tablet
    }
}

impl FromStr for MedicineForm {
    type Err = ValidationError;

    /// Accepts the wire name (`TABLET`) or the French label (`Comprimé`),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        MedicineForm::ALL
            .into_iter()
            .find(|form| {
                form.label().to_lowercase() == wanted
                    || format!("{:?}", form).to_lowercase() == wanted
            })
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "form".to_string(),
                reason: format!("unknown medicine form '{}'", s.trim()),
            })
    }
}

/// A medicine in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Free text such as "500mg" or "150ml".
    pub dosage: String,
    pub category: String,
    pub form: MedicineForm,
    pub purchase_price: Money,
    pub sale_price: Money,
    /// Units on hand. Clamped at zero by sales, not by manual edits.
    pub stock: i64,
    /// At or below this level the medicine is reported as low stock.
    pub min_stock: i64,
    #[ts(as = "String")]
    pub expiry_date: NaiveDate,
    /// Supplier id (string key, not enforced).
    pub supplier_id: String,
}

impl Medicine {
    /// A blank entry-form record with the counter's defaults: purchase
    /// price 0, expiry today, supplier `sup1`, minimum stock 10, tablet form.
    ///
    /// The id is a fresh UUID v4.
    pub fn draft(today: NaiveDate) -> Self {
        Medicine {
            id: uuid::Uuid::new_v4().to_string(),
            name: String::new(),
            description: String::new(),
            dosage: String::new(),
            category: String::new(),
            form: MedicineForm::default(),
            purchase_price: Money::zero(),
            sale_price: Money::zero(),
            stock: 0,
            min_stock: crate::DEFAULT_MIN_STOCK,
            expiry_date: today,
            supplier_id: crate::DEFAULT_SUPPLIER_ID.to_string(),
        }
    }

    /// Checks if stock has fallen to the reorder threshold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }

    /// Out-of-stock medicines cannot be picked at the POS.
    #[inline]
    pub fn is_out_of_stock(&self) -> bool {
        self.stock <= 0
    }

    /// Checks if the medicine has expired on the given day.
    #[inline]
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date < today
    }

    /// Case-insensitive match on name or category.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
    }

    /// Case-insensitive match on name only (POS product picker).
    pub fn name_matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty() || self.name.to_lowercase().contains(&query)
    }
}

// =============================================================================
// Payment Method
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Card payment on external terminal.
    Card,
    /// Flooz / T-Money and similar wallets.
    MobileMoney,
}

impl PaymentMethod {
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Espèces",
            PaymentMethod::Card => "Carte",
            PaymentMethod::MobileMoney => "Mobile Money",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "cash" | "especes" | "espèces" => Ok(PaymentMethod::Cash),
            "card" | "carte" => Ok(PaymentMethod::Card),
            "mobile_money" | "mobile" | "momo" | "flooz" | "tmoney" => {
                Ok(PaymentMethod::MobileMoney)
            }
            other => Err(ValidationError::InvalidFormat {
                field: "paymentMethod".to_string(),
                reason: format!("expected cash, card or mobile_money, got '{}'", other),
            }),
        }
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A completed sale.
///
/// Uses the snapshot pattern: `items` are frozen copies of the cart lines,
/// so later catalog edits don't rewrite history. Created once per checkout
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
    pub items: Vec<CartItem>,
    pub total: Money,
    /// Always zero: no tax is computed at the counter.
    pub tax: Money,
    /// Always zero: no discount is computed at the counter.
    pub discount: Money,
    pub payment_method: PaymentMethod,
    pub cashier_id: String,
}

impl Sale {
    /// Total quantity of units sold.
    pub fn unit_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Checks if the sale happened on the given calendar day (UTC).
    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.date.date_naive() == day
    }
}

// =============================================================================
// Client
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Sex {
    M,
    F,
}

impl Default for Sex {
    fn default() -> Self {
        Sex::M
    }
}

impl FromStr for Sex {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "M" | "H" => Ok(Sex::M),
            "F" => Ok(Sex::F),
            other => Err(ValidationError::InvalidFormat {
                field: "sex".to_string(),
                reason: format!("expected M or F, got '{}'", other),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APos,
    #[serde(rename = "A-")]
    ANeg,
    #[serde(rename = "B+")]
    BPos,
    #[serde(rename = "B-")]
    BNeg,
    #[serde(rename = "AB+")]
    AbPos,
    #[serde(rename = "AB-")]
    AbNeg,
    #[serde(rename = "O+")]
    OPos,
    #[serde(rename = "O-")]
    ONeg,
}

impl BloodGroup {
    pub const fn label(&self) -> &'static str {
        match self {
            BloodGroup::APos => "A+",
            BloodGroup::ANeg => "A-",
            BloodGroup::BPos => "B+",
            BloodGroup::BNeg => "B-",
            BloodGroup::AbPos => "AB+",
            BloodGroup::AbNeg => "AB-",
            BloodGroup::OPos => "O+",
            BloodGroup::ONeg => "O-",
        }
    }
}

impl FromStr for BloodGroup {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        [
            BloodGroup::APos,
            BloodGroup::ANeg,
            BloodGroup::BPos,
            BloodGroup::BNeg,
            BloodGroup::AbPos,
            BloodGroup::AbNeg,
            BloodGroup::OPos,
            BloodGroup::ONeg,
        ]
        .into_iter()
        .find(|g| g.label() == wanted)
        .ok_or_else(|| ValidationError::InvalidFormat {
            field: "bloodGroup".to_string(),
            reason: format!("unknown blood group '{}'", s.trim()),
        })
    }
}

/// A patient record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub sex: Sex,
    #[ts(as = "Option<String>")]
    pub birth_date: Option<NaiveDate>,
    pub phone: String,
    /// Height in centimetres (0 = unknown).
    pub height: u32,
    /// Weight in kilograms (0 = unknown).
    pub weight: u32,
    pub blood_group: Option<BloodGroup>,
    pub chronic_conditions: Vec<String>,
    pub allergies: Vec<String>,
    pub notes: String,
    /// Sale ids. Kept for the record shape; nothing fills it.
    pub history: Vec<String>,
}

impl Client {
    /// "First Last", as shown in the client list.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive match on full name, or substring of the phone.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty()
            || self
                .full_name()
                .to_lowercase()
                .contains(&query.to_lowercase())
            || self.phone.contains(query)
    }
}

// =============================================================================
// Supplier
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupplierType {
    Wholesaler,
    Laboratory,
}

impl SupplierType {
    pub const fn label(&self) -> &'static str {
        match self {
            SupplierType::Wholesaler => "Grossiste",
            SupplierType::Laboratory => "Laboratoire",
        }
    }
}

impl Default for SupplierType {
    fn default() -> Self {
        SupplierType::Wholesaler
    }
}

impl FromStr for SupplierType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wholesaler" | "grossiste" => Ok(SupplierType::Wholesaler),
            "laboratory" | "laboratoire" | "lab" => Ok(SupplierType::Laboratory),
            other => Err(ValidationError::InvalidFormat {
                field: "type".to_string(),
                reason: format!("expected wholesaler or laboratory, got '{}'", other),
            }),
        }
    }
}

/// Position on the 0-100 demo delivery map (not real coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub supplier_type: SupplierType,
    /// Phone number.
    pub contact: String,
    pub email: String,
    pub address: String,
    pub location: GeoPoint,
    #[ts(as = "Option<String>")]
    pub next_delivery: Option<NaiveDateTime>,
}

// =============================================================================
// Prescription
// =============================================================================

/// Stage of a prescription on the board.
///
/// ## Workflow
/// ```text
/// PENDING ──► PREPARING ──► READY ──► COMPLETED
///   (no skipping, no going back; COMPLETED is terminal)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrescriptionStatus {
    Pending,
    Preparing,
    Ready,
    Completed,
}

impl PrescriptionStatus {
    /// Board columns, left to right.
    pub const ALL: [PrescriptionStatus; 4] = [
        PrescriptionStatus::Pending,
        PrescriptionStatus::Preparing,
        PrescriptionStatus::Ready,
        PrescriptionStatus::Completed,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            PrescriptionStatus::Pending => "En attente",
            PrescriptionStatus::Preparing => "En préparation",
            PrescriptionStatus::Ready => "Prête",
            PrescriptionStatus::Completed => "Retirée",
        }
    }
}

impl Default for PrescriptionStatus {
    fn default() -> Self {
        PrescriptionStatus::Pending
    }
}

impl fmt::Display for PrescriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: String,
    pub patient_name: String,
    pub doctor_name: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    /// Medication names as written on the prescription.
    pub medications: Vec<String>,
    pub status: PrescriptionStatus,
    /// Scan reference (URL or data URI).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

// =============================================================================
// Settings
// =============================================================================

/// Pharmacy-wide configuration (a single record).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PharmacySettings {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    /// Numéro d'Identification Fiscale.
    pub nif: String,
    pub daily_revenue_target: Money,
    /// Percentage (18 = 18%). Stored for the profile screen only.
    pub tax_rate: f64,
    /// Currency label used for display ("FCFA").
    pub currency: String,
}

impl PharmacySettings {
    /// The configured tax rate in basis points.
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_percentage(self.tax_rate)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(18.0);
        assert_eq!(rate.bps(), 1800);
        assert!((rate.percentage() - 18.0).abs() < 0.001);
        assert!(TaxRate::from_percentage(-3.0).is_zero());
    }

    #[test]
    fn test_medicine_draft_defaults() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 22).unwrap();
        let draft = Medicine::draft(today);
        assert_eq!(draft.expiry_date, today);
        assert_eq!(draft.min_stock, 10);
        assert_eq!(draft.supplier_id, "sup1");
        assert_eq!(draft.form, MedicineForm::Tablet);
        assert!(draft.purchase_price.is_zero());
        assert!(draft.description.is_empty());
        assert_eq!(draft.id.len(), 36);
    }

    #[test]
    fn test_medicine_search_matching() {
        let mut med = Medicine::draft(NaiveDate::from_ymd_opt(2024, 5, 22).unwrap());
        med.name = "Coartem 80/480".to_string();
        med.category = "Paludisme".to_string();

        assert!(med.matches("coartem"));
        assert!(med.matches("PALU"));
        assert!(med.matches(""));
        assert!(!med.matches("vitamine"));

        assert!(med.name_matches("80/480"));
        assert!(!med.name_matches("palu"));
    }

    #[test]
    fn test_medicine_form_parsing() {
        assert_eq!("Comprimé".parse::<MedicineForm>().unwrap(), MedicineForm::Tablet);
        assert_eq!("syrup".parse::<MedicineForm>().unwrap(), MedicineForm::Syrup);
        assert_eq!("GOUTTES".parse::<MedicineForm>().unwrap(), MedicineForm::Drop);
        assert!("poudre".parse::<MedicineForm>().is_err());
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::MobileMoney).unwrap(),
            "\"MOBILE_MONEY\""
        );
        assert_eq!(
            serde_json::to_string(&PrescriptionStatus::Preparing).unwrap(),
            "\"PREPARING\""
        );
        assert_eq!(serde_json::to_string(&BloodGroup::AbNeg).unwrap(), "\"AB-\"");
    }

    #[test]
    fn test_payment_method_parsing() {
        assert_eq!("cash".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cash);
        assert_eq!("CARD".parse::<PaymentMethod>().unwrap(), PaymentMethod::Card);
        assert_eq!(
            "mobile-money".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::MobileMoney
        );
        assert!("cheque".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_blood_group_parsing() {
        assert_eq!("o+".parse::<BloodGroup>().unwrap(), BloodGroup::OPos);
        assert_eq!("AB-".parse::<BloodGroup>().unwrap(), BloodGroup::AbNeg);
        assert!("C+".parse::<BloodGroup>().is_err());
    }

    #[test]
    fn test_sex_parsing() {
        assert_eq!("f".parse::<Sex>().unwrap(), Sex::F);
        assert_eq!(" M ".parse::<Sex>().unwrap(), Sex::M);
        assert!("X".parse::<Sex>().is_err());
    }

    #[test]
    fn test_prescription_status_order() {
        let mut sorted = PrescriptionStatus::ALL;
        sorted.sort();
        assert_eq!(sorted, PrescriptionStatus::ALL);
        assert_eq!(PrescriptionStatus::default(), PrescriptionStatus::Pending);
        assert_eq!(PrescriptionStatus::Ready.to_string(), "Prête");
    }

    #[test]
    fn test_supplier_type_field_is_named_type() {
        let supplier = Supplier {
            id: "sup9".to_string(),
            name: "Ubipharm".to_string(),
            supplier_type: SupplierType::Laboratory,
            contact: "22 00 00 00".to_string(),
            email: String::new(),
            address: String::new(),
            location: GeoPoint { lat: 50.0, lng: 50.0 },
            next_delivery: None,
        };
        let json = serde_json::to_value(&supplier).unwrap();
        assert_eq!(json["type"], "LABORATORY");
        assert!(json["nextDelivery"].is_null());
    }
}
