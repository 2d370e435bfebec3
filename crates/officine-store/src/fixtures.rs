//! # Fixture Data Set
//!
//! The state every session starts from: a small Lomé pharmacy with six
//! medicines, three patients, two wholesalers, two prescriptions on the
//! board, and two historical sales.
//!
//! ## Contents
//! ```text
//! ┌───────────────┬───────┬───────────────────────────────────────────────┐
//! │ Collection    │ Count │ Notes                                         │
//! ├───────────────┼───────┼───────────────────────────────────────────────┤
//! │ medicines     │   6   │ ids "1".."6"; three start at/below min stock  │
//! │ clients       │   3   │ ids c1..c3                                    │
//! │ suppliers     │   2   │ sup1 CAMEG, sup2 Laborex                      │
//! │ prescriptions │   2   │ p1 PENDING, p2 READY                          │
//! │ sales         │   2   │ s1 yesterday 12 500, s2 now 4 500             │
//! │ settings      │   1   │ daily target 150 000 FCFA                     │
//! └───────────────┴───────┴───────────────────────────────────────────────┘
//! ```
//!
//! Sale timestamps are relative to the `now` passed in so the dashboard
//! always has something to show for today and yesterday.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

use officine_core::{
    BloodGroup, Client, GeoPoint, Medicine, MedicineForm, Money, PaymentMethod,
    PharmacySettings, Prescription, PrescriptionStatus, Sale, Sex, Supplier, SupplierType,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture dates are valid")
}

fn date_time(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d)
        .and_hms_opt(h, min, 0)
        .expect("fixture times are valid")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// Settings
// =============================================================================

pub fn settings() -> PharmacySettings {
    PharmacySettings {
        name: "Pharmacie de l'Espoir".to_string(),
        address: "Bd du 13 Janvier, Lomé, Togo".to_string(),
        phone: "+228 22 21 00 00".to_string(),
        email: "contact@pharma-espoir.tg".to_string(),
        nif: "1000567890".to_string(),
        daily_revenue_target: Money::from_units(150_000),
        tax_rate: 0.0,
        currency: "FCFA".to_string(),
    }
}

// =============================================================================
// Medicines
// =============================================================================

#[allow(clippy::too_many_arguments)]
fn medicine(
    id: &str,
    name: &str,
    description: &str,
    dosage: &str,
    category: &str,
    form: MedicineForm,
    (purchase, sale): (i64, i64),
    (stock, min_stock): (i64, i64),
    expiry_date: NaiveDate,
    supplier_id: &str,
) -> Medicine {
    Medicine {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        dosage: dosage.to_string(),
        category: category.to_string(),
        form,
        purchase_price: Money::from_units(purchase),
        sale_price: Money::from_units(sale),
        stock,
        min_stock,
        expiry_date,
        supplier_id: supplier_id.to_string(),
    }
}

pub fn medicines() -> Vec<Medicine> {
    vec![
        medicine(
            "1",
            "Paracétamol",
            "Antalgique et antipyrétique",
            "500mg",
            "Douleur",
            MedicineForm::Tablet,
            (125, 200),
            (320, 50),
            date(2025, 12, 31),
            "sup1",
        ),
        medicine(
            "2",
            "Amoxicilline",
            "Antibiotique à large spectre",
            "500mg",
            "Antibiotique",
            MedicineForm::Tablet,
            (900, 1500),
            (45, 50),
            date(2024, 8, 15),
            "sup1",
        ),
        medicine(
            "3",
            "Coartem 80/480",
            "Antipaludéen (Artéméther/Luméfantrine)",
            "6 comp",
            "Paludisme",
            MedicineForm::Tablet,
            (2500, 3500),
            (120, 40),
            date(2026, 1, 20),
            "sup2",
        ),
        medicine(
            "4",
            "Vitamine C",
            "Complément alimentaire et fatigue",
            "1000mg",
            "Vitamines",
            MedicineForm::Tablet,
            (1000, 1800),
            (15, 20),
            date(2025, 5, 10),
            "sup2",
        ),
        medicine(
            "5",
            "Bronchokod",
            "Sirop pour toux grasse",
            "150ml",
            "Respiratoire",
            MedicineForm::Syrup,
            (1800, 2900),
            (8, 10),
            date(2024, 11, 1),
            "sup1",
        ),
        medicine(
            "6",
            "Efferalgan",
            "Paracétamol effervescent",
            "1g",
            "Douleur",
            MedicineForm::Tablet,
            (1100, 1700),
            (60, 20),
            date(2025, 9, 1),
            "sup1",
        ),
    ]
}

// =============================================================================
// Clients
// =============================================================================

pub fn clients() -> Vec<Client> {
    vec![
        Client {
            id: "c1".to_string(),
            first_name: "Kossi".to_string(),
            last_name: "Mensah".to_string(),
            sex: Sex::M,
            birth_date: Some(date(1979, 5, 12)),
            phone: "+228 90 12 34 56".to_string(),
            height: 175,
            weight: 82,
            blood_group: Some(BloodGroup::OPos),
            chronic_conditions: strings(&["Hypertension"]),
            allergies: strings(&["Pénicilline"]),
            notes: "Patient régulier, vérifier tension.".to_string(),
            history: Vec::new(),
        },
        Client {
            id: "c2".to_string(),
            first_name: "Afi".to_string(),
            last_name: "Akakpo".to_string(),
            sex: Sex::F,
            birth_date: Some(date(1992, 11, 23)),
            phone: "+228 91 88 77 66".to_string(),
            height: 162,
            weight: 65,
            blood_group: Some(BloodGroup::APos),
            chronic_conditions: Vec::new(),
            allergies: Vec::new(),
            notes: String::new(),
            history: Vec::new(),
        },
        Client {
            id: "c3".to_string(),
            first_name: "Kodjo".to_string(),
            last_name: "Lawson".to_string(),
            sex: Sex::M,
            birth_date: Some(date(1965, 2, 10)),
            phone: "+228 70 45 12 23".to_string(),
            height: 180,
            weight: 90,
            blood_group: Some(BloodGroup::BNeg),
            chronic_conditions: strings(&["Diabète Type 2"]),
            allergies: Vec::new(),
            notes: "Suit un traitement insuline.".to_string(),
            history: Vec::new(),
        },
    ]
}

// =============================================================================
// Suppliers
// =============================================================================

pub fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: "sup1".to_string(),
            name: "CAMEG Togo".to_string(),
            supplier_type: SupplierType::Wholesaler,
            contact: "22 21 00 00".to_string(),
            email: "contact@cameg.tg".to_string(),
            address: "Tokoin, Lomé".to_string(),
            location: GeoPoint {
                lat: 30.0,
                lng: 20.0,
            },
            next_delivery: Some(date_time(2024, 5, 25, 10, 0)),
        },
        Supplier {
            id: "sup2".to_string(),
            name: "Laborex Togo".to_string(),
            supplier_type: SupplierType::Wholesaler,
            contact: "22 21 44 55".to_string(),
            email: "sales@laborex.tg".to_string(),
            address: "Zone Industrielle, Lomé".to_string(),
            location: GeoPoint {
                lat: 70.0,
                lng: 80.0,
            },
            next_delivery: Some(date_time(2024, 5, 24, 14, 30)),
        },
    ]
}

// =============================================================================
// Prescriptions
// =============================================================================

pub fn prescriptions() -> Vec<Prescription> {
    vec![
        Prescription {
            id: "p1".to_string(),
            patient_name: "Kossi Mensah".to_string(),
            doctor_name: "Dr. Gbeassor".to_string(),
            date: date(2024, 5, 20),
            medications: strings(&["Amoxicilline", "Paracétamol"]),
            status: PrescriptionStatus::Pending,
            image: None,
        },
        Prescription {
            id: "p2".to_string(),
            patient_name: "Sophie Gnassingbé".to_string(),
            doctor_name: "Dr. Almeida".to_string(),
            date: date(2024, 5, 21),
            medications: strings(&["Coartem 80/480"]),
            status: PrescriptionStatus::Ready,
            image: None,
        },
    ]
}

// =============================================================================
// Sales
// =============================================================================

fn historical_sale(id: &str, date: DateTime<Utc>, total: i64, method: PaymentMethod) -> Sale {
    Sale {
        id: id.to_string(),
        date,
        items: Vec::new(),
        total: Money::from_units(total),
        tax: Money::zero(),
        discount: Money::zero(),
        payment_method: method,
        cashier_id: "user1".to_string(),
    }
}

/// Two itemless sales: yesterday and `now`.
pub fn sales(now: DateTime<Utc>) -> Vec<Sale> {
    vec![
        historical_sale("s1", now - Duration::days(1), 12_500, PaymentMethod::Cash),
        historical_sale("s2", now, 4_500, PaymentMethod::MobileMoney),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_counts() {
        assert_eq!(medicines().len(), 6);
        assert_eq!(clients().len(), 3);
        assert_eq!(suppliers().len(), 2);
        assert_eq!(prescriptions().len(), 2);
        assert_eq!(sales(Utc::now()).len(), 2);
    }

    #[test]
    fn test_fixture_wire_shape() {
        let json = serde_json::to_value(&medicines()[4]).unwrap();
        assert_eq!(json["name"], "Bronchokod");
        assert_eq!(json["form"], "SYRUP");
        assert_eq!(json["salePrice"], 2900);
        assert_eq!(json["expiryDate"], "2024-11-01");

        let json = serde_json::to_value(&suppliers()[1]).unwrap();
        assert_eq!(json["nextDelivery"], "2024-05-24T14:30:00");
    }
}
