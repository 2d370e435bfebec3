//! # Client Metrics
//!
//! Derived, read-only figures for the patient card. Computed on every read,
//! never stored on [`Client`].

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Client;

/// Full years between `birth_date` and `today`.
///
/// One is subtracted while this year's birthday has not been reached yet.
/// A birth date in the future yields 0.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Body-mass index: weight (kg) / height (m)².
///
/// `None` when either measure is unknown (zero).
pub fn bmi(weight_kg: u32, height_cm: u32) -> Option<f64> {
    if weight_kg == 0 || height_cm == 0 {
        return None;
    }
    let height_m = height_cm as f64 / 100.0;
    Some(weight_kg as f64 / (height_m * height_m))
}

/// BMI rendered with one decimal, as on the patient card.
pub fn format_bmi(value: f64) -> String {
    format!("{:.1}", value)
}

impl Client {
    /// Age in full years, `None` without a birth date.
    pub fn age(&self, today: NaiveDate) -> Option<u32> {
        self.birth_date.map(|birth| age_on(birth, today))
    }

    pub fn bmi(&self) -> Option<f64> {
        bmi(self.weight, self.height)
    }
}

/// Client record plus its derived figures, for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ClientCard {
    #[serde(flatten)]
    pub client: Client,
    pub age: Option<u32>,
    /// One decimal ("26.8").
    pub bmi: Option<String>,
}

impl ClientCard {
    pub fn new(client: Client, today: NaiveDate) -> Self {
        let age = client.age(today);
        let bmi = client.bmi().map(format_bmi);
        ClientCard { client, age, bmi }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BloodGroup, Sex};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let birth = date(1979, 5, 12);
        assert_eq!(age_on(birth, date(2024, 5, 11)), 44);
        assert_eq!(age_on(birth, date(2024, 5, 12)), 45);
        assert_eq!(age_on(birth, date(2024, 12, 31)), 45);
    }

    #[test]
    fn test_age_future_birth_date_is_zero() {
        assert_eq!(age_on(date(2030, 1, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_bmi() {
        // 82 / 1.75² = 26.77...
        let value = bmi(82, 175).unwrap();
        assert_eq!(format_bmi(value), "26.8");
        assert_eq!(bmi(0, 175), None);
        assert_eq!(bmi(82, 0), None);
    }

    #[test]
    fn test_client_card() {
        let client = Client {
            id: "c2".to_string(),
            first_name: "Afi".to_string(),
            last_name: "Akakpo".to_string(),
            sex: Sex::F,
            birth_date: Some(date(1992, 11, 23)),
            phone: "+228 91 88 77 66".to_string(),
            height: 162,
            weight: 65,
            blood_group: Some(BloodGroup::APos),
            chronic_conditions: vec![],
            allergies: vec![],
            notes: String::new(),
            history: vec![],
        };

        let card = ClientCard::new(client, date(2024, 5, 22));
        assert_eq!(card.age, Some(31));
        assert_eq!(card.bmi.as_deref(), Some("24.8"));

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["firstName"], "Afi");
        assert_eq!(json["bmi"], "24.8");
    }
}
