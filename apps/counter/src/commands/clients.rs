//! # Client Commands
//!
//! Patient registry: list/search, patient card, creation, edits.
//!
//! Age and BMI are derived when a card is built and never stored.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use officine_core::client::ClientCard;
use officine_core::{BloodGroup, Client, Sex};

use crate::error::ApiError;
use crate::state::SessionState;

/// The "new client" form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub first_name: String,
    pub last_name: String,
    pub sex: Sex,
    pub birth_date: Option<NaiveDate>,
    pub phone: String,
    pub height: u32,
    pub weight: u32,
    pub blood_group: Option<BloodGroup>,
    pub chronic_conditions: Vec<String>,
    pub allergies: Vec<String>,
    pub notes: String,
}

impl From<NewClient> for Client {
    fn from(form: NewClient) -> Self {
        Client {
            id: String::new(),
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            sex: form.sex,
            birth_date: form.birth_date,
            phone: form.phone,
            height: form.height,
            weight: form.weight,
            blood_group: form.blood_group,
            chronic_conditions: form.chronic_conditions,
            allergies: form.allergies,
            notes: form.notes,
            history: Vec::new(),
        }
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Client list, optionally filtered by full name or phone.
pub fn list_clients(session: &SessionState, query: Option<&str>) -> Vec<ClientCard> {
    debug!(query = ?query, "list_clients command");
    let today = today();
    session.with_session(|s| {
        s.pharmacy
            .clients()
            .search(query.unwrap_or_default())
            .into_iter()
            .map(|c| ClientCard::new(c.clone(), today))
            .collect()
    })
}

/// The patient card for one client.
///
/// ## Errors
/// * `NOT_FOUND` - no client has this id
pub fn get_client(session: &SessionState, id: &str) -> Result<ClientCard, ApiError> {
    debug!(id = %id, "get_client command");
    let today = today();
    session.with_session(|s| {
        let client = s.pharmacy.clients().require(id)?;
        Ok(ClientCard::new(client.clone(), today))
    })
}

/// Registers a new client. First and last name are required.
pub fn create_client(session: &SessionState, form: NewClient) -> Result<ClientCard, ApiError> {
    debug!("create_client command");
    let today = today();

    let result = session.with_session_mut(|s| {
        s.pharmacy
            .clients_mut()
            .create(Client::from(form))
            .map(|c| c.clone())
    });

    match result {
        Ok(client) => {
            info!(id = %client.id, name = %client.full_name(), "Client created");
            Ok(ClientCard::new(client, today))
        }
        Err(e) => {
            warn!(error = %e, "Client form rejected");
            Err(e.into())
        }
    }
}

/// Saves an edited client record.
///
/// ## Returns
/// `false` when no client has this id (nothing changes).
pub fn update_client(session: &SessionState, client: Client) -> Result<bool, ApiError> {
    debug!(id = %client.id, "update_client command");
    let id = client.id.clone();
    let updated = session.with_session_mut(|s| s.pharmacy.clients_mut().update(client))?;
    if updated {
        info!(id = %id, "Client updated");
    }
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn session() -> SessionState {
        SessionState::with_fixtures(Utc::now())
    }

    #[test]
    fn test_card_has_derived_fields() {
        let card = get_client(&session(), "c1").unwrap();
        assert_eq!(card.bmi.as_deref(), Some("26.8"));
        assert!(card.age.is_some());
    }

    #[test]
    fn test_unknown_client() {
        let err = get_client(&session(), "c404").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_search() {
        let session = session();
        assert_eq!(list_clients(&session, None).len(), 3);
        assert_eq!(list_clients(&session, Some("afi akakpo"))[0].client.id, "c2");
    }

    #[test]
    fn test_create_requires_names() {
        let session = session();
        let err = create_client(
            &session,
            NewClient {
                first_name: "Ama".to_string(),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let card = create_client(
            &session,
            NewClient {
                first_name: "Ama".to_string(),
                last_name: "Kpodar".to_string(),
                sex: Sex::F,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(!card.client.id.is_empty());
        assert!(card.client.history.is_empty());
        assert_eq!(card.bmi, None);
        assert_eq!(list_clients(&session, None).len(), 4);
    }

    #[test]
    fn test_update() {
        let session = session();
        let mut client = get_client(&session, "c3").unwrap().client;
        client.notes = "Allergie saisonnière".to_string();

        assert!(update_client(&session, client.clone()).unwrap());
        assert_eq!(get_client(&session, "c3").unwrap().client.notes, "Allergie saisonnière");

        client.id = "c404".to_string();
        assert!(!update_client(&session, client).unwrap());
    }
}
