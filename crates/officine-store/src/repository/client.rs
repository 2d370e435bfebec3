//! # Client Repository
//!
//! Patient records. Clients are added and edited, never removed.

use tracing::debug;

use super::generate_id;
use crate::error::{StoreError, StoreResult};
use officine_core::validation::validate_client;
use officine_core::{Client, ValidationError};

#[derive(Debug, Clone, Default)]
pub struct ClientRepository {
    clients: Vec<Client>,
}

impl ClientRepository {
    pub fn new(clients: Vec<Client>) -> Self {
        ClientRepository { clients }
    }

    pub fn all(&self) -> &[Client] {
        &self.clients
    }

    pub fn get(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn require(&self, id: &str) -> StoreResult<&Client> {
        self.get(id).ok_or_else(|| StoreError::not_found("Client", id))
    }

    /// Registers a new client.
    ///
    /// The incoming id and history are ignored: a fresh id is assigned and
    /// the history starts empty.
    ///
    /// ## Returns
    /// The stored record, or a validation error when a name is missing.
    pub fn create(&mut self, mut client: Client) -> Result<&Client, ValidationError> {
        validate_client(&client)?;

        client.id = generate_id();
        client.history = Vec::new();

        debug!(id = %client.id, name = %client.full_name(), "Creating client");
        self.clients.push(client);

        let index = self.clients.len() - 1;
        Ok(&self.clients[index])
    }

    /// Replaces the client with the same id.
    ///
    /// ## Returns
    /// * `Ok(true)` - replaced
    /// * `Ok(false)` - no client has this id (nothing changes)
    pub fn update(&mut self, client: Client) -> Result<bool, ValidationError> {
        validate_client(&client)?;

        match self.clients.iter_mut().find(|c| c.id == client.id) {
            Some(slot) => {
                debug!(id = %client.id, "Updating client");
                *slot = client;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Full-name or phone search.
    pub fn search(&self, query: &str) -> Vec<&Client> {
        self.clients.iter().filter(|c| c.matches(query)).collect()
    }
}
