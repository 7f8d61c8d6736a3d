//! Client service
//!
//! Business logic for client management.

use crate::error::{BizbookError, BizbookResult};
use crate::models::{Client, ClientId};
use crate::storage::Storage;

/// Service for client management
pub struct ClientService<'a> {
    storage: &'a Storage,
}

impl<'a> ClientService<'a> {
    /// Create a new client service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new client
    pub fn create(
        &self,
        name: &str,
        email: Option<String>,
        phone: Option<String>,
        address: Option<String>,
    ) -> BizbookResult<Client> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BizbookError::Validation("Client name cannot be empty".into()));
        }

        if self.storage.clients.get_by_name(name)?.is_some() {
            return Err(BizbookError::Duplicate {
                entity_type: "Client",
                identifier: name.to_string(),
            });
        }

        let mut client = Client::new(name);
        client.email = email;
        client.phone = phone;
        client.address = address;

        client
            .validate()
            .map_err(|e| BizbookError::Validation(e.to_string()))?;

        self.storage.clients.upsert(client.clone())?;
        self.storage.clients.save()?;

        Ok(client)
    }

    /// Get a client by ID
    pub fn get(&self, id: ClientId) -> BizbookResult<Option<Client>> {
        self.storage.clients.get(id)
    }

    /// Find a client by name or ID string
    pub fn find(&self, identifier: &str) -> BizbookResult<Option<Client>> {
        if let Some(client) = self.storage.clients.get_by_name(identifier)? {
            return Ok(Some(client));
        }

        if let Ok(id) = identifier.parse::<ClientId>() {
            return self.storage.clients.get(id);
        }

        Ok(None)
    }

    /// Find a client, failing if it does not exist
    pub fn require(&self, identifier: &str) -> BizbookResult<Client> {
        self.find(identifier)?
            .ok_or_else(|| BizbookError::client_not_found(identifier))
    }

    /// List all clients, most recently created first
    pub fn list(&self) -> BizbookResult<Vec<Client>> {
        self.storage.clients.get_all()
    }

    /// Delete a client by name or ID string
    pub fn delete(&self, identifier: &str) -> BizbookResult<()> {
        let client = self.require(identifier)?;
        self.storage.clients.remove(client.id)?;
        self.storage.clients.save()
    }
}
