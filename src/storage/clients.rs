//! Client repository for JSON storage
//!
//! Manages loading and saving clients to clients.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BizbookError;
use crate::models::{Client, ClientId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable client data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ClientData {
    pub clients: Vec<Client>,
}

/// Repository for client persistence
pub struct ClientRepository {
    path: PathBuf,
    clients: RwLock<HashMap<ClientId, Client>>,
}

impl ClientRepository {
    /// Create a new client repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            clients: RwLock::new(HashMap::new()),
        }
    }

    /// Load clients from disk
    pub fn load(&self) -> Result<(), BizbookError> {
        let file_data: ClientData = read_json(&self.path)?;

        let mut clients = self
            .clients
            .write()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        clients.clear();
        for client in file_data.clients {
            clients.insert(client.id, client);
        }

        Ok(())
    }

    /// Save clients to disk
    pub fn save(&self) -> Result<(), BizbookError> {
        let clients = self
            .clients
            .read()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut data = ClientData {
            clients: clients.values().cloned().collect(),
        };
        data.clients.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        write_json_atomic(&self.path, &data)
    }

    /// Insert or replace a client
    pub fn upsert(&self, client: Client) -> Result<(), BizbookError> {
        let mut clients = self
            .clients
            .write()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        clients.insert(client.id, client);
        Ok(())
    }

    /// Get a client by ID
    pub fn get(&self, id: ClientId) -> Result<Option<Client>, BizbookError> {
        let clients = self
            .clients
            .read()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(clients.get(&id).cloned())
    }

    /// Get a client by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Client>, BizbookError> {
        let clients = self
            .clients
            .read()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(clients
            .values()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    /// Get all clients, most recently created first
    pub fn get_all(&self) -> Result<Vec<Client>, BizbookError> {
        let clients = self
            .clients
            .read()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut all: Vec<Client> = clients.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    /// Remove a client, returning whether it existed
    pub fn remove(&self, id: ClientId) -> Result<bool, BizbookError> {
        let mut clients = self
            .clients
            .write()
            .map_err(|e| BizbookError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(clients.remove(&id).is_some())
    }
}
