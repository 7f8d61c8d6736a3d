//! Client model
//!
//! A client is a party invoices are billed to. Contact fields are optional;
//! only the name is required.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ClientId;

/// A billable client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier
    pub id: ClientId,

    /// Client name
    pub name: String,

    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Contact phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Postal address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// When the client was created
    pub created_at: DateTime<Utc>,
}

impl Client {
    /// Create a new client
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ClientId::new(),
            name: name.into(),
            email: None,
            phone: None,
            address: None,
            created_at: Utc::now(),
        }
    }

    /// Validate the client
    pub fn validate(&self) -> Result<(), ClientValidationError> {
        if self.name.trim().is_empty() {
            return Err(ClientValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(ClientValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for clients
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for ClientValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Client name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Client name too long: {} characters (max 100)", len)
            }
        }
    }
}

impl std::error::Error for ClientValidationError {}
