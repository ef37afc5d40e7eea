use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientId, ClientType};

/// Client record as supplied by the store. Read-only for presentation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub client_type: ClientType,
    pub name: Option<String>,
    /// Only meaningful for [`ClientType::Organization`].
    pub assistance_code: Option<String>,
    pub internal_code: Option<String>,
    /// Email address or phone number; never validated.
    pub contact: Option<String>,
    pub address: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Client {
    pub fn is_organization(&self) -> bool {
        self.client_type == ClientType::Organization
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewClient {
    pub client_type: ClientType,
    pub name: Option<String>,
    pub assistance_code: Option<String>,
    pub internal_code: Option<String>,
    pub contact: Option<String>,
    pub address: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl NewClient {
    #[must_use]
    pub fn new(
        client_type: ClientType,
        name: Option<String>,
        assistance_code: Option<String>,
        internal_code: Option<String>,
        contact: Option<String>,
        address: Option<String>,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            client_type,
            name: trimmed(name),
            assistance_code: trimmed(assistance_code),
            internal_code: trimmed(internal_code),
            contact: trimmed(contact),
            address: trimmed(address),
            created_at,
        }
    }
}
