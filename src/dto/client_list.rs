//! Rows shown on the client list page.

use serde::Serialize;

use crate::domain::client::Client;
use crate::domain::types::ClientId;
use crate::dto::client_view::{TypeBadge, or_fallback};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClientRow {
    pub id: ClientId,
    pub name: String,
    pub badge: TypeBadge,
}

impl From<&Client> for ClientRow {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id,
            name: or_fallback(client.name.as_deref()),
            badge: TypeBadge::for_type(client.client_type),
        }
    }
}

/// Aggregated data required to render the index page.
#[derive(Debug, Serialize)]
pub struct ClientListData {
    pub clients: Vec<ClientRow>,
}
