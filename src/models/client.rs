use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::client::{Client as DomainClient, NewClient as DomainNewClient};
use crate::domain::types::{ClientId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clients)]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub id: i32,
    pub client_type: String,
    pub name: Option<String>,
    pub assistance_code: Option<String>,
    pub internal_code: Option<String>,
    pub contact: Option<String>,
    pub address: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of [`Client`].
pub struct NewClient<'a> {
    pub client_type: &'a str,
    pub name: Option<&'a str>,
    pub assistance_code: Option<&'a str>,
    pub internal_code: Option<&'a str>,
    pub contact: Option<&'a str>,
    pub address: Option<&'a str>,
    pub created_at: Option<NaiveDateTime>,
}

impl TryFrom<Client> for DomainClient {
    type Error = TypeConstraintError;

    fn try_from(client: Client) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ClientId::try_from(client.id)?,
            client_type: client.client_type.parse()?,
            name: client.name,
            assistance_code: client.assistance_code,
            internal_code: client.internal_code,
            contact: client.contact,
            address: client.address,
            // Timestamps are stored as naive UTC.
            created_at: client.created_at.map(|dt| dt.and_utc()),
        })
    }
}

impl<'a> From<&'a DomainNewClient> for NewClient<'a> {
    fn from(client: &'a DomainNewClient) -> Self {
        Self {
            client_type: client.client_type.as_str(),
            name: client.name.as_deref(),
            assistance_code: client.assistance_code.as_deref(),
            internal_code: client.internal_code.as_deref(),
            contact: client.contact.as_deref(),
            address: client.address.as_deref(),
            created_at: client.created_at.map(|dt| dt.naive_utc()),
        }
    }
}
