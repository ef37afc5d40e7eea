use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{DocumentNumber, DocumentType, FullName, UserId, UserRole, Username};

/// Persisted user account. The password hash is never serialized.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub full_name: FullName,
    pub document_type: DocumentType,
    pub document_number: DocumentNumber,
    pub username: Username,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub active: bool,
    /// Set for seeded accounts whose credential must be rotated on first login.
    pub must_change_password: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewUser {
    pub full_name: FullName,
    pub document_type: DocumentType,
    pub document_number: DocumentNumber,
    pub username: Username,
    pub password_hash: String,
    pub role: UserRole,
    pub active: bool,
    pub must_change_password: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewUser {
    /// Builds an active administrator stamped with `now` for both timestamps.
    #[must_use]
    pub fn administrator(
        full_name: FullName,
        document_type: DocumentType,
        document_number: DocumentNumber,
        username: Username,
        password_hash: String,
        must_change_password: bool,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            full_name,
            document_type,
            document_number,
            username,
            password_hash,
            role: UserRole::Admin,
            active: true,
            must_change_password,
            created_at: now,
            updated_at: now,
        }
    }
}
