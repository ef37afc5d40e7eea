//! Diesel models representing user accounts.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::types::{
    DocumentNumber, DocumentType, FullName, TypeConstraintError, UserId, Username,
};
use crate::domain::user::{NewUser as DomainNewUser, User as DomainUser};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
/// Diesel model for [`crate::domain::user::User`].
pub struct User {
    pub id: i32,
    pub full_name: String,
    pub document_type: String,
    pub document_number: String,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub active: bool,
    pub must_change_password: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
/// Insertable form of [`User`].
pub struct NewUser<'a> {
    pub full_name: &'a str,
    pub document_type: &'a str,
    pub document_number: &'a str,
    pub username: &'a str,
    pub password_hash: &'a str,
    pub role: &'a str,
    pub active: bool,
    pub must_change_password: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<User> for DomainUser {
    type Error = TypeConstraintError;

    fn try_from(user: User) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::try_from(user.id)?,
            full_name: FullName::new(user.full_name)?,
            document_type: DocumentType::new(user.document_type)?,
            document_number: DocumentNumber::new(user.document_number)?,
            username: Username::new(user.username)?,
            password_hash: user.password_hash,
            role: user.role.parse()?,
            active: user.active,
            must_change_password: user.must_change_password,
            created_at: user.created_at,
            updated_at: user.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewUser> for NewUser<'a> {
    fn from(user: &'a DomainNewUser) -> Self {
        Self {
            full_name: user.full_name.as_str(),
            document_type: user.document_type.as_str(),
            document_number: user.document_number.as_str(),
            username: user.username.as_str(),
            password_hash: user.password_hash.as_str(),
            role: user.role.as_str(),
            active: user.active,
            must_change_password: user.must_change_password,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
