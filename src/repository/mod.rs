use crate::{
    db::DbPool,
    domain::{
        client::{Client, NewClient},
        types::{ClientId, Username},
        user::{NewUser, User},
    },
    repository::errors::RepositoryResult,
};

pub mod client;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod user;

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

pub trait ClientReader {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
    /// All clients ordered by name, then id.
    fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
}

pub trait ClientWriter {
    fn create_clients(&self, new_clients: &[NewClient]) -> RepositoryResult<usize>;
}

pub trait UserReader {
    fn get_user_by_username(&self, username: &Username) -> RepositoryResult<Option<User>>;
    /// Checks for the username without decoding the stored row.
    fn username_exists(&self, username: &Username) -> RepositoryResult<bool>;
    fn count_users(&self) -> RepositoryResult<usize>;
}

pub trait UserWriter {
    /// Inserts a user; a taken username surfaces as
    /// [`errors::RepositoryError::UniqueViolation`].
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
}
