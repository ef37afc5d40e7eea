//! One-shot seeding of the default administrator account.

use chrono::Utc;
use log::{info, warn};
use thiserror::Error;

use crate::db::establish_single_connection_pool;
use crate::domain::types::{
    DocumentNumber, DocumentType, FullName, TypeConstraintError, UserId, Username,
};
use crate::domain::user::NewUser;
use crate::models::config::AdminSettings;
use crate::password::hash_password;
use crate::repository::errors::RepositoryError;
use crate::repository::{DieselRepository, UserReader, UserWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The administrator was inserted with this id.
    Created(UserId),
    /// An account with the configured username is already present.
    AlreadyExists,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("could not connect to the user store: {0}")]
    Connection(String),

    #[error("could not look up the administrator: {0}")]
    Query(String),

    #[error("could not hash the administrator password: {0}")]
    HashComputation(String),

    #[error("could not insert the administrator: {0}")]
    Insert(String),

    #[error("invalid administrator settings: {0}")]
    InvalidSettings(String),
}

fn lookup_error(err: RepositoryError) -> BootstrapError {
    match err {
        RepositoryError::ConnectionError(msg) => BootstrapError::Connection(msg),
        other => BootstrapError::Query(other.to_string()),
    }
}

fn insert_error(err: RepositoryError) -> BootstrapError {
    match err {
        RepositoryError::ConnectionError(msg) => BootstrapError::Connection(msg),
        other => BootstrapError::Insert(other.to_string()),
    }
}

/// Validates the identity fields of the configured administrator.
fn admin_identity(
    settings: &AdminSettings,
) -> Result<(Username, FullName, DocumentType, DocumentNumber), BootstrapError> {
    let invalid = |field: &str, err: TypeConstraintError| {
        BootstrapError::InvalidSettings(format!("{field}: {err}"))
    };

    Ok((
        Username::new(settings.username.as_str()).map_err(|e| invalid("username", e))?,
        FullName::new(settings.full_name.as_str()).map_err(|e| invalid("full_name", e))?,
        DocumentType::new(settings.document_type.as_str())
            .map_err(|e| invalid("document_type", e))?,
        DocumentNumber::new(settings.document_number.as_str())
            .map_err(|e| invalid("document_number", e))?,
    ))
}

/// Creates the administrator unless an account with its username exists.
///
/// A unique-constraint violation on insert means a concurrent run won the
/// race and is reported as [`BootstrapOutcome::AlreadyExists`].
pub fn ensure_admin<R>(repo: &R, settings: &AdminSettings) -> Result<BootstrapOutcome, BootstrapError>
where
    R: UserReader + UserWriter + ?Sized,
{
    let (username, full_name, document_type, document_number) = admin_identity(settings)?;

    if repo.username_exists(&username).map_err(lookup_error)? {
        info!("User `{username}` already exists, nothing to do");
        return Ok(BootstrapOutcome::AlreadyExists);
    }

    let password_hash = hash_password(&settings.password, settings.bcrypt_cost)
        .map_err(|e| BootstrapError::HashComputation(e.to_string()))?;

    let new_admin = NewUser::administrator(
        full_name,
        document_type,
        document_number,
        username,
        password_hash,
        settings.force_password_change,
        Utc::now().naive_utc(),
    );

    match repo.create_user(&new_admin) {
        Ok(user) => {
            info!("Created administrator `{}` with id {}", user.username, user.id);
            Ok(BootstrapOutcome::Created(user.id))
        }
        Err(RepositoryError::UniqueViolation(msg)) => {
            warn!(
                "User `{}` appeared while seeding ({msg}), treating as existing",
                new_admin.username
            );
            Ok(BootstrapOutcome::AlreadyExists)
        }
        Err(err) => Err(insert_error(err)),
    }
}

/// Opens the store at `database_url` and runs [`ensure_admin`] against it.
///
/// The single pooled connection is released when this function returns,
/// whatever the outcome.
pub fn bootstrap_admin(
    database_url: &str,
    settings: &AdminSettings,
) -> Result<BootstrapOutcome, BootstrapError> {
    let pool = establish_single_connection_pool(database_url)
        .map_err(|e| BootstrapError::Connection(e.to_string()))?;
    let repo = DieselRepository::new(pool);

    ensure_admin(&repo, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::UserRole;
    use crate::domain::user::User;
    use crate::password::verify_password;
    use crate::repository::mock::MockRepository;

    fn fast_settings() -> AdminSettings {
        AdminSettings {
            bcrypt_cost: 4,
            ..AdminSettings::default()
        }
    }

    fn stored(new_user: &NewUser, id: i32) -> User {
        User {
            id: UserId::new(id).unwrap(),
            full_name: new_user.full_name.clone(),
            document_type: new_user.document_type.clone(),
            document_number: new_user.document_number.clone(),
            username: new_user.username.clone(),
            password_hash: new_user.password_hash.clone(),
            role: new_user.role,
            active: new_user.active,
            must_change_password: new_user.must_change_password,
            created_at: new_user.created_at,
            updated_at: new_user.updated_at,
        }
    }

    #[test]
    fn creates_admin_when_missing() {
        let mut repo = MockRepository::new();
        repo.expect_username_exists()
            .withf(|username| username.as_str() == "admin")
            .times(1)
            .returning(|_| Ok(false));
        repo.expect_create_user()
            .withf(|new_user| {
                new_user.role == UserRole::Admin
                    && new_user.active
                    && new_user.must_change_password
                    && new_user.full_name.as_str() == "Administrador"
                    && new_user.document_type.as_str() == "CC"
                    && new_user.document_number.as_str() == "1234567890"
                    && new_user.password_hash != "admin123"
                    && verify_password("admin123", &new_user.password_hash).unwrap_or(false)
            })
            .times(1)
            .returning(|new_user| Ok(stored(new_user, 1)));

        let outcome = ensure_admin(&repo, &fast_settings()).unwrap();

        assert_eq!(outcome, BootstrapOutcome::Created(UserId::new(1).unwrap()));
    }

    #[test]
    fn existing_admin_is_left_alone() {
        let mut repo = MockRepository::new();
        repo.expect_username_exists()
            .withf(|username| username.as_str() == "admin")
            .returning(|_| Ok(true));
        repo.expect_get_user_by_username().never();
        repo.expect_create_user().never();

        let outcome = ensure_admin(&repo, &fast_settings()).unwrap();

        assert_eq!(outcome, BootstrapOutcome::AlreadyExists);
    }

    #[test]
    fn unique_violation_on_insert_counts_as_existing() {
        let mut repo = MockRepository::new();
        repo.expect_username_exists().returning(|_| Ok(false));
        repo.expect_create_user().times(1).returning(|_| {
            Err(RepositoryError::UniqueViolation(
                "UNIQUE constraint failed: users.username".to_string(),
            ))
        });

        let outcome = ensure_admin(&repo, &fast_settings()).unwrap();

        assert_eq!(outcome, BootstrapOutcome::AlreadyExists);
    }

    #[test]
    fn lookup_failure_is_a_query_error() {
        let mut repo = MockRepository::new();
        repo.expect_username_exists()
            .returning(|_| Err(RepositoryError::DatabaseError("no such table: users".into())));
        repo.expect_create_user().never();

        let result = ensure_admin(&repo, &fast_settings());

        assert!(matches!(result, Err(BootstrapError::Query(_))));
    }

    #[test]
    fn connection_loss_is_a_connection_error() {
        let mut repo = MockRepository::new();
        repo.expect_username_exists()
            .returning(|_| Err(RepositoryError::ConnectionError("timed out".into())));

        let result = ensure_admin(&repo, &fast_settings());

        assert!(matches!(result, Err(BootstrapError::Connection(_))));
    }

    #[test]
    fn bad_cost_is_a_hash_error_and_skips_insert() {
        let mut repo = MockRepository::new();
        repo.expect_username_exists().returning(|_| Ok(false));
        repo.expect_create_user().never();

        let settings = AdminSettings {
            bcrypt_cost: 99,
            ..AdminSettings::default()
        };
        let result = ensure_admin(&repo, &settings);

        assert!(matches!(result, Err(BootstrapError::HashComputation(_))));
    }

    #[test]
    fn insert_failure_is_an_insert_error() {
        let mut repo = MockRepository::new();
        repo.expect_username_exists().returning(|_| Ok(false));
        repo.expect_create_user().returning(|_| {
            Err(RepositoryError::ConstraintViolation(
                "Check constraint violation".to_string(),
            ))
        });

        let result = ensure_admin(&repo, &fast_settings());

        assert!(matches!(result, Err(BootstrapError::Insert(_))));
    }

    #[test]
    fn blank_username_is_rejected_before_touching_the_store() {
        let mut repo = MockRepository::new();
        repo.expect_username_exists().never();
        repo.expect_create_user().never();

        let settings = AdminSettings {
            username: "  ".to_string(),
            ..fast_settings()
        };

        assert!(matches!(
            ensure_admin(&repo, &settings),
            Err(BootstrapError::InvalidSettings(_))
        ));
    }
}
