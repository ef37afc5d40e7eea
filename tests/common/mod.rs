//! Temporary, fully migrated SQLite databases for integration tests.

use std::path::PathBuf;

use clientdesk::db::{DbPool, establish_connection_pool};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub struct TestDb {
    pool: DbPool,
    path: PathBuf,
    // Dropped last so the pool closes its connections before the files go.
    _dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join(filename);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("open test database");

        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");
        drop(conn);

        Self {
            pool,
            path,
            _dir: dir,
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    #[allow(dead_code)]
    pub fn url(&self) -> &str {
        self.path.to_str().expect("utf-8 path")
    }
}
