//! Helpers for integration tests.

use chrono::{Duration, NaiveDateTime, Utc};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pushkind_catalog::db::{DbPool, establish_connection_pool};
use pushkind_catalog::domain::product::NewProduct;
use pushkind_catalog::domain::types::{
    CategoryName, ProductDescription, ProductName, ProductPrice, ProductStock,
};
use tempfile::NamedTempFile;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

/// A timestamp `seconds` after a fixed point in the past.
#[allow(dead_code)]
pub fn timestamp(seconds: i64) -> NaiveDateTime {
    Utc::now().naive_utc() - Duration::days(1) + Duration::seconds(seconds)
}

#[allow(dead_code)]
pub fn new_product(name: &str, category: &str, is_active: bool, created_at: NaiveDateTime) -> NewProduct {
    NewProduct {
        name: ProductName::new(name).expect("valid name"),
        description: ProductDescription::new(format!("{name} description"))
            .expect("valid description"),
        price: ProductPrice::new(9.99).expect("valid price"),
        stock: ProductStock::new(10).expect("valid stock"),
        image_url: None,
        category: CategoryName::new(category).expect("valid category"),
        is_active,
        created_at,
    }
}
