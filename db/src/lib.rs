#[macro_use]
extern crate diesel;
#[macro_use]
extern crate log;

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use errors::Error;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type Connection = PooledConnection<ConnectionManager<SqliteConnection>>;
pub mod models;
pub mod schema;
pub mod visibility;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const MEMORY_DATABASE: &str = ":memory:";

/// Per-connection pragmas. SQLite leaves foreign keys off unless asked, and
/// concurrent vote updates need to wait on the write lock instead of failing.
#[derive(Debug)]
struct ConnectionOptions {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

pub fn get_conn(pool: &DbPool) -> Result<Connection, Error> {
    pool.get().map_err(|err| {
        error!("Failed to get connection - {}", err.to_string());
        err.into()
    })
}

pub fn new_pool(database_url: &str, max_size: u32) -> Result<DbPool, Error> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(ConnectionOptions {
            busy_timeout: Duration::from_secs(5),
        }))
        .build(manager)
        .map_err(|err| {
            error!("Failed to create db pool - {}", err.to_string());
            err.into()
        })
}

/// A single-connection pool over a private in-memory database with the schema
/// applied. Every call gets a fresh, empty database.
pub fn new_memory_pool() -> Result<DbPool, Error> {
    let pool = new_pool(MEMORY_DATABASE, 1)?;
    let mut conn = get_conn(&pool)?;
    run_migrations(&mut conn)?;

    Ok(pool)
}

pub fn run_migrations(conn: &mut SqliteConnection) -> Result<(), Error> {
    let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|err| {
        error!("Failed to run migrations - {}", err.to_string());
        Error::MigrationError(err.to_string())
    })?;

    for version in applied {
        info!("Applied migration {}", version);
    }

    Ok(())
}
