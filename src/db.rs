//! Database connection pool and migration management.
//!
//! This module provides utilities for:
//! - Creating and managing a SQLite connection pool
//! - Running database migrations automatically
//! - Seeding the flight catalog with sample data

use std::{str::FromStr, time::Duration};

use chrono::NaiveDate;
use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};

/// Type alias for SQLite connection pool.
///
/// Instead of writing `Pool<Sqlite>` everywhere, we can use `DbPool`.
pub type DbPool = Pool<Sqlite>;

/// Create a new SQLite connection pool.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string (`sqlite://flights.db`, `sqlite::memory:`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Configuration
///
/// - The database file is created if it does not exist
/// - Foreign keys are enforced
/// - Writers wait up to 5 seconds for a competing write lock before failing
///
/// An in-memory database lives inside a single connection, so callers using
/// `sqlite::memory:` should pass `max_connections = 1`.
///
/// # Errors
///
/// Returns an error if the connection string is invalid or the database
/// cannot be opened.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let mut options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    if !database_url.contains(":memory:") {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        // An idle in-memory connection must never be reaped, it holds the whole database
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Run database migrations from the `migrations/` directory.
///
/// Migrations are tracked in the `_sqlx_migrations` table, so each migration runs only once.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // The macro reads migrations at compile time from ./migrations directory
    sqlx::migrate!("./migrations").run(pool).await
}

/// A flight row inserted by [`seed_sample_flights`].
struct SampleFlight {
    flight_number: &'static str,
    departure_airport: &'static str,
    arrival_location: &'static str,
    departure: (i32, u32, u32, u32, u32),
    arrival: (i32, u32, u32, u32, u32),
    cost_cents: i64,
}

const SAMPLE_FLIGHTS: [SampleFlight; 2] = [
    SampleFlight {
        flight_number: "AB123",
        departure_airport: "JFK",
        arrival_location: "LAX",
        departure: (2024, 11, 5, 14, 0),
        arrival: (2024, 11, 5, 17, 30),
        cost_cents: 29999,
    },
    SampleFlight {
        flight_number: "CD456",
        departure_airport: "JFK",
        arrival_location: "SFO",
        departure: (2024, 11, 6, 16, 0),
        arrival: (2024, 11, 6, 19, 45),
        cost_cents: 34999,
    },
];

/// Insert the sample flights if the catalog is empty.
///
/// Returns the number of flights inserted (zero when the catalog already
/// had rows).
pub async fn seed_sample_flights(pool: &DbPool) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM flights")
        .fetch_one(&mut *tx)
        .await?;

    if existing > 0 {
        tx.rollback().await?;
        return Ok(0);
    }

    let mut inserted = 0;
    for flight in &SAMPLE_FLIGHTS {
        let (Some(departure_time), Some(arrival_time)) =
            (to_datetime(flight.departure), to_datetime(flight.arrival))
        else {
            continue;
        };

        inserted += sqlx::query(
            r#"
            INSERT INTO flights (
                flight_number,
                departure_airport,
                arrival_location,
                departure_time,
                arrival_time,
                cost_cents
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(flight.flight_number)
        .bind(flight.departure_airport)
        .bind(flight.arrival_location)
        .bind(departure_time)
        .bind(arrival_time)
        .bind(flight.cost_cents)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    tx.commit().await?;

    Ok(inserted)
}

fn to_datetime((year, month, day, hour, minute): (i32, u32, u32, u32, u32)) -> Option<chrono::NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
}

/// Fresh in-memory database with all migrations applied.
#[cfg(test)]
pub(crate) async fn test_pool() -> DbPool {
    let pool = create_pool("sqlite::memory:", 1).await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}
