//! Postgres persistence for pantry items.
//!
//! Queries are runtime-checked and instrumented with `db.query` spans so
//! slow statements show up in traces.

use chrono::{Duration, NaiveDate};
use sqlx::PgPool;
use tracing::{info_span, Instrument};
use uuid::Uuid;

/// Row shape of the `items` table, see `sql/schema.sql`.
#[derive(Debug, sqlx::FromRow)]
pub struct StoredItem {
    pub id: Uuid,
    pub name: String,
    pub expiry: NaiveDate,
    pub image: String,
    pub added_on: NaiveDate,
}

/// All items, soonest expiry first.
///
/// # Errors
/// Returns the underlying `sqlx` error on query failure.
pub async fn list(pool: &PgPool) -> Result<Vec<StoredItem>, sqlx::Error> {
    let query = "SELECT id, name, expiry, image, added_on FROM items ORDER BY expiry, name";
    let span = info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    sqlx::query_as::<_, StoredItem>(query)
        .fetch_all(pool)
        .instrument(span)
        .await
}

/// Insert an item and return the stored row.
///
/// # Errors
/// Returns the underlying `sqlx` error on query failure.
pub async fn insert(
    pool: &PgPool,
    name: &str,
    expiry: NaiveDate,
    image: &str,
    added_on: NaiveDate,
) -> Result<StoredItem, sqlx::Error> {
    let query = "INSERT INTO items (name, expiry, image, added_on) VALUES ($1, $2, $3, $4) \
                 RETURNING id, name, expiry, image, added_on";
    let span = info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "INSERT",
        db.statement = query
    );
    sqlx::query_as::<_, StoredItem>(query)
        .bind(name)
        .bind(expiry)
        .bind(image)
        .bind(added_on)
        .fetch_one(pool)
        .instrument(span)
        .await
}

/// Delete one item; `false` when the id was unknown.
///
/// # Errors
/// Returns the underlying `sqlx` error on query failure.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let query = "DELETE FROM items WHERE id = $1";
    let span = info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "DELETE",
        db.statement = query
    );
    let result = sqlx::query(query)
        .bind(id)
        .execute(pool)
        .instrument(span)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Drop rows whose expiry is strictly before `today`, returning the count.
///
/// # Errors
/// Returns the underlying `sqlx` error on query failure.
pub async fn purge_expired(pool: &PgPool, today: NaiveDate) -> Result<u64, sqlx::Error> {
    let query = "DELETE FROM items WHERE expiry < $1";
    let span = info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "DELETE",
        db.statement = query
    );
    let result = sqlx::query(query)
        .bind(today)
        .execute(pool)
        .instrument(span)
        .await?;
    Ok(result.rows_affected())
}

/// Names of items with `today <= expiry <= today + window_days`, the
/// payload of `GET /alerts`.
///
/// # Errors
/// Returns the underlying `sqlx` error on query failure.
pub async fn expiring_names(
    pool: &PgPool,
    today: NaiveDate,
    window_days: i64,
) -> Result<Vec<String>, sqlx::Error> {
    let horizon = today + Duration::days(window_days);
    let query = "SELECT name FROM items WHERE expiry >= $1 AND expiry <= $2 ORDER BY expiry, name";
    let span = info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    sqlx::query_scalar::<_, String>(query)
        .bind(today)
        .bind(horizon)
        .fetch_all(pool)
        .instrument(span)
        .await
}
