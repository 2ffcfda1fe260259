use async_trait::async_trait;
use log::info;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use sqlx::Connection;

use super::RsvpStore;
use crate::config::Config;
use crate::error::Result;
use crate::models::{NewRsvp, Rsvp};

// Column aliases map the table's camelCase columns onto the struct fields.
const SQL_GET_ALL_RSVPS: &str = "select id, name, email, phone, status, \
     createdBy as created_by, createdDate as created_date \
     from rsvp order by id";

const SQL_GET_RSVP_BY_ID: &str = "select id, name, email, phone, status, \
     createdBy as created_by, createdDate as created_date \
     from rsvp where id = ?";

const SQL_INSERT_RSVP: &str = "insert into rsvp \
     (name, email, phone, status, createdBy, createdDate) \
     values (?, ?, ?, ?, ?, CURDATE())";

/// Creates the shared connection pool, bounded by the configured limit.
pub async fn create_pool(config: &Config) -> Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.db_conn_limit)
        .connect(&config.database_url())
        .await?;
    Ok(pool)
}

/// Startup liveness check: acquire one connection, ping it, release it.
pub async fn ping(pool: &MySqlPool) -> Result<()> {
    let mut conn = pool.acquire().await?;
    conn.ping().await?;
    Ok(())
}

/// MySQL-backed store. Each operation independently acquires a connection
/// from the pool and releases it on drop, success or failure.
pub struct MySqlRsvpStore {
    pool: MySqlPool,
}

impl MySqlRsvpStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RsvpStore for MySqlRsvpStore {
    async fn list_rsvps(&self) -> Result<Vec<Rsvp>> {
        let rsvps = sqlx::query_as::<_, Rsvp>(SQL_GET_ALL_RSVPS)
            .fetch_all(&self.pool)
            .await?;
        Ok(rsvps)
    }

    async fn insert_rsvp(&self, new_rsvp: &NewRsvp) -> Result<Rsvp> {
        let result = sqlx::query(SQL_INSERT_RSVP)
            .bind(&new_rsvp.name)
            .bind(&new_rsvp.email)
            .bind(&new_rsvp.phone)
            .bind(&new_rsvp.status)
            .bind(new_rsvp.created_by)
            .execute(&self.pool)
            .await?;

        let id = result.last_insert_id();
        info!(
            "Inserted rsvp id={}, {} row(s) affected",
            id,
            result.rows_affected()
        );

        // Re-read the row so the response carries the createdDate the
        // database actually assigned.
        let rsvp = sqlx::query_as::<_, Rsvp>(SQL_GET_RSVP_BY_ID)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(rsvp)
    }
}
