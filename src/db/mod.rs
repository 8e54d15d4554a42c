pub mod managers;
pub mod users;
pub mod visitors;

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::config::{Config, DatabaseConfig};
use crate::models::{ManagerSubmission, NewVisitor, UserSubmission};

/// The insert contract the form pipeline depends on. Each call is one
/// single-row insert returning the store-assigned id.
#[async_trait]
pub trait Datastore: Send + Sync {
    async fn insert_visitor(&self, visitor: &NewVisitor) -> Result<i64, sqlx::Error>;
    async fn insert_user(&self, user: &UserSubmission) -> Result<i64, sqlx::Error>;
    async fn insert_manager(&self, manager: &ManagerSubmission) -> Result<i64, sqlx::Error>;
}

/// Postgres-backed [`Datastore`].
#[derive(Debug, Clone)]
pub struct PgDatastore {
    pool: PgPool,
}

impl PgDatastore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Datastore for PgDatastore {
    async fn insert_visitor(&self, visitor: &NewVisitor) -> Result<i64, sqlx::Error> {
        visitors::insert(&self.pool, visitor).await
    }

    async fn insert_user(&self, user: &UserSubmission) -> Result<i64, sqlx::Error> {
        users::insert(&self.pool, user).await
    }

    async fn insert_manager(&self, manager: &ManagerSubmission) -> Result<i64, sqlx::Error> {
        managers::insert(&self.pool, manager).await
    }
}

pub fn connect_options(database: &DatabaseConfig) -> Result<PgConnectOptions, sqlx::Error> {
    match database {
        DatabaseConfig::Url(url) => PgConnectOptions::from_str(url),
        DatabaseConfig::Discrete {
            host,
            port,
            user,
            password,
            name,
        } => Ok(PgConnectOptions::new()
            .host(host)
            .port(*port)
            .username(user)
            .password(password)
            .database(name)),
    }
}

/// Open the connection pool and check it can reach the server.
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.pool.max_connections)
        .min_connections(config.pool.min_connections)
        .max_lifetime(config.pool.max_lifetime)
        .connect_with(connect_options(&config.database)?)
        .await
}
