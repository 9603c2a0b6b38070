// Client repository implementation

use super::queries::client_queries;
use crate::db::DbPool;
use crate::errors::DatabaseError;
use crate::models::Client;
use crate::search::predicate::Predicate;
use crate::search::store::ClientStore;
use crate::telemetry;
use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};
use std::time::Instant;
use tracing::instrument;

/// Repository for `Cliente` lookups
#[derive(Clone)]
pub struct ClientRepository {
    pool: DbPool,
}

impl ClientRepository {
    /// Create a new ClientRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn codes_query(predicate: &Predicate) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(client_queries::SELECT_CODES);
        builder.push(client_queries::FROM_TABLE);
        predicate.push_conditions(&mut builder);
        builder.push(client_queries::ORDER_BY_LAST_MODIFIED);
        builder
    }

    pub(crate) fn clients_query(predicate: &Predicate) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(client_queries::SELECT_ALL_COLUMNS);
        builder.push(client_queries::FROM_TABLE);
        predicate.push_conditions(&mut builder);
        builder
    }
}

#[async_trait]
impl ClientStore for ClientRepository {
    #[instrument(skip_all, fields(clauses = predicate.clauses().len()))]
    async fn find_codes(&self, predicate: &Predicate) -> Result<Vec<String>, DatabaseError> {
        let started = Instant::now();
        let mut query = Self::codes_query(predicate);

        let codes = query
            .build_query_scalar::<String>()
            .fetch_all(self.pool.pool())
            .await?;

        telemetry::record_query_duration("client_codes", started.elapsed().as_secs_f64());
        tracing::debug!(count = codes.len(), "Found client codes");
        Ok(codes)
    }

    #[instrument(skip_all, fields(clauses = predicate.clauses().len()))]
    async fn find_clients(&self, predicate: &Predicate) -> Result<Vec<Client>, DatabaseError> {
        let started = Instant::now();
        let mut query = Self::clients_query(predicate);

        let clients = query
            .build_query_as::<Client>()
            .fetch_all(self.pool.pool())
            .await?;

        telemetry::record_query_duration("client_details", started.elapsed().as_secs_f64());
        tracing::debug!(count = clients.len(), "Found client details");
        Ok(clients)
    }
}
