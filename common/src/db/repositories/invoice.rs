// Invoice repository implementation

use super::queries::invoice_queries;
use crate::db::DbPool;
use crate::errors::DatabaseError;
use crate::models::Invoice;
use crate::search::pagination::PageWindow;
use crate::search::predicate::Predicate;
use crate::search::store::InvoiceStore;
use crate::telemetry;
use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};
use std::time::Instant;
use tracing::instrument;

/// Repository for `Factura` searches
#[derive(Clone)]
pub struct InvoiceRepository {
    pool: DbPool,
}

impl InvoiceRepository {
    /// Create a new InvoiceRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn count_query(predicate: &Predicate) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(invoice_queries::SELECT_COUNT);
        builder.push(invoice_queries::FROM_TABLE);
        predicate.push_conditions(&mut builder);
        builder
    }

    pub(crate) fn page_query(
        predicate: &Predicate,
        window: PageWindow,
    ) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(invoice_queries::SELECT_ALL_COLUMNS);
        builder.push(invoice_queries::FROM_TABLE);
        predicate.push_conditions(&mut builder);
        builder.push(invoice_queries::ORDER_BY_DATE);
        window.push_window(&mut builder);
        builder
    }

    pub(crate) fn control_numbers_query(
        predicate: &Predicate,
        window: PageWindow,
    ) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(invoice_queries::SELECT_CONTROL_NUMBERS);
        builder.push(invoice_queries::FROM_TABLE);
        predicate.push_conditions(&mut builder);
        builder.push(invoice_queries::NON_EMPTY_CONTROL_NUMBER);
        builder.push(invoice_queries::ORDER_BY_CONTROL_NUMBER);
        window.push_window(&mut builder);
        builder
    }
}

#[async_trait]
impl InvoiceStore for InvoiceRepository {
    #[instrument(skip_all, fields(clauses = predicate.clauses().len()))]
    async fn count(&self, predicate: &Predicate) -> Result<i64, DatabaseError> {
        let started = Instant::now();
        let mut query = Self::count_query(predicate);

        let total = query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool.pool())
            .await?;

        telemetry::record_query_duration("invoice_count", started.elapsed().as_secs_f64());
        Ok(total)
    }

    #[instrument(skip_all, fields(offset = window.offset, limit = window.limit))]
    async fn fetch_page(
        &self,
        predicate: &Predicate,
        window: PageWindow,
    ) -> Result<Vec<Invoice>, DatabaseError> {
        let started = Instant::now();
        let mut query = Self::page_query(predicate, window);

        let invoices = query
            .build_query_as::<Invoice>()
            .fetch_all(self.pool.pool())
            .await?;

        telemetry::record_query_duration("invoice_page", started.elapsed().as_secs_f64());
        tracing::debug!(count = invoices.len(), "Fetched invoice page");
        Ok(invoices)
    }

    #[instrument(skip_all, fields(offset = window.offset, limit = window.limit))]
    async fn fetch_control_numbers(
        &self,
        predicate: &Predicate,
        window: PageWindow,
    ) -> Result<Vec<String>, DatabaseError> {
        let started = Instant::now();
        let mut query = Self::control_numbers_query(predicate, window);

        let numbers = query
            .build_query_scalar::<String>()
            .fetch_all(self.pool.pool())
            .await?;

        telemetry::record_query_duration(
            "invoice_control_numbers",
            started.elapsed().as_secs_f64(),
        );
        Ok(numbers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::predicate::SqlValue;

    fn predicate() -> Predicate {
        Predicate::new()
            .equals("estadoFactura", "StatusFactura", SqlValue::Text("0".into()))
            .year_of("anio", "Fecha", 2025)
    }

    #[test]
    fn test_count_query() {
        let query = InvoiceRepository::count_query(&predicate());
        assert_eq!(
            query.sql(),
            "SELECT COUNT(*) FROM dbo.\"Factura\" WHERE 1=1 AND \"StatusFactura\" = $1 \
             AND EXTRACT(YEAR FROM \"Fecha\") = $2"
        );
    }

    #[test]
    fn test_page_query_binds_window_after_predicate() {
        let query =
            InvoiceRepository::page_query(&predicate(), PageWindow { offset: 20, limit: 10 });
        assert!(query.sql().ends_with(
            "AND EXTRACT(YEAR FROM \"Fecha\") = $2 ORDER BY \"Fecha\" DESC \
             OFFSET $3 ROWS FETCH NEXT $4 ROWS ONLY"
        ));
    }

    #[test]
    fn test_control_numbers_query_keeps_predicate() {
        let query = InvoiceRepository::control_numbers_query(
            &predicate(),
            PageWindow { offset: 0, limit: 1000 },
        );
        assert_eq!(
            query.sql(),
            "SELECT DISTINCT \"NumeroControl\" FROM dbo.\"Factura\" WHERE 1=1 \
             AND \"StatusFactura\" = $1 AND EXTRACT(YEAR FROM \"Fecha\") = $2 \
             AND \"NumeroControl\" IS NOT NULL AND \"NumeroControl\" <> '' \
             ORDER BY \"NumeroControl\" OFFSET $3 ROWS FETCH NEXT $4 ROWS ONLY"
        );
    }
}
