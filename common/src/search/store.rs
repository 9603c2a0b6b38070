// Store seams used by the search services

use crate::errors::DatabaseError;
use crate::models::{Client, Invoice};
use crate::search::pagination::PageWindow;
use crate::search::predicate::Predicate;
use async_trait::async_trait;

/// Read access to the `Cliente` table
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// Codes of the matching clients, most recently modified first.
    async fn find_codes(&self, predicate: &Predicate) -> Result<Vec<String>, DatabaseError>;

    /// Full records of the matching clients, in no particular order.
    async fn find_clients(&self, predicate: &Predicate) -> Result<Vec<Client>, DatabaseError>;
}

/// Read access to the `Factura` table
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    async fn count(&self, predicate: &Predicate) -> Result<i64, DatabaseError>;

    /// One page of invoices, newest `Fecha` first.
    async fn fetch_page(
        &self,
        predicate: &Predicate,
        window: PageWindow,
    ) -> Result<Vec<Invoice>, DatabaseError>;

    /// One page of distinct, non-empty `NumeroControl` values in ascending order.
    async fn fetch_control_numbers(
        &self,
        predicate: &Predicate,
        window: PageWindow,
    ) -> Result<Vec<String>, DatabaseError>;
}
