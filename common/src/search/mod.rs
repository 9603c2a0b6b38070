// Search pipelines for the Galac client and invoice tables
//
// Each pipeline runs: query string -> validated filters -> predicate ->
// store queries -> mapped rows -> response value.

pub mod client;
pub mod invoice;
pub mod pagination;
pub mod params;
pub mod predicate;
pub mod store;

pub use client::{ClientOutcome, ClientSearchService};
pub use invoice::{AppliedFilters, InvoiceData, InvoicePage, InvoiceSearchService};
pub use pagination::{PageMeta, PageRequest, PageWindow};
pub use params::{ClientQuery, InvoiceQuery};
pub use predicate::Predicate;
pub use store::{ClientStore, InvoiceStore};
