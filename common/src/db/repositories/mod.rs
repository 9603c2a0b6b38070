// Repository layer for the Galac tables

pub mod client;
pub mod invoice;
pub mod queries;

pub use client::ClientRepository;
pub use invoice::InvoiceRepository;
