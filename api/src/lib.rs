// HTTP facade over the Galac client and invoice tables

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
