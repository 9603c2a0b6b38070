use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

use common::config::Settings;
use common::db::repositories::{ClientRepository, InvoiceRepository};
use common::db::DbPool;
use common::search::{ClientSearchService, InvoiceSearchService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: DbPool,
    pub clients: ClientSearchService,
    pub invoices: InvoiceSearchService,
    pub metrics: PrometheusHandle,
    pub config: Arc<Settings>,
}

impl AppState {
    /// Wire the search services to the Postgres repositories
    pub fn new(db_pool: DbPool, metrics: PrometheusHandle, config: Settings) -> Self {
        let clients = ClientSearchService::new(Arc::new(ClientRepository::new(db_pool.clone())));
        let invoices = InvoiceSearchService::new(
            Arc::new(InvoiceRepository::new(db_pool.clone())),
            config.api.default_page_size,
        );

        Self::with_services(db_pool, clients, invoices, metrics, config)
    }

    /// Build a state around already constructed services
    pub fn with_services(
        db_pool: DbPool,
        clients: ClientSearchService,
        invoices: InvoiceSearchService,
        metrics: PrometheusHandle,
        config: Settings,
    ) -> Self {
        Self {
            db_pool,
            clients,
            invoices,
            metrics,
            config: Arc::new(config),
        }
    }
}
