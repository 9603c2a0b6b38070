// Invoice search pipeline: filters -> count -> one page of rows or control numbers

use crate::errors::SearchError;
use crate::models::Invoice;
use crate::search::pagination::PageMeta;
use crate::search::params::{InvoiceFilters, InvoiceProjection, InvoiceQuery};
use crate::search::predicate::{Predicate, SqlValue};
use crate::search::store::InvoiceStore;
use crate::telemetry::INVOICE_LOG_TARGET;
use serde::Serialize;
use std::sync::Arc;

pub const COUNT_FAILED: &str = "Error al obtener cantidad total de facturas";
pub const PAGE_FAILED: &str = "Error al ejecutar consulta de facturas";

/// Builds the `AND` clauses for the accepted filters.
///
/// Clause order is fixed: status, month name, month, year, Odoo code, client code.
pub fn invoice_predicate(filters: &InvoiceFilters) -> Predicate {
    let mut predicate = Predicate::new();

    if let Some(status) = &filters.status {
        predicate = predicate.equals(
            "estadoFactura",
            "StatusFactura",
            SqlValue::Text(status.status.code().to_string()),
        );
    }
    if let Some(name) = &filters.month_name {
        predicate = predicate.contains("mesObs", "Observaciones", name);
    }
    if let Some(month) = filters.month {
        predicate = predicate.month_of("mes", "Fecha", month);
    }
    if let Some(year) = filters.year {
        predicate = predicate.year_of("anio", "Fecha", year);
    }
    if let Some(odoo) = &filters.odoo {
        predicate = predicate.contains("odoo", "Observaciones", odoo);
    }
    if let Some(code) = &filters.client_code {
        predicate =
            predicate.equals("codigoCliente", "CodigoCliente", SqlValue::Text(code.clone()));
    }

    predicate
}

/// Filters echoed back under `filtros`; only the accepted ones are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado_factura: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mes_nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anio: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odoo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_cliente: Option<String>,
}

impl AppliedFilters {
    /// `None` when no optional filter survived validation.
    pub fn from_filters(filters: &InvoiceFilters) -> Option<Self> {
        if filters.is_empty() {
            return None;
        }
        Some(Self {
            estado_factura: filters.status.as_ref().map(|s| s.token.clone()),
            mes_nombre: filters.month_name.clone(),
            mes: filters.month,
            anio: filters.year,
            odoo: filters.odoo.clone(),
            codigo_cliente: filters.client_code.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InvoiceData {
    Records(Vec<Invoice>),
    ControlNumbers(Vec<String>),
}

impl InvoiceData {
    pub fn len(&self) -> usize {
        match self {
            InvoiceData::Records(rows) => rows.len(),
            InvoiceData::ControlNumbers(numbers) => numbers.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The `/facturas` response body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoicePage {
    #[serde(flatten)]
    pub meta: PageMeta,
    pub data: InvoiceData,
    #[serde(rename = "filtros", skip_serializing_if = "Option::is_none")]
    pub applied: Option<AppliedFilters>,
}

#[derive(Clone)]
pub struct InvoiceSearchService {
    store: Arc<dyn InvoiceStore>,
    default_page_size: i64,
}

impl InvoiceSearchService {
    pub fn new(store: Arc<dyn InvoiceStore>, default_page_size: u32) -> Self {
        Self {
            store,
            default_page_size: i64::from(default_page_size),
        }
    }

    /// Count and page run as two independent statements; rows inserted in
    /// between may make `total` and `data` disagree.
    pub async fn search(&self, query: &InvoiceQuery) -> Result<InvoicePage, SearchError> {
        let (search, dropped) = query.interpret(self.default_page_size).map_err(|e| {
            tracing::warn!(target: INVOICE_LOG_TARGET, error = %e, "Rejected invoice search");
            e
        })?;

        for filter in &dropped {
            tracing::warn!(target: INVOICE_LOG_TARGET, "{}", filter);
        }

        tracing::info!(
            target: INVOICE_LOG_TARGET,
            projection = ?search.projection,
            page = search.page.page,
            page_size = search.page.page_size,
            "Starting invoice search"
        );

        let predicate = invoice_predicate(&search.filters);

        let total = self.store.count(&predicate).await.map_err(|e| {
            tracing::error!(target: INVOICE_LOG_TARGET, error = %e, "{}", COUNT_FAILED);
            SearchError::store(COUNT_FAILED)(e)
        })?;
        tracing::info!(target: INVOICE_LOG_TARGET, total, "Invoices found");

        let window = search.page.window();
        let data = match search.projection {
            InvoiceProjection::Records => self
                .store
                .fetch_page(&predicate, window)
                .await
                .map(InvoiceData::Records),
            InvoiceProjection::ControlNumbers => self
                .store
                .fetch_control_numbers(&predicate, window)
                .await
                .map(InvoiceData::ControlNumbers),
        }
        .map_err(|e| {
            tracing::error!(target: INVOICE_LOG_TARGET, error = %e, "{}", PAGE_FAILED);
            SearchError::store(PAGE_FAILED)(e)
        })?;

        let meta = PageMeta::new(search.page, total, data.len());
        tracing::info!(
            target: INVOICE_LOG_TARGET,
            page = meta.page,
            returned = meta.count,
            total = meta.total,
            "Invoice search completed"
        );

        Ok(InvoicePage {
            meta,
            data,
            applied: AppliedFilters::from_filters(&search.filters),
        })
    }
}
