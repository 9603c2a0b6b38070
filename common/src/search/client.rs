// Client lookup pipeline: RIF/code -> codes -> optional full records

use crate::errors::SearchError;
use crate::models::Client;
use crate::search::params::{ClientKey, ClientQuery, ClientSearch};
use crate::search::predicate::{Predicate, SqlValue};
use crate::search::store::ClientStore;
use crate::telemetry::CLIENT_LOG_TARGET;
use std::collections::HashMap;
use std::sync::Arc;

pub const CODES_FAILED: &str = "Error al consultar los clientes";
pub const DETAILS_FAILED: &str = "Error al obtener detalles de clientes";

/// Result of a client lookup that reached the store
#[derive(Debug, Clone, PartialEq)]
pub enum ClientOutcome {
    NotFound,
    Codes(Vec<String>),
    Details(Vec<Client>),
}

/// Builds the code-lookup predicate for a validated search.
pub fn code_predicate(search: &ClientSearch) -> Predicate {
    match &search.key {
        ClientKey::Code(code) => {
            Predicate::new().equals("codigo", "Codigo", SqlValue::Text(code.clone()))
        }
        ClientKey::Rif { value, .. } if search.key.uses_equality() => {
            Predicate::new().equals("rif", "NumeroRIF", SqlValue::Text(value.clone()))
        }
        ClientKey::Rif { value, .. } => Predicate::new().contains("rif", "NumeroRIF", value),
    }
}

#[derive(Clone)]
pub struct ClientSearchService {
    store: Arc<dyn ClientStore>,
}

impl ClientSearchService {
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self { store }
    }

    pub async fn search(&self, query: &ClientQuery) -> Result<ClientOutcome, SearchError> {
        let search = query.interpret().map_err(|e| {
            tracing::warn!(target: CLIENT_LOG_TARGET, error = %e, "Rejected client search");
            e
        })?;

        match &search.key {
            ClientKey::Code(code) => tracing::info!(
                target: CLIENT_LOG_TARGET,
                codigo = %code,
                "Searching client by code"
            ),
            ClientKey::Rif { value, exact } => tracing::info!(
                target: CLIENT_LOG_TARGET,
                rif = %value,
                exacta = exact,
                "Searching client codes by RIF"
            ),
        }

        let codes = self
            .store
            .find_codes(&code_predicate(&search))
            .await
            .map_err(|e| {
                tracing::error!(target: CLIENT_LOG_TARGET, error = %e, "{}", CODES_FAILED);
                SearchError::store(CODES_FAILED)(e)
            })?;

        if codes.is_empty() {
            tracing::info!(target: CLIENT_LOG_TARGET, "No client codes found");
            return Ok(ClientOutcome::NotFound);
        }

        if !search.with_details {
            tracing::info!(target: CLIENT_LOG_TARGET, count = codes.len(), "Client codes found");
            return Ok(ClientOutcome::Codes(codes));
        }

        let predicate = Predicate::new().one_of("codigos", "Codigo", codes.clone());
        let mut clients = self.store.find_clients(&predicate).await.map_err(|e| {
            tracing::error!(target: CLIENT_LOG_TARGET, error = %e, "{}", DETAILS_FAILED);
            SearchError::store(DETAILS_FAILED)(e)
        })?;

        sort_by_code_order(&mut clients, &codes);
        tracing::info!(target: CLIENT_LOG_TARGET, count = clients.len(), "Client details found");
        Ok(ClientOutcome::Details(clients))
    }
}

/// Orders records like `codes` (most recently modified first); unknown codes go last.
fn sort_by_code_order(clients: &mut [Client], codes: &[String]) {
    let mut rank: HashMap<&str, usize> = HashMap::with_capacity(codes.len());
    for (i, code) in codes.iter().enumerate() {
        rank.entry(code.as_str()).or_insert(i);
    }
    clients.sort_by_key(|c| rank.get(c.codigo.as_str()).copied().unwrap_or(usize::MAX));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{DatabaseError, ValidationError};
    use crate::search::predicate::Condition;
    use crate::search::store::MockClientStore;

    fn client(codigo: &str) -> Client {
        serde_json::from_value(serde_json::json!({
            "ConsecutivoCompania": 1,
            "Consecutivo": 1,
            "Codigo": codigo,
            "Nombre": "Cliente",
            "ActivarAvisoAlEscoger": "N",
            "CorrespondenciaXenviar": "N",
            "EsExtranjero": "N",
            "ConsecutivoVendedor": 0
        }))
        .unwrap()
    }

    fn rif_query(rif: &str, exacta: &str, cliente: &str) -> ClientQuery {
        ClientQuery {
            rif: Some(rif.into()),
            exacta: Some(exacta.into()),
            cliente: Some(cliente.into()),
            codigo: None,
        }
    }

    #[test]
    fn test_code_predicate_exact_rif() {
        let search = rif_query("V12345678", "si", "no").interpret().unwrap();
        let predicate = code_predicate(&search);
        assert_eq!(predicate.clauses()[0].condition, Condition::Equals);
        assert_eq!(
            predicate.binding("rif"),
            Some(&SqlValue::Text("V12345678".into()))
        );
    }

    #[test]
    fn test_code_predicate_substring_rif() {
        let search = rif_query("12345678", "si", "no").interpret().unwrap();
        let predicate = code_predicate(&search);
        assert_eq!(predicate.clauses()[0].condition, Condition::Contains);
        assert_eq!(
            predicate.binding("rif"),
            Some(&SqlValue::Text("%12345678%".into()))
        );
    }

    #[tokio::test]
    async fn test_missing_key_never_reaches_store() {
        let mut store = MockClientStore::new();
        store.expect_find_codes().never();
        let service = ClientSearchService::new(Arc::new(store));

        let result = service.search(&ClientQuery::default()).await;
        assert!(matches!(
            result,
            Err(SearchError::InvalidRequest(ValidationError::MissingClientKey))
        ));
    }

    #[tokio::test]
    async fn test_no_matches_is_not_found() {
        let mut store = MockClientStore::new();
        store.expect_find_codes().times(1).returning(|_| Ok(vec![]));
        store.expect_find_clients().never();
        let service = ClientSearchService::new(Arc::new(store));

        let outcome = service.search(&rif_query("V1", "si", "si")).await.unwrap();
        assert_eq!(outcome, ClientOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_codes_only() {
        let mut store = MockClientStore::new();
        store
            .expect_find_codes()
            .withf(|p| p.binding("codigo") == Some(&SqlValue::Text("C001".into())))
            .returning(|_| Ok(vec!["C001".into()]));
        let service = ClientSearchService::new(Arc::new(store));

        let query = ClientQuery {
            codigo: Some("C001".into()),
            rif: Some("V999".into()),
            ..Default::default()
        };
        let outcome = service.search(&query).await.unwrap();
        assert_eq!(outcome, ClientOutcome::Codes(vec!["C001".into()]));
    }

    #[tokio::test]
    async fn test_details_follow_code_order() {
        let mut store = MockClientStore::new();
        store
            .expect_find_codes()
            .returning(|_| Ok(vec!["B".into(), "A".into(), "C".into()]));
        store
            .expect_find_clients()
            .withf(|p| {
                p.binding("codigos")
                    == Some(&SqlValue::TextList(vec!["B".into(), "A".into(), "C".into()]))
            })
            .returning(|_| Ok(vec![client("A"), client("C"), client("B")]));
        let service = ClientSearchService::new(Arc::new(store));

        let outcome = service.search(&rif_query("J30", "no", "si")).await.unwrap();
        let ClientOutcome::Details(clients) = outcome else {
            panic!("expected details");
        };
        let codes: Vec<_> = clients.iter().map(|c| c.codigo.as_str()).collect();
        assert_eq!(codes, vec!["B", "A", "C"]);
    }

    #[tokio::test]
    async fn test_store_failures_carry_context() {
        let mut store = MockClientStore::new();
        store
            .expect_find_codes()
            .returning(|_| Ok(vec!["A".into()]));
        store
            .expect_find_clients()
            .returning(|_| Err(DatabaseError::QueryFailed("timeout".into())));
        let service = ClientSearchService::new(Arc::new(store));

        let err = service.search(&rif_query("V1", "si", "si")).await.unwrap_err();
        assert!(matches!(err, SearchError::Store { context: DETAILS_FAILED, .. }));
    }
}
