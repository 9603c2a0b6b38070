// Query-string interpretation for the client and invoice searches

use crate::errors::ValidationError;
use crate::search::pagination::PageRequest;
use serde::Deserialize;
use std::fmt;

/// Spanish month names accepted by `mesNombre`, in calendar order.
pub const MONTH_NAMES: [&str; 12] = [
    "ENERO",
    "FEBRERO",
    "MARZO",
    "ABRIL",
    "MAYO",
    "JUNIO",
    "JULIO",
    "AGOSTO",
    "SEPTIEMBRE",
    "OCTUBRE",
    "NOVIEMBRE",
    "DICIEMBRE",
];

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// Empty query values count as absent.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// ============================================================================
// Client search
// ============================================================================

/// Raw `/clientes/existe-cliente` query string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientQuery {
    pub rif: Option<String>,
    pub codigo: Option<String>,
    pub exacta: Option<String>,
    pub cliente: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientKey {
    /// Always matched exactly.
    Code(String),
    Rif { value: String, exact: bool },
}

impl ClientKey {
    /// Prefix letters of a Venezuelan RIF/CI that allow an exact match.
    pub const RIF_PREFIXES: [char; 4] = ['V', 'G', 'J', 'E'];

    /// A RIF is compared for equality only when an exact match was asked for
    /// and it starts with one of [`Self::RIF_PREFIXES`]; otherwise it is a
    /// substring match.
    pub fn uses_equality(&self) -> bool {
        match self {
            ClientKey::Code(_) => true,
            ClientKey::Rif { value, exact } => {
                *exact
                    && value
                        .chars()
                        .next()
                        .is_some_and(|c| Self::RIF_PREFIXES.contains(&c))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSearch {
    pub key: ClientKey,
    pub with_details: bool,
}

impl ClientQuery {
    pub fn interpret(&self) -> Result<ClientSearch, ValidationError> {
        let key = match (present(&self.codigo), present(&self.rif)) {
            (Some(code), _) => ClientKey::Code(code.to_string()),
            (None, Some(rif)) => ClientKey::Rif {
                value: rif.to_string(),
                exact: present(&self.exacta) == Some("si"),
            },
            (None, None) => return Err(ValidationError::MissingClientKey),
        };

        Ok(ClientSearch {
            key,
            with_details: present(&self.cliente) == Some("si"),
        })
    }
}

// ============================================================================
// Invoice search
// ============================================================================

/// Raw `/facturas` query string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceQuery {
    pub mes: Option<String>,
    pub anio: Option<String>,
    pub codigo_cliente: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub odoo: Option<String>,
    pub mes_nombre: Option<String>,
    pub estado_factura: Option<String>,
    pub numero_control: Option<String>,
}

/// `StatusFactura` values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Issued,
    CreditNote,
    Draft,
}

impl InvoiceStatus {
    /// Accepts the numeric code or the status name, case-insensitively.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "0" | "EMITIDA" => Some(Self::Issued),
            "1" | "NOTA_CREDITO" => Some(Self::CreditNote),
            "2" | "BORRADOR" => Some(Self::Draft),
            _ => None,
        }
    }

    /// Value stored in `StatusFactura`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Issued => "0",
            Self::CreditNote => "1",
            Self::Draft => "2",
        }
    }
}

/// Accepted status filter, keeping the token the caller sent (upper-cased).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFilter {
    pub token: String,
    pub status: InvoiceStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceFilters {
    pub status: Option<StatusFilter>,
    /// Upper-cased Spanish month name searched inside `Observaciones`.
    pub month_name: Option<String>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub odoo: Option<String>,
    pub client_code: Option<String>,
}

impl InvoiceFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceProjection {
    Records,
    ControlNumbers,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceSearch {
    pub filters: InvoiceFilters,
    pub projection: InvoiceProjection,
    pub page: PageRequest,
}

/// An optional filter that was ignored because its value was not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DroppedFilter {
    MonthName(String),
    Status(String),
}

impl fmt::Display for DroppedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DroppedFilter::MonthName(value) => write!(
                f,
                "Nombre de mes inválido ({value}). Use: ENERO, FEBRERO, ..., DICIEMBRE"
            ),
            DroppedFilter::Status(value) => write!(
                f,
                "Estado de factura inválido ({value}). Use: 0 (EMITIDA), 2 (BORRADOR), 1 (NOTA_CREDITO) o sus nombres"
            ),
        }
    }
}

impl InvoiceQuery {
    /// Validates `mes`/`anio` strictly and every other filter leniently.
    ///
    /// Unrecognised `mesNombre`/`estadoFactura` values are returned as
    /// [`DroppedFilter`]s instead of failing the request.
    pub fn interpret(
        &self,
        default_page_size: i64,
    ) -> Result<(InvoiceSearch, Vec<DroppedFilter>), ValidationError> {
        let mut dropped = Vec::new();

        let status = present(&self.estado_factura).and_then(|raw| {
            let token = raw.to_ascii_uppercase();
            match InvoiceStatus::parse(&token) {
                Some(status) => Some(StatusFilter { token, status }),
                None => {
                    dropped.push(DroppedFilter::Status(raw.to_string()));
                    None
                }
            }
        });

        let month_name = present(&self.mes_nombre).and_then(|raw| {
            let name = raw.to_uppercase();
            if MONTH_NAMES.contains(&name.as_str()) {
                Some(name)
            } else {
                dropped.push(DroppedFilter::MonthName(raw.to_string()));
                None
            }
        });

        let month = present(&self.mes)
            .map(|raw| {
                parse_in_range(raw, 1, 12)
                    .ok_or_else(|| ValidationError::InvalidMonth(raw.to_string()))
            })
            .transpose()?;

        let year = present(&self.anio)
            .map(|raw| {
                parse_in_range(raw, MIN_YEAR, MAX_YEAR)
                    .ok_or_else(|| ValidationError::InvalidYear(raw.to_string()))
            })
            .transpose()?;

        let projection = match present(&self.numero_control).map(str::to_ascii_lowercase) {
            Some(flag) if flag == "si" || flag == "true" => InvoiceProjection::ControlNumbers,
            _ => InvoiceProjection::Records,
        };

        let search = InvoiceSearch {
            filters: InvoiceFilters {
                status,
                month_name,
                month,
                year,
                odoo: present(&self.odoo).map(str::to_string),
                client_code: present(&self.codigo_cliente).map(str::to_string),
            },
            projection,
            page: PageRequest::parse(
                present(&self.page),
                present(&self.page_size),
                default_page_size,
            ),
        };

        Ok((search, dropped))
    }
}

fn parse_in_range(raw: &str, min: i32, max: i32) -> Option<i32> {
    raw.parse::<i32>().ok().filter(|v| (min..=max).contains(v))
}
