// Property-based tests for query interpretation, predicates and pagination

use common::errors::ValidationError;
use common::search::client::code_predicate;
use common::search::invoice::{invoice_predicate, AppliedFilters};
use common::search::pagination::{total_pages, PageMeta, PageRequest};
use common::search::params::{ClientQuery, InvoiceQuery, MONTH_NAMES};
use common::search::predicate::{Condition, SqlValue};
use proptest::prelude::*;

/// RIF lookups use equality exactly when `exacta=si` and the RIF starts with V, G, J or E.
#[test]
fn property_rif_equality_rule() {
    proptest!(|(
        prefix in prop::sample::select(vec!['V', 'G', 'J', 'E', 'v', 'X', '1', '0']),
        digits in "[0-9]{6,10}",
        exact in any::<bool>()
    )| {
        let rif = format!("{prefix}{digits}");
        let query = ClientQuery {
            rif: Some(rif.clone()),
            exacta: Some(if exact { "si".into() } else { "no".into() }),
            ..Default::default()
        };
        let search = query.interpret().unwrap();
        let predicate = code_predicate(&search);
        let clause = &predicate.clauses()[0];

        let expect_equality = exact && matches!(prefix, 'V' | 'G' | 'J' | 'E');
        if expect_equality {
            prop_assert_eq!(clause.condition, Condition::Equals);
            prop_assert_eq!(&clause.value, &SqlValue::Text(rif));
        } else {
            prop_assert_eq!(clause.condition, Condition::Contains);
            prop_assert_eq!(&clause.value, &SqlValue::Text(format!("%{rif}%")));
        }
    });
}

/// A non-empty `codigo` always wins over `rif` and is matched exactly.
#[test]
fn property_code_takes_precedence() {
    proptest!(|(
        code in "[A-Z0-9]{1,10}",
        rif in proptest::option::of("[VJ][0-9]{8}"),
        exacta in proptest::option::of(prop::sample::select(vec!["si", "no"]))
    )| {
        let query = ClientQuery {
            codigo: Some(code.clone()),
            rif,
            exacta: exacta.map(String::from),
            cliente: None,
        };
        let predicate = code_predicate(&query.interpret().unwrap());

        prop_assert_eq!(predicate.clauses().len(), 1);
        prop_assert_eq!(predicate.clauses()[0].column, "Codigo");
        prop_assert_eq!(predicate.clauses()[0].condition, Condition::Equals);
    });
}

/// `totalPages` is the ceiling of `total / pageSize` and page flags agree with it.
#[test]
fn property_pagination_identity() {
    proptest!(|(
        total in 0i64..100_000,
        page in 1i64..200,
        page_size in 1i64..5_000
    )| {
        let request = PageRequest { page, page_size };
        let returned = usize::try_from(
            (total - request.window().offset).clamp(0, page_size)
        ).unwrap();
        let meta = PageMeta::new(request, total, returned);

        prop_assert_eq!(meta.total_pages, total_pages(total, page_size));
        prop_assert!(meta.total_pages * page_size >= total);
        prop_assert!((meta.total_pages - 1).max(0) * page_size < total.max(1));
        prop_assert!(meta.count as i64 <= page_size);
        prop_assert_eq!(meta.is_first_page, page == 1);
        prop_assert_eq!(meta.has_prev_page, page > 1);
        prop_assert_eq!(meta.has_next_page, page < meta.total_pages);
        prop_assert_eq!(meta.is_last_page, total == 0 || page == meta.total_pages);
    });
}

/// Unparseable or non-positive paging values fall back to the defaults.
#[test]
fn property_paging_values_never_fail() {
    proptest!(|(
        page in proptest::option::of(".{0,8}"),
        page_size in proptest::option::of(".{0,8}")
    )| {
        let query = InvoiceQuery { page, page_size, ..Default::default() };
        let (search, _) = query.interpret(1000).unwrap();
        prop_assert!(search.page.page >= 1);
        prop_assert!(search.page.page_size >= 1);
    });
}

/// Unknown month names and statuses are dropped, never rejected.
#[test]
fn property_filter_leniency() {
    proptest!(|(
        mes_nombre in "[A-Za-z]{1,12}",
        estado in "[A-Za-z0-9_]{1,12}"
    )| {
        let query = InvoiceQuery {
            mes_nombre: Some(mes_nombre.clone()),
            estado_factura: Some(estado.clone()),
            ..Default::default()
        };
        let (search, dropped) = query.interpret(1000).unwrap();

        let month_ok = MONTH_NAMES.contains(&mes_nombre.to_uppercase().as_str());
        prop_assert_eq!(search.filters.month_name.is_some(), month_ok);

        let status_ok = matches!(
            estado.to_ascii_uppercase().as_str(),
            "0" | "1" | "2" | "EMITIDA" | "NOTA_CREDITO" | "BORRADOR"
        );
        prop_assert_eq!(search.filters.status.is_some(), status_ok);
        prop_assert_eq!(dropped.len(), usize::from(!month_ok) + usize::from(!status_ok));

        let predicate = invoice_predicate(&search.filters);
        prop_assert_eq!(predicate.clauses().len(), usize::from(month_ok) + usize::from(status_ok));

        let applied = AppliedFilters::from_filters(&search.filters);
        prop_assert_eq!(applied.is_some(), month_ok || status_ok);
    });
}

/// `mes` outside 1..=12 and `anio` outside 1900..=2100 are rejected.
#[test]
fn property_calendar_bounds() {
    proptest!(|(mes in -50i32..60, anio in 1800i32..2200)| {
        let query = InvoiceQuery {
            mes: Some(mes.to_string()),
            anio: Some(anio.to_string()),
            ..Default::default()
        };
        let result = query.interpret(1000);

        if !(1..=12).contains(&mes) {
            prop_assert_eq!(result.unwrap_err(), ValidationError::InvalidMonth(mes.to_string()));
        } else if !(1900..=2100).contains(&anio) {
            prop_assert_eq!(result.unwrap_err(), ValidationError::InvalidYear(anio.to_string()));
        } else {
            let (search, _) = result.unwrap();
            prop_assert_eq!(search.filters.month, Some(mes));
            prop_assert_eq!(search.filters.year, Some(anio));
        }
    });
}
