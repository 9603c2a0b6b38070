// Offset pagination

use serde::Serialize;
use sqlx::{Postgres, QueryBuilder};

pub const FIRST_PAGE: i64 = 1;

/// Requested page, both fields at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl PageRequest {
    /// Parses `page`/`pageSize`, falling back to the first page and
    /// `default_size` on anything missing, non-numeric or below 1.
    pub fn parse(page: Option<&str>, page_size: Option<&str>, default_size: i64) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(FIRST_PAGE),
            page_size: parse_positive(page_size).unwrap_or(default_size.max(1)),
        }
    }

    pub fn window(&self) -> PageWindow {
        PageWindow {
            offset: (self.page - 1).saturating_mul(self.page_size),
            limit: self.page_size,
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.parse::<i64>().ok()).filter(|v| *v >= 1)
}

/// Row window handed to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: i64,
    pub limit: i64,
}

impl PageWindow {
    /// Appends `OFFSET .. ROWS FETCH NEXT .. ROWS ONLY`, binding offset then limit.
    pub fn push_window(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        builder
            .push(" OFFSET ")
            .push_bind(self.offset)
            .push(" ROWS FETCH NEXT ")
            .push_bind(self.limit)
            .push(" ROWS ONLY");
    }
}

/// Pagination block of the invoice envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub count: usize,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl PageMeta {
    /// `count` is the number of rows actually returned for this page.
    pub fn new(request: PageRequest, total: i64, count: usize) -> Self {
        let total = total.max(0);
        let total_pages = total_pages(total, request.page_size);

        Self {
            count,
            total,
            page: request.page,
            page_size: request.page_size,
            total_pages,
            is_first_page: request.page == FIRST_PAGE,
            // An empty result is its own last page.
            is_last_page: total == 0 || request.page == total_pages,
            has_next_page: request.page < total_pages,
            has_prev_page: request.page > FIRST_PAGE,
        }
    }
}

/// `ceil(total / page_size)`
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    if total <= 0 || page_size <= 0 {
        return 0;
    }
    total / page_size + i64::from(total % page_size != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let req = PageRequest::parse(None, None, 1000);
        assert_eq!(req, PageRequest { page: 1, page_size: 1000 });

        let req = PageRequest::parse(Some("abc"), Some("0"), 1000);
        assert_eq!(req, PageRequest { page: 1, page_size: 1000 });

        let req = PageRequest::parse(Some("-4"), Some("25"), 1000);
        assert_eq!(req, PageRequest { page: 1, page_size: 25 });
    }

    #[test]
    fn test_window_offsets() {
        let req = PageRequest { page: 3, page_size: 50 };
        assert_eq!(req.window(), PageWindow { offset: 100, limit: 50 });
    }

    #[test]
    fn test_window_saturates_on_huge_pages() {
        let req = PageRequest {
            page: i64::MAX,
            page_size: i64::MAX,
        };
        assert_eq!(req.window().offset, i64::MAX);
    }

    #[test]
    fn test_meta_middle_page() {
        let meta = PageMeta::new(PageRequest { page: 2, page_size: 10 }, 35, 10);
        assert_eq!(meta.total_pages, 4);
        assert!(!meta.is_first_page);
        assert!(!meta.is_last_page);
        assert!(meta.has_next_page);
        assert!(meta.has_prev_page);
    }

    #[test]
    fn test_meta_last_page() {
        let meta = PageMeta::new(PageRequest { page: 4, page_size: 10 }, 35, 5);
        assert!(meta.is_last_page);
        assert!(!meta.has_next_page);
    }

    #[test]
    fn test_meta_empty_result_is_first_and_last() {
        let meta = PageMeta::new(PageRequest { page: 1, page_size: 1000 }, 0, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(meta.is_first_page);
        assert!(meta.is_last_page);
        assert!(!meta.has_next_page);
        assert!(!meta.has_prev_page);
    }

    #[test]
    fn test_meta_past_the_end() {
        let meta = PageMeta::new(PageRequest { page: 9, page_size: 10 }, 35, 0);
        assert!(!meta.is_last_page);
        assert!(!meta.has_next_page);
        assert!(meta.has_prev_page);
    }

    #[test]
    fn test_meta_serializes_camel_case() {
        let meta = PageMeta::new(PageRequest { page: 1, page_size: 2 }, 3, 2);
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["pageSize"], 2);
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["isFirstPage"], true);
        assert_eq!(json["hasNextPage"], true);
    }

    #[test]
    fn test_window_sql() {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT 1 WHERE 1=1 AND x = ");
        builder.push_bind(1_i32);
        PageWindow { offset: 0, limit: 10 }.push_window(&mut builder);
        assert_eq!(
            builder.sql(),
            "SELECT 1 WHERE 1=1 AND x = $1 OFFSET $2 ROWS FETCH NEXT $3 ROWS ONLY"
        );
    }
}
