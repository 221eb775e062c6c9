// src/domain/query.rs

use url::form_urlencoded;

use crate::domain::evaluate::SortOrder;
use crate::domain::filter::{encode_pairs, FilterState};

/// Everything the listing page reads from its query string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingQuery {
    pub filters: FilterState,
    pub sort: SortOrder,
    /// 1-based; clamped against the result when the listing is built.
    pub page: usize,
}

impl ListingQuery {
    pub fn parse(query: Option<&str>) -> ListingQuery {
        let pairs: Vec<(String, String)> = query
            .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();

        let mut out = ListingQuery {
            filters: FilterState::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))),
            sort: SortOrder::default(),
            page: 1,
        };
        for (key, value) in &pairs {
            match key.as_str() {
                "sort" => out.sort = SortOrder::parse(value),
                "page" => out.page = value.trim().parse().unwrap_or(1),
                _ => {}
            }
        }
        out
    }

    /// Query pairs in a stable order: filters, then sort, then page.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.filters.query_pairs();
        if self.sort != SortOrder::default() {
            pairs.push(("sort", self.sort.query_value().to_string()));
        }
        if self.page > 1 {
            pairs.push(("page", self.page.to_string()));
        }
        pairs
    }

    pub fn href(&self) -> String {
        let query = encode_pairs(self.query_pairs());
        if query.is_empty() {
            "/properties".to_string()
        } else {
            format!("/properties?{query}")
        }
    }

    /// Link for one filter change. Changing what matches restarts at page 1.
    pub fn with_filter(&self, change: impl FnOnce(&mut FilterState)) -> ListingQuery {
        ListingQuery {
            filters: self.filters.with(change),
            sort: self.sort,
            page: 1,
        }
    }

    pub fn with_sort(&self, sort: SortOrder) -> ListingQuery {
        ListingQuery {
            filters: self.filters.clone(),
            sort,
            page: 1,
        }
    }

    pub fn with_page(&self, page: usize) -> ListingQuery {
        ListingQuery {
            filters: self.filters.clone(),
            sort: self.sort,
            page,
        }
    }
}
