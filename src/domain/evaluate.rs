// src/domain/evaluate.rs

use crate::domain::filter::{FilterState, TypeFilter};
use crate::domain::property::Property;

pub const PAGE_SIZE: usize = 12;

/// Returns the properties that satisfy every active clause of `filters`, in
/// catalog order. Clauses holding their sentinel value are skipped, so the
/// default state returns the whole catalog.
pub fn evaluate<'a>(catalog: &'a [Property], filters: &FilterState) -> Vec<&'a Property> {
    // Lowercase once, not once per record.
    let needle = filters.search_text().to_lowercase();

    catalog
        .iter()
        .filter(|p| text_clause(p, &needle))
        .filter(|p| type_clause(p, filters))
        .filter(|p| filters.price_range().contains(p.price))
        .filter(|p| filters.min_bedrooms().admits(p.bedrooms))
        .filter(|p| filters.min_bathrooms().admits(p.bathrooms))
        .filter(|p| area_clause(p, filters))
        .filter(|p| !filters.verified_only() || p.is_verified)
        .collect()
}

fn text_clause(p: &Property, needle: &str) -> bool {
    needle.is_empty()
        || p.title.to_lowercase().contains(needle)
        || p.address.to_lowercase().contains(needle)
}

fn type_clause(p: &Property, filters: &FilterState) -> bool {
    match filters.property_type() {
        TypeFilter::All => true,
        TypeFilter::Only(kind) => p.kind == kind,
    }
}

fn area_clause(p: &Property, filters: &FilterState) -> bool {
    let area = f64::from(p.area);
    filters.min_area().map_or(true, |min| area >= min)
        && filters.max_area().map_or(true, |max| area <= max)
}

/// Explicit ordering applied after evaluation. `Featured` keeps catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Featured,
    Newest,
    PriceLowToHigh,
    PriceHighToLow,
}

impl SortOrder {
    pub const OPTIONS: [SortOrder; 4] = [
        SortOrder::Featured,
        SortOrder::Newest,
        SortOrder::PriceLowToHigh,
        SortOrder::PriceHighToLow,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Featured => "Featured",
            SortOrder::Newest => "Newest",
            SortOrder::PriceLowToHigh => "Price: Low to High",
            SortOrder::PriceHighToLow => "Price: High to Low",
        }
    }

    pub fn query_value(self) -> &'static str {
        match self {
            SortOrder::Featured => "featured",
            SortOrder::Newest => "newest",
            SortOrder::PriceLowToHigh => "price-asc",
            SortOrder::PriceHighToLow => "price-desc",
        }
    }

    pub fn parse(raw: &str) -> SortOrder {
        Self::OPTIONS
            .into_iter()
            .find(|o| o.query_value() == raw.trim())
            .unwrap_or_default()
    }

    /// Stable: ties keep their catalog order.
    pub fn apply(self, items: &mut [&Property]) {
        match self {
            SortOrder::Featured => {}
            SortOrder::Newest => items.sort_by(|a, b| b.listed_on.cmp(&a.listed_on)),
            SortOrder::PriceLowToHigh => items.sort_by_key(|p| p.price),
            SortOrder::PriceHighToLow => items.sort_by(|a, b| b.price.cmp(&a.price)),
        }
    }
}

/// One rendered page of an evaluated listing.
#[derive(Debug)]
pub struct Listing<'a> {
    pub items: Vec<&'a Property>,
    /// Matches across all pages.
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
}

impl<'a> Listing<'a> {
    pub fn build(
        catalog: &'a [Property],
        filters: &FilterState,
        sort: SortOrder,
        requested_page: usize,
    ) -> Listing<'a> {
        let mut matched = evaluate(catalog, filters);
        sort.apply(&mut matched);

        let total = matched.len();
        let page_count = total.div_ceil(PAGE_SIZE).max(1);
        let page = requested_page.clamp(1, page_count);

        let items = matched
            .into_iter()
            .skip((page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect();

        Listing {
            items,
            total,
            page,
            page_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
