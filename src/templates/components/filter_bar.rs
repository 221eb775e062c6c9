use crate::domain::evaluate::SortOrder;
use crate::domain::filter::{MinBathrooms, MinBedrooms, PriceRange, TypeFilter};
use crate::domain::query::ListingQuery;
use maud::{html, Markup};

/// One option in a dropdown: what it says, where it goes, whether it's current.
struct DropdownOption {
    label: String,
    href: String,
    selected: bool,
}

/// `<details>` dropdown; highlighted when a non-default value is picked.
fn dropdown(label: &str, current: &str, is_set: bool, options: Vec<DropdownOption>) -> Markup {
    html! {
        details class="filter-dropdown" {
            summary.pill.pill-active[is_set] { (label) ": " (current) }
            ul class="dropdown-menu" {
                @for opt in &options {
                    li {
                        a href=(opt.href) class=[opt.selected.then_some("selected")] { (opt.label) }
                    }
                }
            }
        }
    }
}

/// Hidden inputs carrying the rest of the current query through a GET form.
fn carry_fields(query: &ListingQuery, replaced: &[&str]) -> Markup {
    html! {
        @for (key, value) in query.query_pairs() {
            @if key != "page" && !replaced.contains(&key) {
                input type="hidden" name=(key) value=(value);
            }
        }
    }
}

pub fn search_form(query: &ListingQuery) -> Markup {
    html! {
        form class="search-box" method="get" action="/properties" role="search" {
            label class="sr-only" for="q" { "Search properties" }
            input
                type="search"
                id="q"
                name="q"
                value=(query.filters.search_text())
                placeholder="Search by location, property name, or address...";
            (carry_fields(query, &["q"]))
            button type="submit" class="btn btn-primary" { "Search" }
            @if !query.filters.search_text().is_empty() {
                a class="clear" aria-label="Clear search"
                    href=(query.with_filter(|f| f.set_search_text("")).href()) { "×" }
            }
        }
    }
}

fn area_form(query: &ListingQuery) -> Markup {
    let fmt = |v: Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();

    html! {
        form class="area-form" method="get" action="/properties" {
            label for="min_area" { "Square Footage" }
            input type="number" min="0" id="min_area" name="min_area" placeholder="Min" value=(fmt(query.filters.min_area()));
            span class="muted" { "to" }
            input type="number" min="0" name="max_area" placeholder="Max" aria-label="Maximum square footage" value=(fmt(query.filters.max_area()));
            (carry_fields(query, &["min_area", "max_area"]))
            button type="submit" class="btn" { "Apply" }
        }
    }
}

pub fn filter_bar(query: &ListingQuery) -> Markup {
    let filters = &query.filters;

    let types = TypeFilter::options()
        .into_iter()
        .map(|t| DropdownOption {
            label: t.label().to_string(),
            href: query.with_filter(|f| f.set_property_type(t)).href(),
            selected: filters.property_type() == t,
        })
        .collect();

    let prices = PriceRange::OPTIONS
        .into_iter()
        .map(|r| DropdownOption {
            label: r.label().to_string(),
            href: query.with_filter(|f| f.set_price_range(r)).href(),
            selected: filters.price_range() == r,
        })
        .collect();

    let beds = MinBedrooms::options()
        .into_iter()
        .map(|b| DropdownOption {
            label: b.label(),
            href: query.with_filter(|f| f.set_min_bedrooms(b)).href(),
            selected: filters.min_bedrooms() == b,
        })
        .collect();

    let baths = MinBathrooms::options()
        .into_iter()
        .map(|b| DropdownOption {
            label: b.label(),
            href: query.with_filter(|f| f.set_min_bathrooms(b)).href(),
            selected: filters.min_bathrooms() == b,
        })
        .collect();

    let verified = filters.verified_only();
    let toggle_verified = query.with_filter(|f| f.set_verified_only(!verified)).href();
    // Reset clears sort as well, back to the bare listing.
    let reset = ListingQuery::default().href();

    html! {
        div class="filter-bar" {
            (dropdown("Type", filters.property_type().label(), filters.property_type() != TypeFilter::All, types))
            (dropdown("Price", filters.price_range().label(), filters.price_range() != PriceRange::Any, prices))
            (dropdown("Beds", &filters.min_bedrooms().label(), filters.min_bedrooms() != MinBedrooms::Any, beds))
            (dropdown("Baths", &filters.min_bathrooms().label(), filters.min_bathrooms() != MinBathrooms::Any, baths))

            span class="divider" {}

            a.pill.pill-active[verified] href=(toggle_verified) aria-pressed=(if verified { "true" } else { "false" }) {
                span class="dot" {}
                "Blockchain Verified"
            }

            @if !filters.is_default() {
                a class="pill pill-ghost" href=(reset) {
                    "× Reset Filters"
                    " (" (filters.active_clauses()) ")"
                }
            }
        }
        (area_form(query))
    }
}

pub fn sort_dropdown(query: &ListingQuery) -> Markup {
    let options = SortOrder::OPTIONS
        .into_iter()
        .map(|s| DropdownOption {
            label: s.label().to_string(),
            href: query.with_sort(s).href(),
            selected: query.sort == s,
        })
        .collect();

    dropdown("Sort by", query.sort.label(), query.sort != SortOrder::default(), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_replace_exactly_one_field() {
        let query = ListingQuery::parse(Some("beds=2&verified=1"));
        let html = filter_bar(&query).into_string();

        // Picking a type keeps the other selections.
        assert!(html.contains("href=\"/properties?type=Villa&amp;beds=2&amp;verified=1\""));
        // Toggling verified off only drops that field.
        assert!(html.contains("href=\"/properties?beds=2\""));
        // Reset goes back to the bare listing.
        assert!(html.contains("Reset Filters"));
        assert!(html.contains("href=\"/properties\""));
    }

    #[test]
    fn reset_drops_sort_too() {
        let query = ListingQuery::parse(Some("verified=1&sort=newest"));
        let html = filter_bar(&query).into_string();
        assert!(html.contains("<a class=\"pill pill-ghost\" href=\"/properties\">"));
    }

    #[test]
    fn reset_is_hidden_when_nothing_is_set() {
        let html = filter_bar(&ListingQuery::default()).into_string();
        assert!(!html.contains("Reset Filters"));
        assert!(html.contains("Type: All"));
        assert!(html.contains("Price: Any"));
    }

    #[test]
    fn search_form_carries_other_fields() {
        let query = ListingQuery::parse(Some("q=loft&price=500k-1m&page=2"));
        let html = search_form(&query).into_string();
        assert!(html.contains("name=\"price\" value=\"500k-1m\""));
        assert!(!html.contains("name=\"page\""));
        assert!(html.contains("value=\"loft\""));
    }
}
