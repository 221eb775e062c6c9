use crate::catalog::CatalogState;
use crate::domain::evaluate::Listing;
use crate::domain::query::ListingQuery;
use crate::templates::components::{
    empty_state, filter_bar, loading_state, property_card, search_form, sort_dropdown,
    unavailable_state,
};
use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup};

/// What the listing page renders below the filter bar.
pub enum ListingVm<'a> {
    Loading,
    Unavailable,
    Ready(Listing<'a>),
}

impl<'a> ListingVm<'a> {
    /// The evaluator only runs once a catalog is present.
    pub fn from_state(state: &'a CatalogState, query: &ListingQuery) -> ListingVm<'a> {
        match state {
            CatalogState::Loading => ListingVm::Loading,
            CatalogState::Unavailable(_) => ListingVm::Unavailable,
            CatalogState::Ready(catalog) => ListingVm::Ready(Listing::build(
                catalog.properties(),
                &query.filters,
                query.sort,
                query.page,
            )),
        }
    }
}

pub fn properties_page(query: &ListingQuery, vm: &ListingVm<'_>) -> Markup {
    let refresh = matches!(vm, ListingVm::Loading).then_some(1);

    desktop_layout(
        "Properties",
        Nav::Properties,
        refresh,
        html! {
            section class="container" {
                div class="page-intro" {
                    h1 { "Discover Properties" }
                    p class="muted" {
                        "Explore our curated selection of blockchain-verified properties from around the world."
                    }
                }

                div class="toolbar" {
                    (search_form(query))
                    (filter_bar(query))
                }

                @match vm {
                    ListingVm::Loading => { (loading_state("Loading properties...")) }
                    ListingVm::Unavailable => { (unavailable_state()) }
                    ListingVm::Ready(listing) => { (listing_results(query, listing)) }
                }
            }
        },
    )
}

fn listing_results(query: &ListingQuery, listing: &Listing<'_>) -> Markup {
    html! {
        div class="results-head" {
            p class="muted" id="result-count" {
                span class="count" { (listing.total) }
                @if listing.total == 1 { " property found" } @else { " properties found" }
            }
            (sort_dropdown(query))
        }

        @if listing.is_empty() {
            (empty_state("No properties match your filters", html! {
                p class="muted" { "Try widening the price range or clearing a few filters." }
                p { a class="btn" href=(ListingQuery::default().href()) { "Reset Filters" } }
            }))
        } @else {
            div class="property-grid" {
                @for property in &listing.items {
                    (property_card(property))
                }
            }
            (pager(query, listing))
        }
    }
}

fn pager(query: &ListingQuery, listing: &Listing<'_>) -> Markup {
    html! {
        @if listing.page_count > 1 {
            nav class="pager" aria-label="Pages" {
                @if listing.page > 1 {
                    a class="btn" href=(query.with_page(listing.page - 1).href()) { "Previous" }
                } @else {
                    span class="btn disabled" { "Previous" }
                }
                @for n in 1..=listing.page_count {
                    a.btn.btn-primary[n == listing.page]
                        href=(query.with_page(n).href())
                        aria-current=[(n == listing.page).then_some("page")]
                    { (n) }
                }
                @if listing.page < listing.page_count {
                    a class="btn" href=(query.with_page(listing.page + 1).href()) { "Next" }
                } @else {
                    span class="btn disabled" { "Next" }
                }
            }
        }
    }
}
