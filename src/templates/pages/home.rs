// templates/pages/home.rs

use crate::catalog::CatalogState;
use crate::domain::filter::{PriceRange, TypeFilter};
use crate::domain::property::{format_price, Catalog};
use crate::templates::components::{button_link, empty_state, loading_state, property_card};
use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup};

const FEATURED_COUNT: usize = 4;

const PLATFORM_FEATURES: [(&str, &str); 4] = [
    (
        "Verified Ownership",
        "Property ownership is verified and recorded on the blockchain, eliminating fraud and providing unprecedented transparency.",
    ),
    (
        "Smart Contracts",
        "Automated agreements streamline transactions, reducing paperwork and ensuring terms are executed exactly as agreed.",
    ),
    (
        "Transparent History",
        "Full property history is immutably recorded, giving buyers complete confidence in their investment.",
    ),
    (
        "Secure Payments",
        "Blockchain-powered transactions eliminate intermediaries and reduce costs while providing enhanced security.",
    ),
];

pub fn home_page(state: &CatalogState) -> Markup {
    desktop_layout(
        "Home",
        Nav::Home,
        None,
        html! {
            (hero())
            (featured(state))
            (platform_section())
            @if let CatalogState::Ready(catalog) = state {
                (stats(catalog))
            }
            (cta())
        },
    )
}

fn hero() -> Markup {
    html! {
        section class="hero" {
            div class="hero-inner" {
                span class="eyebrow" { "Blockchain-Powered Real Estate" }
                h1 { "Find Your Dream Property With " span class="accent" { "Blockchain" } " Verification" }
                p class="lead" {
                    "Discover properties with verified ownership records, transparent history, and secure transactions."
                }

                form class="hero-search" method="get" action="/properties" role="search" {
                    label class="sr-only" for="hero-q" { "Search" }
                    input type="search" id="hero-q" name="q" placeholder="Search by city, neighborhood, or address...";

                    label class="sr-only" for="hero-type" { "Property type" }
                    select id="hero-type" name="type" {
                        @for t in TypeFilter::options() {
                            option value=(t.query_value().unwrap_or_default()) { (t.label()) }
                        }
                    }

                    label class="sr-only" for="hero-price" { "Price range" }
                    select id="hero-price" name="price" {
                        @for r in PriceRange::OPTIONS {
                            option value=(r.query_value().unwrap_or_default()) { (r.label()) }
                        }
                    }

                    button type="submit" class="btn btn-primary" { "Search" }
                }

                ul class="hero-points" {
                    li { "Verified Ownership" }
                    li { "Transparent History" }
                    li { "Smart Contracts" }
                }
            }
        }
    }
}

fn featured(state: &CatalogState) -> Markup {
    html! {
        section class="container featured" {
            div class="section-head" {
                div {
                    span class="eyebrow" { "Featured Properties" }
                    h2 { "Discover Our Featured Listings" }
                }
                a href="/properties" { "View All Properties →" }
            }

            @match state {
                CatalogState::Loading => { (loading_state("Loading featured properties...")) }
                CatalogState::Unavailable(_) => {
                    (empty_state("Featured listings are unavailable", html! {}))
                }
                CatalogState::Ready(catalog) => {
                    @if catalog.is_empty() {
                        (empty_state("No properties listed yet", html! {}))
                    } @else {
                        div class="property-grid" {
                            @for property in catalog.properties().iter().take(FEATURED_COUNT) {
                                (property_card(property))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn platform_section() -> Markup {
    html! {
        section class="container platform" {
            div class="section-head centered" {
                span class="eyebrow" { "Blockchain Technology" }
                h2 { "How Blockchain Transforms Real Estate" }
                p class="muted" {
                    "We're leveraging the power of blockchain to create a more secure, transparent, and efficient real estate marketplace."
                }
            }
            div class="feature-grid" {
                @for (title, body) in PLATFORM_FEATURES {
                    div class="feature-card" {
                        h3 { (title) }
                        p class="muted" { (body) }
                    }
                }
            }
        }
    }
}

fn stats(catalog: &Catalog) -> Markup {
    // Saturates rather than overflowing on absurd catalogs.
    let listed_value = catalog
        .properties()
        .iter()
        .fold(0u64, |total, p| total.saturating_add(p.price));

    html! {
        section class="stats" {
            div class="stat" { strong { (catalog.len()) } span { "Properties" } }
            div class="stat" { strong { (catalog.verified_count()) } span { "Blockchain Verified" } }
            div class="stat" { strong { (format_price(listed_value)) } span { "Listed Value" } }
        }
    }
}

fn cta() -> Markup {
    html! {
        section class="container cta" {
            h2 { "Ready to Experience the Future of Real Estate?" }
            p class="muted" {
                "Join buyers and sellers who have discovered the security and transparency of blockchain-powered property transactions."
            }
            div class="cta-actions" {
                (button_link("Browse Properties", "/properties", true))
                (button_link("Verified Only", "/properties?verified=1", false))
            }
        }
    }
}
