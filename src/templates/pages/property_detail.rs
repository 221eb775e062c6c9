// templates/pages/property_detail.rs

use crate::domain::gallery::Gallery;
use crate::domain::property::{
    format_price, group_thousands, property_path, HistoryEntry, PropertyDetail,
};
use crate::templates::components::{
    favorite_button, not_found_state, unavailable_state, verified_badge,
};
use crate::templates::{desktop_layout, Nav};
use maud::{html, Markup};

pub fn property_detail_page(detail: &PropertyDetail, gallery: &Gallery) -> Markup {
    let property = &detail.property;

    desktop_layout(
        &property.title,
        Nav::Properties,
        None,
        html! {
            div class="container detail" {
                a class="back-link" href="/properties" { "← Back to Properties" }

                div class="detail-head" {
                    div {
                        h1 { (property.title) }
                        p class="address muted" { (property.address) }
                    }
                    div class="detail-head-side" {
                        span class="price price-large" { (format_price(property.price)) }
                        @if property.is_verified {
                            (verified_badge())
                        }
                        (favorite_button())
                    }
                }

                (image_grid(detail, gallery))

                section class="detail-section" {
                    h2 { "Property Overview" }
                    div class="overview-grid" {
                        (overview_card("Bedrooms", &property.bedrooms.to_string()))
                        (overview_card("Bathrooms", &property.bathrooms.to_string()))
                        (overview_card("Square Feet", &group_thousands(u64::from(property.area))))
                        (overview_card("Property Type", property.kind.label()))
                    }
                    @for paragraph in &detail.description {
                        p { (paragraph) }
                    }
                }

                @if !detail.features.is_empty() {
                    section class="detail-section" {
                        h2 { "Features & Amenities" }
                        ul class="feature-list" {
                            @for feature in &detail.features {
                                li { "✓ " (feature) }
                            }
                        }
                    }
                }

                (contact_card())

                @if property.is_verified {
                    (verification_section())
                }

                (history_section(&detail.history))
            }

            @if gallery.is_viewer_open() {
                (viewer(detail, gallery))
            }
        },
    )
}

fn gallery_href(id: &str, gallery: Gallery) -> String {
    format!("{}?{}", property_path(id), gallery.to_query())
}

fn image_grid(detail: &PropertyDetail, gallery: &Gallery) -> Markup {
    let id = &detail.property.id;
    let active = gallery.active();

    html! {
        div class="image-grid" {
            a class="image-main" href=(gallery_href(id, gallery.with(|g| g.open(active)))) {
                img src=(detail.images[active]) alt=(detail.property.title);
                span class="image-count" { (detail.images.len()) " photos" }
            }
            @if detail.images.len() > 1 {
                div class="image-thumbs" {
                    @for (i, url) in detail.images.iter().enumerate() {
                        a href=(gallery_href(id, gallery.with(|g| g.select(i))))
                            class=[(i == active).then_some("active")]
                            aria-current=[(i == active).then_some("true")] {
                            img src=(url) alt={ "Photo " (i + 1) } loading="lazy";
                        }
                    }
                }
            }
        }
    }
}

fn viewer(detail: &PropertyDetail, gallery: &Gallery) -> Markup {
    let id = &detail.property.id;
    let active = gallery.active();

    html! {
        div class="viewer" role="dialog" aria-modal="true" aria-label="Photo viewer" {
            a class="viewer-close" href=(gallery_href(id, gallery.with(Gallery::close))) aria-label="Close viewer" { "×" }
            a class="viewer-nav viewer-prev" href=(gallery_href(id, gallery.with(Gallery::previous))) aria-label="Previous photo" { "‹" }
            img class="viewer-image" src=(detail.images[active]) alt=(detail.property.title);
            a class="viewer-nav viewer-next" href=(gallery_href(id, gallery.with(Gallery::next))) aria-label="Next photo" { "›" }
            p class="viewer-counter" { (active + 1) " / " (gallery.len()) }
            div class="viewer-thumbs" {
                @for (i, url) in detail.images.iter().enumerate() {
                    a href=(gallery_href(id, gallery.with(|g| g.select(i))))
                        class=[(i == active).then_some("active")] {
                        img src=(url) alt={ "Photo " (i + 1) };
                    }
                }
            }
        }
    }
}

fn overview_card(label: &str, value: &str) -> Markup {
    html! {
        div class="overview-card" {
            span class="muted" { (label) }
            strong { (value) }
        }
    }
}

const AGENT_NAME: &str = "Sarah Johnson";
const AGENT_ROLE: &str = "Luxury Real Estate Specialist";
const AGENT_PHONE: &str = "+1-555-010-2030";
const AGENT_EMAIL: &str = "agents@blockestate.com";
const TOURS_EMAIL: &str = "tours@blockestate.com";

fn contact_card() -> Markup {
    html! {
        aside class="detail-section contact-card" {
            div class="agent" {
                span class="agent-avatar" aria-hidden="true" { "SJ" }
                div {
                    h3 { (AGENT_NAME) }
                    p class="muted" { (AGENT_ROLE) }
                }
            }
            div class="contact-actions" {
                a class="btn" href={ "tel:" (AGENT_PHONE) } { "Call" }
                a class="btn" href={ "mailto:" (AGENT_EMAIL) } { "Email" }
            }
            h3 { "Schedule a Tour" }
            a class="btn btn-primary" href={ "mailto:" (TOURS_EMAIL) } { "Schedule Tour" }
        }
    }
}

fn verification_section() -> Markup {
    html! {
        section class="detail-section verification" {
            h2 { "Blockchain Verification" }
            p {
                "Ownership of this property is recorded on the blockchain. The title, "
                "transfer history and listing details can be independently verified."
            }
            ul class="verification-points" {
                li { "Ownership verified" }
                li { "Tamper-proof transaction history" }
                li { "Smart contract ready" }
            }
        }
    }
}

fn history_section(history: &[HistoryEntry]) -> Markup {
    html! {
        section class="detail-section" {
            h2 { "Transaction History" }
            @if history.is_empty() {
                p class="muted" { "No recorded transactions." }
            } @else {
                table class="history" {
                    thead {
                        tr { th { "Date" } th { "Event" } th { "Price" } }
                    }
                    tbody {
                        @for entry in history {
                            tr {
                                td { (entry.date.format("%b %d, %Y")) }
                                td { (entry.event) }
                                td {
                                    @match entry.price {
                                        Some(price) => { (format_price(price)) }
                                        None => { "-" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn property_not_found_page(id: &str) -> Markup {
    desktop_layout(
        "Property not found",
        Nav::Properties,
        None,
        html! {
            div class="container" { (not_found_state(id)) }
        },
    )
}

pub fn property_unavailable_page() -> Markup {
    desktop_layout(
        "Unavailable",
        Nav::Properties,
        None,
        html! {
            div class="container" {
                (unavailable_state())
                p { a href="/properties" class="btn" { "Back to Properties" } }
            }
        },
    )
}
