use crate::domain::property::{format_price, group_thousands, property_path, Property};
use maud::{html, Markup};

/// Heart toggle. Always rendered unset; the browser flips it locally and
/// nothing about the property changes.
pub fn favorite_button() -> Markup {
    html! {
        button
            type="button"
            class="favorite"
            data-favorite
            aria-pressed="false"
            aria-label="Add to favorites"
        { "♥" }
    }
}

pub fn verified_badge() -> Markup {
    html! {
        span class="badge badge-verified" { "● Blockchain Verified" }
    }
}

pub fn property_card(property: &Property) -> Markup {
    let href = property_path(&property.id);

    html! {
        article class="property-card" data-property-id=(property.id) {
            div class="property-card-media" {
                a href=(href) {
                    img src=(property.image) alt=(property.title) loading="lazy";
                }
                (favorite_button())
                @if property.is_verified {
                    div class="property-card-badge" { (verified_badge()) }
                }
            }
            div class="property-card-body" {
                div class="property-card-head" {
                    h3 { a href=(href) { (property.title) } }
                    span class="price" { (format_price(property.price)) }
                }
                p class="address muted" { (property.address) }
                ul class="specs" {
                    li { (property.bedrooms) " Beds" }
                    li { (property.bathrooms) " Baths" }
                    li { (group_thousands(u64::from(property.area))) " sqft" }
                }
            }
        }
    }
}
