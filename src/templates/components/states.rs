use maud::{html, Markup};

pub fn loading_state(message: &str) -> Markup {
    html! {
        div class="state state-loading" role="status" aria-live="polite" {
            div class="skeleton skeleton-circle" {}
            div class="skeleton skeleton-line" {}
            p class="muted" { (message) }
        }
    }
}

pub fn empty_state(title: &str, hint: Markup) -> Markup {
    html! {
        div class="state state-empty" {
            h3 { (title) }
            (hint)
        }
    }
}

pub fn unavailable_state() -> Markup {
    empty_state(
        "Listings are unavailable right now",
        html! { p class="muted" { "Please check back in a few minutes." } },
    )
}

pub fn not_found_state(id: &str) -> Markup {
    html! {
        div class="state state-not-found" {
            h1 { "Property not found" }
            p class="muted" { "We couldn't find a listing with id " code { (id) } "." }
            p { a href="/properties" class="btn" { "Back to Properties" } }
        }
    }
}
