use maud::{html, Markup};

pub mod error;
pub mod filter_bar;
pub mod property_card;
pub mod states;

pub use error::error_page;
pub use filter_bar::{filter_bar, search_form, sort_dropdown};
pub use property_card::{favorite_button, property_card, verified_badge};
pub use states::{empty_state, loading_state, not_found_state, unavailable_state};

/// Link styled as a button.
pub fn button_link(label: &str, href: &str, primary: bool) -> Markup {
    html! {
        a.btn.btn-primary[primary] href=(href) { (label) }
    }
}
