use maud::{html, Markup};

/// Body of an error page. Wrapped in the site layout by `responses::errors`.
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        div class="state state-error" {
            h1 { "Error " (status) }
            p { (message) }
            p { a href="/" { "← Back to home" } }
        }
    }
}
