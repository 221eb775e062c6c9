use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Which navbar entry is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Home,
    Properties,
    None,
}

// Favorite hearts are per-card cosmetic state; flip them in the browser.
const FAVORITE_TOGGLE_JS: &str = r#"
document.addEventListener('click', function (e) {
  var btn = e.target.closest('[data-favorite]');
  if (!btn) return;
  e.preventDefault();
  e.stopPropagation();
  var on = btn.getAttribute('aria-pressed') !== 'true';
  btn.setAttribute('aria-pressed', on ? 'true' : 'false');
  btn.setAttribute('aria-label', on ? 'Remove from favorites' : 'Add to favorites');
});
"#;

/// Page shell: head, navbar, content, footer. `refresh_secs` asks the
/// browser to reload, used while the catalog is still loading.
pub fn desktop_layout(
    title: &str,
    active: Nav,
    refresh_secs: Option<u32>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if let Some(secs) = refresh_secs {
                    meta http-equiv="refresh" content=(secs);
                }
                title { (title) " | BlockEstate" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                (navbar(active))
                main class="page" {
                    (content)
                }
                (footer())
                script { (PreEscaped(FAVORITE_TOGGLE_JS)) }
            }
        }
    }
}

fn navbar(active: Nav) -> Markup {
    html! {
        header class="navbar" {
            a href="/" class="brand" {
                span class="brand-mark" { "B" }
                "BlockEstate"
            }
            nav {
                ul {
                    li { a href="/" class=[(active == Nav::Home).then_some("active")] { "Home" } }
                    li { a href="/properties" class=[(active == Nav::Properties).then_some("active")] { "Properties" } }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="footer" {
            div class="footer-grid" {
                div {
                    h4 { "BlockEstate" }
                    p class="muted" {
                        "Property listings with ownership records verified on the blockchain."
                    }
                }
                div {
                    h4 { "Quick Links" }
                    ul {
                        li { a href="/" { "Home" } }
                        li { a href="/properties" { "Properties" } }
                        li { a href="/properties?verified=1" { "Verified Listings" } }
                    }
                }
                div {
                    h4 { "Services" }
                    ul {
                        li { "Blockchain Verification" }
                        li { "Smart Contracts" }
                        li { "Secure Payments" }
                    }
                }
                div {
                    h4 { "Contact Us" }
                    p { a href="mailto:info@blockestate.com" { "info@blockestate.com" } }
                }
            }
        }
    }
}
