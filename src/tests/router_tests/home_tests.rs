// src/tests/router_tests/home_tests.rs
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, card_count, get, loading_state, ready_state, request};
use http::Method;

#[test]
fn home_shows_featured_listings_and_stats() {
    let state = ready_state();
    let mut resp = get(&state, "/");
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Discover Our Featured Listings"));
    assert_eq!(card_count(&body), 4);
    // 8 listings, 4 verified, $10,400,000 in total.
    assert!(body.contains("<strong>8</strong>"));
    assert!(body.contains("<strong>4</strong>"));
    assert!(body.contains("$10,400,000"));
}

#[test]
fn home_search_submits_to_the_listing_page() {
    let mut resp = get(&ready_state(), "/");
    let body = body_string(&mut resp);

    assert!(body.contains("action=\"/properties\""));
    assert!(body.contains("option value=\"Villa\""));
    assert!(body.contains("option value=\"500k-1m\""));
}

#[test]
fn home_renders_while_catalog_loads() {
    let mut resp = get(&loading_state(), "/");
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Loading featured properties..."));
    assert_eq!(card_count(&body), 0);
}

#[test]
fn stylesheet_is_served() {
    let mut resp = get(&ready_state(), "/static/main.css");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(&mut resp).contains(".property-card"));
}

#[test]
fn unknown_route_is_not_found() {
    let err = handle(request(Method::GET, "/nope"), &ready_state()).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn non_get_is_not_found() {
    let err = handle(request(Method::POST, "/properties"), &ready_state()).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
