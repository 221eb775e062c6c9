// src/tests/router_tests/detail_tests.rs
use crate::tests::fixtures::{fixture_detail, BrokenLookup};
use crate::tests::utils::{body_string, get, ready_state, state_with, with_lookup};
use std::sync::Arc;

#[test]
fn detail_page_renders() {
    let mut resp = get(&ready_state(), "/property/2");
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Luxury Villa with Private Pool"));
    assert!(body.contains("456 Palm Dr, Beverly Hills, CA"));
    assert!(body.contains("Back to Properties"));
    assert!(body.contains("Wine Cellar"));
    assert!(body.contains("Property Renovated"));
    assert!(!body.contains("role=\"dialog\""));
}

#[test]
fn gallery_state_comes_from_the_query() {
    let mut resp = get(&ready_state(), "/property/2?photo=3&viewer=1");
    let body = body_string(&mut resp);

    assert!(body.contains("role=\"dialog\""));
    assert!(body.contains("4 / 5"));
    assert!(body.contains("href=\"/property/2?photo=4&amp;viewer=1\""));
    assert!(body.contains("href=\"/property/2?photo=3\""));
}

#[test]
fn out_of_range_photo_is_clamped() {
    let mut resp = get(&ready_state(), "/property/7?photo=40&viewer=1");
    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("2 / 2"));
}

#[test]
fn unknown_property_is_404_page() {
    let mut resp = get(&ready_state(), "/property/999");
    assert_eq!(resp.status(), 404);

    let body = body_string(&mut resp);
    assert!(body.contains("Property not found"));
    assert!(body.contains("href=\"/properties\""));
}

#[test]
fn failed_lookup_is_503() {
    let mut resp = get(&with_lookup(Arc::new(BrokenLookup)), "/property/2");
    assert_eq!(resp.status(), 503);
    assert!(body_string(&mut resp).contains("Listings are unavailable right now"));
}

#[test]
fn ids_with_spaces_and_slashes_resolve() {
    let mut detail = fixture_detail("2");
    detail.property.id = "villa 2/b".to_string();
    let state = state_with(vec![detail]);

    let mut resp = get(&state, "/properties");
    let listing = body_string(&mut resp);
    assert!(listing.contains("href=\"/property/villa+2%2Fb\""));

    // The link as rendered, and the same id as a browser escapes a typed space.
    for uri in ["/property/villa+2%2Fb", "/property/villa%202%2Fb"] {
        let mut resp = get(&state, uri);
        assert_eq!(resp.status(), 200, "{uri}");

        let body = body_string(&mut resp);
        assert!(body.contains("Luxury Villa with Private Pool"));
        assert!(body.contains("href=\"/property/villa+2%2Fb?photo=1\""));
    }
}
