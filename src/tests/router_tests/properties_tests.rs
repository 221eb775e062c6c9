// src/tests/router_tests/properties_tests.rs
use crate::tests::utils::{
    body_string, card_count, get, loading_state, ready_state, unavailable_state,
};

fn listing(uri: &str) -> String {
    let mut resp = get(&ready_state(), uri);
    assert_eq!(resp.status(), 200);
    body_string(&mut resp)
}

#[test]
fn no_filters_lists_everything() {
    let body = listing("/properties");
    assert_eq!(card_count(&body), 8);
    assert!(body.contains("<span class=\"count\">8</span> properties found"));
    assert!(!body.contains("Reset Filters"));
}

#[test]
fn verified_only() {
    let body = listing("/properties?verified=1");
    assert_eq!(card_count(&body), 4);
    assert!(body.contains("× Reset Filters (1)"));
}

#[test]
fn search_is_case_insensitive_over_address() {
    let body = listing("/properties?q=miami");
    assert_eq!(card_count(&body), 1);
    assert!(body.contains("<span class=\"count\">1</span> property found"));
    assert!(body.contains("href=\"/property/1\""));
}

#[test]
fn filters_combine_conjunctively() {
    // Houses with 4+ beds: Austin and Portland.
    let body = listing("/properties?type=House&beds=4");
    assert_eq!(card_count(&body), 2);
    assert!(body.contains("href=\"/property/4\""));
    assert!(body.contains("href=\"/property/8\""));
}

#[test]
fn area_bounds_are_inclusive() {
    let body = listing("/properties?min_area=2000&max_area=3000");
    assert_eq!(card_count(&body), 3);

    let body = listing("/properties?min_area=2800&max_area=2800");
    assert_eq!(card_count(&body), 1);
    assert!(body.contains("href=\"/property/4\""));
}

#[test]
fn malformed_area_is_ignored() {
    let body = listing("/properties?min_area=lots");
    assert_eq!(card_count(&body), 8);
}

#[test]
fn no_matches_shows_empty_state_with_reset() {
    let body = listing("/properties?price=under-500k");
    assert_eq!(card_count(&body), 0);
    assert!(body.contains("No properties match your filters"));
    assert!(body.contains("href=\"/properties\""));
}

#[test]
fn sort_by_price_descending() {
    let body = listing("/properties?sort=price-desc");
    let villa = body.find("href=\"/property/2\"").unwrap();
    let loft = body.find("href=\"/property/3\"").unwrap();
    assert!(villa < loft);
}

#[test]
fn loading_catalog_shows_placeholder_and_refreshes() {
    let mut resp = get(&loading_state(), "/properties?verified=1");
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Loading properties..."));
    assert!(body.contains("http-equiv=\"refresh\""));
    assert_eq!(card_count(&body), 0);
    // Filter controls stay usable while waiting.
    assert!(body.contains("Blockchain Verified"));
}

#[test]
fn unavailable_catalog_says_so() {
    let mut resp = get(&unavailable_state(), "/properties");
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Listings are unavailable right now"));
    assert!(!body.contains("http-equiv=\"refresh\""));
}

#[test]
fn empty_state_reset_clears_sort() {
    let body = listing("/properties?price=under-500k&sort=newest");
    assert!(body.contains("<a class=\"btn\" href=\"/properties\">Reset Filters</a>"));
}
