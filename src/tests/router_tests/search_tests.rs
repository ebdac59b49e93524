// src/tests/router_tests/search_tests.rs

use crate::fetch::testing::StaticSource;
use crate::router::handle;
use crate::tests::utils::{post_form, test_app};

fn location_header(resp: &astra::Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

#[test]
fn submit_redirects_to_canonical_listings_url() {
    let app = test_app(StaticSource::default());

    let resp = handle(
        post_form(
            "/properties/search",
            "query=sea+view&location=&property_type=Villa&bedrooms=3&bathrooms=&min_price=&max_price=900000&min_area=&max_area=",
        ),
        &app,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 303);
    assert_eq!(
        location_header(&resp),
        "/properties?query=sea+view&property_type=Villa&bedrooms=3&max_price=900000"
    );
}

#[test]
fn submit_with_nothing_selected_goes_to_bare_listings_route() {
    let app = test_app(StaticSource::default());

    let resp = handle(
        post_form(
            "/properties/search",
            "query=&location=&property_type=Any&bedrooms=&bathrooms=&min_price=&max_price=&min_area=&max_area=",
        ),
        &app,
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(location_header(&resp), "/properties");
}

#[test]
fn submit_drops_non_numeric_and_keeps_negative_values() {
    let app = test_app(StaticSource::default());

    let resp = handle(
        post_form("/properties/search", "min_price=cheap&max_area=-5&bedrooms=two"),
        &app,
    )
    .unwrap();

    assert_eq!(location_header(&resp), "/properties?max_area=-5");
}
