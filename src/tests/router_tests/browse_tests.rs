// src/tests/router_tests/browse_tests.rs

use crate::domain::ListingRecord;
use crate::fetch::testing::{listing, GatedSource, StaticSource};
use crate::fetch::{FetchError, ListingSource};
use crate::router::handle;
use crate::search::QueryString;
use crate::tests::utils::{body_string, get, test_app};
use scraper::{Html, Selector};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn select_count(html: &str, css: &str) -> usize {
    Html::parse_document(html)
        .select(&Selector::parse(css).unwrap())
        .count()
}

#[test]
fn home_page_links_to_listings() {
    let app = test_app(StaticSource::default());

    let resp = handle(get("/"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Browse Properties"));
    assert!(body.contains(r#"href="/properties""#));
}

#[test]
fn listings_page_prefills_form_from_address() {
    let app = test_app(StaticSource {
        fallback: vec![listing(1, "Harbour loft", true)],
        ..Default::default()
    });

    let resp = handle(
        get("/properties?location=Porto&property_type=Apartment&min_price=500"),
        &app,
    )
    .expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    let doc = Html::parse_document(&body);

    let location = doc
        .select(&Selector::parse("input#location").unwrap())
        .next()
        .unwrap();
    assert_eq!(location.value().attr("value"), Some("Porto"));

    let min_price = doc
        .select(&Selector::parse("input#min_price").unwrap())
        .next()
        .unwrap();
    assert_eq!(min_price.value().attr("value"), Some("500"));

    let selected_type: String = doc
        .select(&Selector::parse("select#property_type option[selected]").unwrap())
        .flat_map(|o| o.text())
        .collect();
    assert_eq!(selected_type, "Apartment");

    assert_eq!(select_count(&body, "a.listing-card"), 1);
    assert!(body.contains("Harbour loft"));
}

#[test]
fn listings_are_fetched_with_the_canonical_query() {
    let mut responses = HashMap::new();
    responses.insert(
        "location=Oslo&bedrooms=2".to_string(),
        Ok(vec![listing(9, "Oslo match", false)]),
    );
    let app = test_app(StaticSource {
        responses,
        fallback: vec![listing(1, "wrong query", true)],
    });

    let body = body_string(
        handle(get("/properties?bedrooms=2&junk=x&min_area=big&location=Oslo"), &app).unwrap(),
    );

    assert!(body.contains("Oslo match"));
    assert!(!body.contains("wrong query"));
}

#[test]
fn empty_result_renders_no_results_message() {
    let app = test_app(StaticSource::default());

    let body = body_string(handle(get("/properties?query=nothing"), &app).unwrap());

    assert!(body.contains("No properties found matching your criteria."));
    assert!(!body.contains("Failed to load properties"));
    assert_eq!(select_count(&body, "a.listing-card"), 0);
}

#[test]
fn api_failure_renders_error_message_not_error_page() {
    let mut responses = HashMap::new();
    responses.insert("bedrooms=3".to_string(), Err(FetchError::Status(500)));
    let app = test_app(StaticSource {
        responses,
        ..Default::default()
    });

    let resp = handle(get("/properties?bedrooms=3"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Failed to load properties. Please try again later."));
    // the search form is still there to retry with
    assert_eq!(select_count(&body, "form.search-form"), 1);
}

#[test]
fn slow_api_renders_loading_state_that_polls() {
    let source = Arc::new(GatedSource::default());
    let _held = source.gate("query=slow");
    let mut app = test_app(StaticSource::default());
    app.source = source;
    app.render_wait = Duration::from_millis(20);

    let body = body_string(handle(get("/properties?query=slow"), &app).unwrap());

    assert!(body.contains("Loading properties..."));
    assert!(body.contains(r#"hx-get="/properties/results?query=slow""#));
    assert_eq!(select_count(&body, "a.listing-card"), 0);
}

/// Answers after a fixed delay and counts how often it was asked.
struct DelayedSource {
    delay: Duration,
    calls: AtomicUsize,
}

impl ListingSource for DelayedSource {
    fn fetch_listings(&self, _query: &QueryString) -> Result<Vec<ListingRecord>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(self.delay);
        Ok(vec![listing(4, "Patient loft", true)])
    }
}

#[test]
fn results_poll_resumes_the_slow_fetch_until_it_settles() {
    let source = Arc::new(DelayedSource {
        delay: Duration::from_millis(150),
        calls: AtomicUsize::new(0),
    });
    let mut app = test_app(StaticSource::default());
    app.source = source.clone();
    app.render_wait = Duration::from_millis(50);

    let page = body_string(handle(get("/properties?query=x"), &app).unwrap());
    assert!(page.contains("Loading properties..."));

    let mut polls = 0;
    let fragment = loop {
        polls += 1;
        assert!(polls <= 20, "results never settled");
        let body = body_string(handle(get("/properties/results?query=x"), &app).unwrap());
        if !body.contains("Loading properties...") {
            break body;
        }
    };

    assert!(fragment.contains("Patient loft"));
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn results_fragment_is_partial_html() {
    let app = test_app(StaticSource {
        fallback: vec![listing(2, "Fragment flat", true)],
        ..Default::default()
    });

    let body = body_string(handle(get("/properties/results?bedrooms=1"), &app).unwrap());

    assert!(body.contains("Fragment flat"));
    assert!(body.contains("Listed for Sale"));
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));
}

#[test]
fn unknown_route_is_not_found() {
    let app = test_app(StaticSource::default());
    assert!(matches!(
        handle(get("/wallet"), &app),
        Err(crate::errors::ServerError::NotFound)
    ));
}
