use crate::app::App;
use crate::domain::ImageGateway;
use crate::fetch::ListingSource;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

/// App wired to an in-process listing source instead of the HTTP API.
pub fn test_app(source: impl ListingSource + 'static) -> App {
    App::with_source(
        Arc::new(source),
        ImageGateway::new("https://ipfs.test"),
        Duration::from_secs(5),
    )
}

pub fn get(uri: &str) -> astra::Request {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> astra::Request {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
