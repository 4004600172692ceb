// src/tests/utils.rs
use astra::{Body, Request, Response};
use std::io::Read;

use crate::handler::HandlerConfig;
use crate::store::MemStore;

/// Config pointing at the default container names.
pub fn test_config() -> HandlerConfig {
    HandlerConfig::default()
}

/// A well-formed listings page with `count` fully populated cards. Prices
/// differ per card so ordering is visible in the output.
pub fn listing_page(count: usize) -> String {
    let mut cards = String::new();
    for i in 0..count {
        let price = (i + 1) * 100_000;
        cards.push_str(&format!(
            r#"<a class="listing listing-card" data-location="Barrio {i}" data-price="${price}" data-rooms="3" data-bathrooms="2" data-floorarea="85 m2">Listing {i}</a>"#
        ));
    }
    format!("<html><body>{cards}</body></html>")
}

/// Store seeded with one raw page under the default source container.
pub fn seeded_store(key: &str, html: &str) -> MemStore {
    let store = MemStore::new();
    store.insert("listings-raw", key, html);
    store
}

/// Notification payload with a single record.
pub fn event_json(container: &str, key: &str) -> String {
    format!(
        r#"{{"records":[{{"storage":{{"container":{{"name":"{container}"}},"object":{{"key":"{key}"}}}}}}]}}"#
    )
}

pub fn post(path: &str, payload: String) -> Request {
    http::Request::builder()
        .method(http::Method::POST)
        .uri(path)
        .body(Body::from(payload))
        .unwrap()
}

pub fn get(path: &str) -> Request {
    http::Request::builder()
        .method(http::Method::GET)
        .uri(path)
        .body(Body::from(String::new()))
        .unwrap()
}

/// Drain a response body to a string.
pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}
