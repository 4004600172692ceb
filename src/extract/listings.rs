// src/extract/listings.rs
use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};

use crate::extract::normalize::{normalize_number, normalize_price, NOT_AVAILABLE};
use crate::extract::row::ListingRow;

// Listing cards carry exactly these two class tokens, in this order. The
// match is on the whole class attribute, so reordered or extended class
// lists are not cards.
const CARD_SELECTOR: &str = r#"a[class="listing listing-card"]"#;

const LOCATION_ATTR: &str = "data-location";
const PRICE_ATTR: &str = "data-price";
const ROOMS_ATTR: &str = "data-rooms";
const BATHROOMS_ATTR: &str = "data-bathrooms";
const AREA_ATTR: &str = "data-floorarea";

// Class-token fragments that mark the fallback spans, both feed languages.
const ROOMS_LABELS: [&str; 2] = ["rooms", "habitaciones"];
const BATHROOMS_LABELS: [&str; 2] = ["bathrooms", "baños"];

/// Pulls every listing card out of `html`, in document order, one row per
/// card. Fields that are missing or carry no usable value degrade to the
/// `N/A` sentinel; a malformed card never drops the row.
pub fn extract_listings(html: &str, download_date: NaiveDate) -> Vec<ListingRow> {
    let document = Html::parse_document(html);
    let cards = Selector::parse(CARD_SELECTOR).expect("card selector is valid");
    let spans = Selector::parse("span").expect("span selector is valid");

    let stamp = download_date.format("%Y-%m-%d").to_string();

    let mut rows = Vec::new();
    for card in document.select(&cards) {
        let rooms = counted_field(card, &spans, ROOMS_ATTR, &ROOMS_LABELS);
        let bathrooms = counted_field(card, &spans, BATHROOMS_ATTR, &BATHROOMS_LABELS);

        rows.push(ListingRow {
            download_date: stamp.clone(),
            neighborhood: location_of(card),
            price: normalize_price(attr_value(card, PRICE_ATTR)),
            num_rooms: normalize_number(rooms.as_deref()),
            num_bathrooms: normalize_number(bathrooms.as_deref()),
            area_m2: normalize_number(attr_value(card, AREA_ATTR)),
        });
    }

    rows
}

/// Neighborhood comes straight off the card, trimmed. Only a missing (or
/// empty) attribute falls back to the sentinel; whitespace-only values trim
/// to the empty string and stay that way.
fn location_of(card: ElementRef<'_>) -> String {
    match attr_value(card, LOCATION_ATTR) {
        Some(raw) => raw.trim().to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Rooms and bathrooms resolve in two tiers: the dedicated attribute wins,
/// and only when it is absent is the card searched for a labeled span.
fn counted_field(
    card: ElementRef<'_>,
    spans: &Selector,
    attr: &str,
    labels: &[&str],
) -> Option<String> {
    if let Some(value) = attr_value(card, attr) {
        return Some(value.to_string());
    }
    labeled_span_text(card, spans, labels)
}

/// First descendant span with a class token containing one of `labels`
/// (case-insensitive), yielding its concatenated text, trimmed.
fn labeled_span_text(card: ElementRef<'_>, spans: &Selector, labels: &[&str]) -> Option<String> {
    card.select(spans).find_map(|span| {
        let labeled = span.value().classes().any(|class| {
            let class = class.to_lowercase();
            labels.iter().any(|label| class.contains(label))
        });
        labeled.then(|| span.text().collect::<String>().trim().to_string())
    })
}

/// Attribute lookup where an empty value counts as absent.
fn attr_value<'a>(card: ElementRef<'a>, name: &str) -> Option<&'a str> {
    card.value().attr(name).filter(|value| !value.is_empty())
}
