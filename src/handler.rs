// src/handler.rs
use chrono::NaiveDate;
use tracing::{info, warn};

use crate::csv;
use crate::errors::ServerError;
use crate::event::{NotificationEvent, NotificationRecord};
use crate::extract::extract_listings;
use crate::store::ObjectStore;

#[derive(Debug, Clone)]
pub struct HandlerConfig {
    /// Container watched for arriving HTML documents.
    pub source_container: String,
    /// Container receiving the dated CSV exports.
    pub destination_container: String,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            source_container: "listings-raw".to_string(),
            destination_container: "listings-csv".to_string(),
        }
    }
}

impl HandlerConfig {
    /// Environment overrides, falling back to the defaults above.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            source_container: std::env::var("SOURCE_CONTAINER")
                .unwrap_or(defaults.source_container),
            destination_container: std::env::var("DESTINATION_CONTAINER")
                .unwrap_or(defaults.destination_container),
        }
    }
}

/// Terminal state of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Listings came out of the document and the dated CSV was stored.
    Written {
        container: String,
        key: String,
        listings: usize,
    },
    /// The document parsed but held no listing cards; nothing was written.
    NoListings { key: String },
    /// The record pointed at a container this service does not watch.
    Skipped { container: String, key: String },
}

impl RecordOutcome {
    pub fn message(&self) -> String {
        match self {
            RecordOutcome::Written {
                container,
                key,
                listings,
            } => format!("stored {listings} listings at {container}/{key}"),
            RecordOutcome::NoListings { key } => format!("no listing cards found in {key}"),
            RecordOutcome::Skipped { container, key } => {
                format!("skipped {container}/{key}: not the watched container")
            }
        }
    }
}

/// Runs one record end to end: read the arrived HTML object, extract the
/// listings, render the CSV, store it under the current date. Storage
/// failures and undecodable source bytes are fatal; field-level problems
/// degrade inside the extractor instead.
pub fn process_record(
    store: &dyn ObjectStore,
    cfg: &HandlerConfig,
    record: &NotificationRecord,
    today: NaiveDate,
) -> Result<RecordOutcome, ServerError> {
    let container = record.container();
    let key = record.key();

    if container != cfg.source_container {
        warn!(container, key, "notification for unwatched container");
        return Ok(RecordOutcome::Skipped {
            container: container.to_string(),
            key: key.to_string(),
        });
    }

    let bytes = store
        .get_object(container, key)
        .map_err(|e| ServerError::StorageError(format!("read {container}/{key}: {e}")))?;

    let html = String::from_utf8(bytes)
        .map_err(|e| ServerError::StorageError(format!("{container}/{key} is not UTF-8: {e}")))?;

    let rows = extract_listings(&html, today);
    if rows.is_empty() {
        info!(key, "document held no listing cards");
        return Ok(RecordOutcome::NoListings {
            key: key.to_string(),
        });
    }

    let document = csv::render(&rows);
    let dest_key = format!("{}.csv", today.format("%Y-%m-%d"));

    store
        .put_object(
            &cfg.destination_container,
            &dest_key,
            document.as_bytes(),
            &mime::TEXT_CSV,
        )
        .map_err(|e| {
            ServerError::StorageError(format!(
                "write {}/{dest_key}: {e}",
                cfg.destination_container
            ))
        })?;

    info!(
        listings = rows.len(),
        container = %cfg.destination_container,
        key = %dest_key,
        "export stored"
    );

    Ok(RecordOutcome::Written {
        container: cfg.destination_container.clone(),
        key: dest_key,
        listings: rows.len(),
    })
}

/// Processes the records of one event strictly in order, with no shared
/// state between them. The first fatal error aborts the rest of the batch;
/// exports already stored stand.
pub fn process_event(
    store: &dyn ObjectStore,
    cfg: &HandlerConfig,
    event: &NotificationEvent,
    today: NaiveDate,
) -> Result<Vec<RecordOutcome>, ServerError> {
    let mut outcomes = Vec::with_capacity(event.records.len());
    for record in &event.records {
        outcomes.push(process_record(store, cfg, record, today)?);
    }
    Ok(outcomes)
}
