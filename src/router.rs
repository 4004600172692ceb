use crate::errors::{ResultResp, ServerError};
use crate::event::NotificationEvent;
use crate::handler::{self, HandlerConfig, RecordOutcome};
use crate::responses::text_response;
use crate::store::ObjectStore;
use astra::Request;
use chrono::Utc;
use std::io::Read;

pub fn handle(mut req: Request, store: &dyn ObjectStore, cfg: &HandlerConfig) -> ResultResp {
    // Owned copies so the body can be read mutably below.
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("POST", "/notifications") => {
            let event = read_event(&mut req)?;
            let today = Utc::now().date_naive();
            let outcomes = handler::process_event(store, cfg, &event, today)?;
            outcomes_response(&outcomes)
        }

        ("GET", "/health") => text_response(200, "ok".to_string()),

        _ => Err(ServerError::NotFound),
    }
}

fn read_event(req: &mut Request) -> Result<NotificationEvent, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("could not read request body: {e}")))?;

    serde_json::from_slice(&body)
        .map_err(|e| ServerError::BadRequest(format!("malformed notification payload: {e}")))
}

/// 200 when at least one record produced a stored export, 400 otherwise
/// (no-data, skipped and empty batches alike). The body lists one line per
/// record, in processing order.
fn outcomes_response(outcomes: &[RecordOutcome]) -> ResultResp {
    let wrote_any = outcomes
        .iter()
        .any(|outcome| matches!(outcome, RecordOutcome::Written { .. }));

    let body = if outcomes.is_empty() {
        "event contained no records".to_string()
    } else {
        outcomes
            .iter()
            .map(RecordOutcome::message)
            .collect::<Vec<_>>()
            .join("\n")
    };

    text_response(if wrote_any { 200 } else { 400 }, body)
}
