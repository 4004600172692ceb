// responses.rs
use astra::{Body, Response, ResponseBuilder};

use crate::errors::{ResultResp, ServerError};

/// Plain-text response: one line per record outcome, or an error message.
pub fn text_response(status: u16, body: String) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)?;

    Ok(resp)
}

/// Convert a ServerError into a plain-text response.
pub fn error_to_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => plain_error_response(404, "Not Found"),
        ServerError::BadRequest(msg) => plain_error_response(400, &msg),
        ServerError::StorageError(msg) => plain_error_response(500, &msg),
        ServerError::InternalError => plain_error_response(500, "Internal Server Error"),
    }
}

fn plain_error_response(status: u16, message: &str) -> Response {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Body::from(message.to_string()))
        .unwrap()
}
