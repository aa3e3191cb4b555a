//! Request IDs: accept a caller's `x-request-id` or mint a UUID v7.

use salvo::{
    http::{StatusCode, header::HeaderValue},
    prelude::Response,
};
use tracing::debug;
use uuid::Uuid;

pub(super) const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest caller-supplied ID that is propagated as-is.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Keep an incoming ID when it is short, non-blank printable ASCII;
/// otherwise mint a new one.
pub(super) fn resolve_request_id(incoming: Option<String>) -> String {
    match incoming {
        Some(id) if is_acceptable(&id) => id,
        Some(id) => {
            debug!(len = id.len(), "replacing unusable incoming request id");

            Uuid::now_v7().to_string()
        }
        None => Uuid::now_v7().to_string(),
    }
}

fn is_acceptable(id: &str) -> bool {
    !id.trim().is_empty()
        && id.len() <= MAX_REQUEST_ID_LEN
        && id.bytes().all(|byte| byte.is_ascii_graphic())
}

pub(super) fn set_request_id_header(res: &mut Response, request_id: &str) {
    if let Ok(value) = HeaderValue::from_str(request_id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
}

pub(super) fn response_status_or_ok(status_code: Option<StatusCode>) -> StatusCode {
    status_code.unwrap_or(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_generated(id: &str) -> bool {
        Uuid::parse_str(id).is_ok()
    }

    #[test]
    fn well_formed_incoming_id_is_kept() {
        assert_eq!(resolve_request_id(Some("abc-123".to_string())), "abc-123");
    }

    #[test]
    fn unusable_incoming_ids_are_replaced() {
        for incoming in ["  ", "has space", &"x".repeat(MAX_REQUEST_ID_LEN + 1)] {
            let id = resolve_request_id(Some(incoming.to_string()));

            assert!(is_generated(&id), "{incoming:?} should be replaced, got {id:?}");
        }
    }

    #[test]
    fn missing_id_is_generated() {
        assert!(is_generated(&resolve_request_id(None)), "expected a uuid");
    }

    #[test]
    fn missing_status_means_ok() {
        assert_eq!(response_status_or_ok(None), StatusCode::OK);
        assert_eq!(
            response_status_or_ok(Some(StatusCode::NOT_FOUND)),
            StatusCode::NOT_FOUND
        );
    }
}
