//! JSON request bodies.
//!
//! The validation middleware and the handlers both decode bodies through
//! [`decode_json`], so a body the checks accept is accepted by the handler
//! too, and every rejection is a 400 with the usual `{"error": ...}` body.

use axum::{
    body::{Body, Bytes, to_bytes},
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Reads a body of at most `limit` bytes.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the body is larger than `limit` or
/// the connection fails mid-read.
pub async fn read_body(body: Body, limit: usize) -> Result<Bytes, AppError> {
    to_bytes(body, limit).await.map_err(|e| {
        AppError::bad_request(
            "Request body is too large or unreadable",
            json!({ "reason": e.to_string(), "limit": limit }),
        )
    })
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Decodes a buffered body into `T`.
///
/// An empty body decodes as `{}` whatever its content type. A non-empty body
/// must be declared as JSON.
///
/// # Errors
///
/// Returns [`AppError::Validation`] with one of these messages:
/// - `Expected request with Content-Type: application/json`
/// - `Malformed JSON body` when the bytes are not JSON
/// - `Invalid request body` when the JSON does not fit `T`, such as a
///   string where a number belongs
pub fn decode_json<T: DeserializeOwned>(headers: &HeaderMap, bytes: &[u8]) -> Result<T, AppError> {
    let bytes: &[u8] = if bytes.is_empty() {
        b"{}"
    } else if is_json_content_type(headers) {
        bytes
    } else {
        return Err(AppError::bad_request(
            "Expected request with Content-Type: application/json",
            json!({
                "content_type": headers
                    .get(header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok()),
            }),
        ));
    };

    serde_json::from_slice(bytes).map_err(|e| {
        let message = if e.is_data() {
            "Invalid request body"
        } else {
            "Malformed JSON body"
        };

        AppError::bad_request(message, json!({ "reason": e.to_string() }))
    })
}

/// JSON body extractor whose rejections are [`AppError`]s.
///
/// Used in place of [`axum::Json`] on the user handlers.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T> FromRequest<AppState> for JsonBody<T>
where
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        let bytes = read_body(body, state.body_limit).await?;

        decode_json(&parts.headers, &bytes).map(JsonBody)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::Value;

    use crate::api::dto::user::PatchUserRequest;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    #[test]
    fn test_empty_body_decodes_as_empty_object() {
        let value: Value = decode_json(&HeaderMap::new(), b"").unwrap();
        assert_eq!(value, json!({}));

        let patch: PatchUserRequest = decode_json(&HeaderMap::new(), b"").unwrap();
        assert!(patch.password.is_none());
        assert!(patch.first_name.is_none());
    }

    #[test]
    fn test_content_type_is_required_for_non_empty_body() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        let err = decode_json::<Value>(&headers, br#"{"a":1}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected request with Content-Type: application/json"
        );

        let err = decode_json::<Value>(&HeaderMap::new(), br#"{"a":1}"#).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_content_type_parameters_and_suffix_are_accepted() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("Application/JSON; charset=utf-8"),
        );
        assert!(decode_json::<Value>(&headers, b"{}").is_ok());

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/merge-patch+json"),
        );
        assert!(decode_json::<Value>(&headers, b"{}").is_ok());
    }

    #[test]
    fn test_syntax_and_type_errors_have_distinct_messages() {
        let err = decode_json::<Value>(&json_headers(), b"{not json").unwrap_err();
        assert_eq!(err.to_string(), "Malformed JSON body");

        let err = decode_json::<PatchUserRequest>(&json_headers(), br#"{"permissionLevel":"high"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid request body");
    }
}
