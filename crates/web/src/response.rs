//! Response envelope and JSON rendering.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Successful result of an action: `{status, count?, message?, data}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// A single record, no count.
    pub fn single(data: T) -> Self {
        Self {
            status: "ok",
            count: None,
            message: None,
            data,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// A list, counted.
    pub fn list(data: Vec<T>) -> Self {
        Self {
            status: "ok",
            count: Some(data.len()),
            message: None,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        PrettyJson(self).into_response()
    }
}

/// JSON body indented with four spaces, non-ASCII text left unescaped.
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        let mut buf = Vec::with_capacity(256);
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));

        match self.0.serialize(&mut serializer) {
            Ok(()) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                buf,
            )
                .into_response(),
            Err(e) => {
                tracing::error!("Failed to serialize response: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(
                        header::CONTENT_TYPE,
                        HeaderValue::from_static("text/plain; charset=utf-8"),
                    )],
                    e.to_string(),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_counts_items() {
        let response = ApiResponse::list(vec![1, 2, 3]);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"status": "ok", "count": 3, "data": [1, 2, 3]})
        );
    }

    #[test]
    fn test_single_has_no_count() {
        let response = ApiResponse::single(json!({"id": 1})).with_message("note");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"status": "ok", "message": "note", "data": {"id": 1}})
        );
    }

    #[tokio::test]
    async fn test_pretty_json_keeps_cyrillic_and_indents() {
        let response = PrettyJson(json!({"distance": "5 км"})).into_response();
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            HeaderValue::from_static("application/json")
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert_eq!(text, "{\n    \"distance\": \"5 км\"\n}");
    }
}
