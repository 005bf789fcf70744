use std::collections::BTreeMap;

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::error;

/// One entry per failing field: field name mapped to its localized message.
/// Shape-distinct from [`CodeErrorResp`](super::code_error::CodeErrorResp),
/// which covers request-level binding failures.
#[derive(Debug)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn new(errors: BTreeMap<&'static str, String>) -> Self {
        ValidationErrors(errors)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoResponse for ValidationErrors {
    fn into_response(self) -> axum::response::Response {
        for (field, message) in &self.0 {
            error!(field = %field, message = %message, "Validation failed");
        }

        (StatusCode::UNPROCESSABLE_ENTITY, Json(self.0)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use super::ValidationErrors;

    #[tokio::test]
    async fn response_is_a_plain_field_to_message_object() {
        let mut map = BTreeMap::new();
        map.insert("name", "名前は必須入力です".to_string());
        map.insert("content", "本文は必須入力です".to_string());

        let response = ValidationErrors::new(map).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["name"], "名前は必須入力です");
        assert_eq!(body["content"], "本文は必須入力です");
        assert_eq!(body.as_object().unwrap().len(), 2);
    }
}
