use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;

use crate::errors::code_error::{CodeError, CodeErrorResp, code_err};

/// Binds the request body into `T` from either JSON or form-urlencoded
/// payloads, dispatching on the Content-Type header. Undecodable bodies and
/// unsupported media types reject with a binding [`CodeErrorResp`].
#[derive(Debug)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = CodeErrorResp;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
                code_err(CodeError::PAYLOAD_BINDING_ERROR, anyhow::anyhow!(e.body_text()))
            })?;
            Ok(Payload(value))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state).await.map_err(|e| {
                code_err(CodeError::PAYLOAD_BINDING_ERROR, anyhow::anyhow!(e.body_text()))
            })?;
            Ok(Payload(value))
        } else {
            Err(CodeError::UNSUPPORTED_MEDIA_TYPE.into())
        }
    }
}
