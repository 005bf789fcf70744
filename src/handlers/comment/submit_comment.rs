use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    dto::{
        requests::submit_comment_request::SubmitCommentRequest,
        responses::submit_comment_response::SubmitCommentResponse,
    },
    errors::{code_error::CodeErrorResp, validation_error::ValidationErrors},
    init::state::ServerState,
    util::extract::payload::Payload,
};

#[utoipa::path(
    post,
    path = "/api",
    tag = "comment",
    request_body = SubmitCommentRequest,
    responses(
        (status = 200, description = "Comment accepted", body = SubmitCommentResponse),
        (status = 422, description = "One or more fields failed validation; body maps field name to message"),
        (status = 400, description = "Malformed request body", body = CodeErrorResp)
    )
)]
pub async fn submit_comment(
    State(state): State<Arc<ServerState>>,
    Payload(request): Payload<SubmitCommentRequest>,
) -> Result<Json<SubmitCommentResponse>, ValidationErrors> {
    state.comment_rules().validate(&request)?;

    Ok(Json(SubmitCommentResponse::OK))
}
