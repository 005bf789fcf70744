use serde_derive::Serialize;
use utoipa::ToSchema;

/// The acknowledgment payload for an accepted comment. The wire shape is
/// fixed: `{"result":"OK"}`.
#[derive(Serialize, ToSchema)]
pub struct SubmitCommentResponse {
    pub result: &'static str,
}

impl SubmitCommentResponse {
    pub const OK: SubmitCommentResponse = SubmitCommentResponse { result: "OK" };
}
