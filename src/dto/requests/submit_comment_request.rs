use serde_derive::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A comment-form submission. Absent keys bind to empty strings so the
/// required rule reports them instead of a binding failure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitCommentRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub content: String,
}
