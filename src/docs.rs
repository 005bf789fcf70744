//! OpenAPI documentation registration for Swagger UI.
//!
//! Important: Utoipa only exposes operations you list in `#[openapi(paths(...))]`.
//! Handler functions still need their own `#[utoipa::path(...)]` attributes.

use utoipa::OpenApi;

// ---- handlers (for `paths(...)`) ----
use crate::handlers::{
    comment::submit_comment,
    server::{healthcheck, root},
};

// ---- schemas (for `components(schemas(...))`) ----
use crate::dto::{
    requests::submit_comment_request::SubmitCommentRequest,
    responses::submit_comment_response::SubmitCommentResponse,
};
use crate::errors::code_error::CodeErrorResp;
use crate::handlers::server::healthcheck::ServerHealthcheckResponse;
use crate::handlers::server::root::RootHandlerResponse;

/// Central OpenAPI document for Swagger UI.
#[derive(OpenApi)]
#[openapi(
    paths(
        // --- server ---
        healthcheck::healthcheck,
        root::root_handler,

        // --- comment ---
        submit_comment::submit_comment,
    ),
    components(
        schemas(
            // shared error response
            CodeErrorResp,

            // --- comment DTOs ---
            SubmitCommentRequest,
            SubmitCommentResponse,

            // --- server DTOs ---
            ServerHealthcheckResponse,
            RootHandlerResponse,
        )
    ),
    tags(
        (name = "server", description = "Server status endpoints"),
        (name = "comment", description = "Comment submission endpoint")
    )
)]
pub struct ApiDoc;
