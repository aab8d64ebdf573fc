use axum::{
    body::Body,
    extract::{Request, State},
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use leptos::prelude::*;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;

/// Static files built by cargo-leptos, anything else is a 404
#[debug_handler]
pub async fn file_and_error_handler(
    State(options): State<LeptosOptions>,
    request: Request<Body>,
) -> Response {
    ServeDir::new(options.site_root.as_ref())
        .oneshot(request)
        .await
        .into_response()
}
