use std::sync::Arc;

use appinfo_provider::AppInfo;
use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Serialize;
use tower_http::trace::TraceLayer;

/// The only route served. The `healtz` spelling is part of the wire contract.
pub const HEALTZ_PATH: &str = "/api/v1/healtz";

/// Body sent when the metadata cannot be encoded.
pub const ENCODE_ERROR_BODY: &str = "Error encoding JSON";

/// Builds the router serving `app_info` on [`HEALTZ_PATH`].
///
/// The snapshot is moved into router state and shared read-only by every request. Any other path falls through to
/// axum's default 404.
pub fn router(app_info: AppInfo) -> Router {
    Router::new()
        .route(HEALTZ_PATH, get(healtz))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(app_info))
}

async fn healtz(State(app_info): State<Arc<AppInfo>>) -> Response {
    encode_response(app_info.as_ref())
}

/// Encodes `value` as a `200` response, or a `500` carrying [`ENCODE_ERROR_BODY`] if serialization fails.
///
/// The success response keeps `Content-Type: text/plain` even though the body is JSON; existing probes depend on
/// it. The body ends with a newline.
pub fn encode_response<T>(value: &T) -> Response
where
    T: Serialize + ?Sized,
{
    match serde_json::to_vec(value) {
        Ok(mut body) => {
            body.push(b'\n');
            (StatusCode::OK, [(header::CONTENT_TYPE, "text/plain")], body).into_response()
        }
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, ENCODE_ERROR_BODY).into_response(),
    }
}
