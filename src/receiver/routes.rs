use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::global_constants::RECEIVER_UPLOAD_ROUTE;
use crate::receiver::handlers::{upload_screenshot, ReceiverState};

/// Screenshots are accepted at any size, so the default body limit is lifted.
pub fn routes() -> Router<ReceiverState> {
    Router::new()
        .route(RECEIVER_UPLOAD_ROUTE, post(upload_screenshot))
        .layer(DefaultBodyLimit::disable())
}
