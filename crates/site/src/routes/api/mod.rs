//! JSON API routes.

pub mod csrf;
pub mod newsletter;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/csrf", get(csrf::issue))
        .route("/newsletter/subscribe", post(newsletter::subscribe))
}
