//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                          - Home page
//! GET  /health                    - Health check
//!
//! # Admin area
//! GET  /admin                     - Login landing page (ungated)
//! GET  /admin/dashboard           - Dashboard (session gate)
//!
//! # API
//! GET  /api/csrf                  - Issue a CSRF token (sets cookie)
//! POST /api/newsletter/subscribe  - Newsletter signup (CSRF required)
//! ```
//!
//! Every route nested under `/admin` runs behind the session gate; the
//! bare `/admin` login page does not, so rejected requests have somewhere
//! to land.

pub mod admin;
pub mod api;
pub mod home;

use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::middleware::{admin_gate, security_headers_middleware};
use crate::state::AppState;

/// Build the complete application router.
///
/// Shared between `main` and the integration tests so both exercise the
/// exact same middleware stack.
pub fn app(state: AppState) -> Router {
    let admin_area = Router::new()
        .route("/dashboard", get(admin::dashboard))
        .route_layer(middleware::from_fn_with_state(state.clone(), admin_gate));

    Router::new()
        .route("/health", get(health))
        .route("/", get(home::home))
        .route("/admin", get(admin::login_page))
        .nest("/admin", admin_area)
        .nest("/api", api::router())
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
