//! HTTP middleware stack for the site.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Admin gate (session verification, protected routes only)
//! 4. Security headers (CSP, frame denial, etc.)

pub mod admin_gate;
pub mod security_headers;

pub use admin_gate::{LOGIN_PATH, SESSION_COOKIE_NAME, admin_gate};
pub use security_headers::security_headers_middleware;
