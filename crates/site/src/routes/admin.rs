//! Admin area route handlers.
//!
//! The bare `/admin` path is the login landing page and is reachable
//! without a session - it is where the gate redirects rejected requests.
//! Everything nested below it runs behind the session gate.
//!
//! There is no password form: admin sessions are minted out of band with
//! the CLI (`driftline session mint`) and installed as the
//! `admin_session` cookie.

use axum::response::Html;

/// GET /admin - login landing page (ungated).
pub async fn login_page() -> Html<&'static str> {
    Html(
        "<!doctype html>\
         <html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>Driftline Admin</title></head>\
         <body><main>\
         <h1>Driftline Admin</h1>\
         <p>Sign-in required. Install an admin session cookie to continue.</p>\
         </main></body></html>",
    )
}

/// GET /admin/dashboard - admin dashboard (gated).
pub async fn dashboard() -> Html<&'static str> {
    Html(
        "<!doctype html>\
         <html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>Dashboard - Driftline Admin</title></head>\
         <body><main>\
         <h1>Dashboard</h1>\
         <p>Content tools live here.</p>\
         </main></body></html>",
    )
}
