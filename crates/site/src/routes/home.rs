//! Home page route handler.

use axum::response::Html;

/// GET / - landing page.
///
/// The real marketing pages are rendered by the content pipeline; this
/// handler is the minimal stand-in so the server has a public surface.
pub async fn home() -> Html<&'static str> {
    Html(
        "<!doctype html>\
         <html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>Driftline Studio</title></head>\
         <body><main>\
         <h1>Driftline Studio</h1>\
         <p>Design and engineering for small teams.</p>\
         </main></body></html>",
    )
}
