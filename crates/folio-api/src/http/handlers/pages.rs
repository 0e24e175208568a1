//! Landing page and navigation routes.
//!
//! The site is a single page. `/` serves `index.html` from the web directory
//! and the navbar paths redirect to anchors on it.

use std::path::Path;

use axum::Router;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};

/// Navbar path and the landing page anchor it points at.
pub const SECTIONS: [(&str, &str); 4] = [
    ("/projects", "/#projects"),
    ("/expertise", "/#expertise"),
    ("/about", "/#about"),
    ("/contact", "/#contact"),
];

fn found(location: &'static str) -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, location)])
}

/// GET /home - Alias for the landing page.
pub async fn home_alias() -> impl IntoResponse {
    found("/")
}

/// Mount `/`, `/home`, the section redirects, and `/static` onto `router`.
pub fn routes<S>(router: Router<S>, web_dir: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let router = SECTIONS.iter().fold(router, |router, &(path, anchor)| {
        router.route(path, get(move || async move { found(anchor) }))
    });

    router
        .route("/home", get(home_alias))
        .route_service("/", ServeFile::new(web_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(web_dir.join("static")))
}
