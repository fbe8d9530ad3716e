//! Landing page and static assets compiled into the binary.

use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};

const INDEX_HTML: &str = include_str!("../assets/index.html");

const ASSETS: &[(&str, &str)] = &[
    ("styles.css", include_str!("../assets/styles.css")),
    ("app.js", include_str!("../assets/app.js")),
];

pub(crate) async fn landing_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub(crate) async fn static_asset(Path(file): Path<String>) -> Response {
    match ASSETS.iter().find(|(name, _)| *name == file) {
        Some((name, contents)) => {
            let mime = mime_guess::from_path(name).first_or_octet_stream();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime.essence_str().to_string())],
                *contents,
            )
                .into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
