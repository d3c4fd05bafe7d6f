use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Landing page for catalog administrators.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
