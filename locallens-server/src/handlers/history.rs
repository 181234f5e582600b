//! History view handler

use axum::{extract::State, response::Html};

use crate::error::HistoryPageError;
use crate::handlers::AppState;
use crate::history::render_history;

/// Upload history as an HTML page
///
/// Lists every analyzed upload, most recent first, with its insight and the
/// stored image.
#[utoipa::path(
    get,
    path = "/history-view",
    tag = "History",
    responses(
        (status = 200, description = "HTML history page", body = String, content_type = "text/html"),
        (status = 500, description = "Could not load history", body = String, content_type = "text/plain")
    )
)]
pub async fn history_view_handler(
    State(state): State<AppState>,
) -> Result<Html<String>, HistoryPageError> {
    let page = render_history(&state.record_log).await?;
    Ok(Html(page))
}
