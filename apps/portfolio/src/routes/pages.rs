use askama::Template;
use axum::{
    extract::{Query, State},
    http::Uri,
    response::Html,
};
use tracing::debug;

use crate::errors::AppError;
use crate::state::AppState;
use crate::view::{PortfolioPage, UiState, ViewQuery};

/// GET /?section=<key>&theme=<light|dark>
pub async fn handle_portfolio(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<Html<String>, AppError> {
    let ui = UiState::from_query(&query);
    debug!(section = %ui.active_section, dark_mode = ui.dark_mode, "rendering portfolio");

    let page = PortfolioPage::new(state.content, state.profile, ui, &mut rand::thread_rng());
    Ok(Html(page.render()?))
}

pub async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
