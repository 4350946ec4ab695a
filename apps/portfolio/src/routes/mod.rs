pub mod health;
pub mod pages;

use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;
use crate::view::CV_PATH;

pub fn build_router(state: AppState) -> Router {
    let cv = ServeFile::new(&state.config.cv_file);
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/", get(pages::handle_portfolio))
        .route("/health", get(health::health_handler))
        // Static collaborators: the CV document and the stylesheet
        .route_service(CV_PATH, cv)
        .nest_service("/assets", assets)
        .fallback(pages::handle_not_found)
        .with_state(state)
}
