use crate::{AppConfig, routes};
use axum::{Extension, Router};
use sea_orm::DatabaseConnection;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub(crate) fn create_app(
    app_config: AppConfig,
    seaorm_pool: Arc<DatabaseConnection>,
    static_dir: Option<&Path>,
) -> Router {
    let mut app = Router::new()
        .merge(routes::quiz::create_router())
        .merge(routes::admin::create_router())
        .merge(routes::status::create_router());

    if let Some(static_dir) = static_dir {
        tracing::info!(static_dir = %static_dir.display(), "serving static files");
        app = app.fallback_service(ServeDir::new(static_dir));
    }

    // Router layers are called bottom to top
    app.layer(Extension(seaorm_pool))
        .layer(Extension(app_config))
        .layer(TraceLayer::new_for_http())
}
