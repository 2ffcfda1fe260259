use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Request},
    middleware,
    routing::{get, post},
    Router,
};
use log::{info, warn};
use sqlx::MySqlPool;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::rsvp_handlers::{create_rsvp, get_rsvps};
use crate::store::mysql::MySqlRsvpStore;
use crate::store::RsvpStore;

/// Request bodies accepted up to 50 MB for both JSON and form submissions.
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Creates a router backed by the MySQL store.
pub fn create_router(pool: MySqlPool) -> Router {
    create_router_with_store(Arc::new(MySqlRsvpStore::new(pool)), "/api")
}

/// Creates a router with a given store implementation.
pub fn create_router_with_store<S>(store: Arc<S>, prefix: &str) -> Router
where
    S: RsvpStore + 'static,
{
    info!("Setting up API routes with prefix: '{}'", prefix);

    // All origins, methods and headers are permitted on all routes.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Logging middleware to trace all requests
    async fn logging_middleware(
        req: Request,
        next: middleware::Next,
    ) -> impl axum::response::IntoResponse {
        info!(
            "Router received request: method={}, uri={}",
            req.method(),
            req.uri()
        );
        next.run(req).await
    }

    let api_routes = Router::new()
        .route("/rsvps", get(get_rsvps))
        .route("/rsvp", post(create_rsvp))
        .with_state(store);

    let router = if prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(prefix, api_routes)
    };

    router
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::from_fn(logging_middleware))
        .fallback(|req: Request| async move {
            warn!("No route matched for: {} {}", req.method(), req.uri());
            (
                axum::http::StatusCode::NOT_FOUND,
                "The requested resource was not found".to_string(),
            )
        })
}
