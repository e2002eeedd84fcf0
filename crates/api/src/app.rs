use axum::{
    error_handling::HandleErrorLayer,
    middleware,
    routing::{get, post, MethodRouter},
    Router,
};
use domain::services::{CampusRepository, CampusService};
use persistence::repositories::PgCampusRepository;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::middleware::{
    handle_timeout_error, metrics_handler, metrics_middleware, request_id,
    security_headers_middleware,
};
use crate::routes::{fallback, friends, health, peers};

#[derive(Clone)]
pub struct AppState {
    pub service: CampusService,
}

/// Builds the application on top of PostgreSQL.
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    create_app_with_repository(config, Arc::new(PgCampusRepository::new(pool)))
}

/// Builds the application on top of any repository implementation.
pub fn create_app_with_repository(
    config: &Config,
    repository: Arc<dyn CampusRepository>,
) -> Router {
    let state = AppState {
        service: CampusService::new(repository),
    };

    let campus_routes = [
        ("/get_peer_status/", get(peers::get_peer_status)),
        ("/update_peers/", post(peers::update_peers)),
        ("/get_friends_status/", get(friends::get_friends_status)),
        ("/add_friend/", post(friends::add_friend)),
        ("/delete_friend/", post(friends::delete_friend)),
    ]
    .into_iter()
    .fold(Router::new(), |router, (path, handler)| {
        with_slash_variants(router, path, handler.fallback(fallback::method_not_allowed))
    });

    let public_routes = Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(campus_routes)
        .merge(public_routes)
        .fallback(fallback::not_found)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout_error))
                .timeout(Duration::from_secs(config.server.request_timeout_secs)),
        )
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id))
        .with_state(state)
}

/// Serves `path` both with and without its trailing slash.
fn with_slash_variants(
    router: Router<AppState>,
    path: &str,
    handler: MethodRouter<AppState>,
) -> Router<AppState> {
    router
        .route(path, handler.clone())
        .route(path.trim_end_matches('/'), handler)
}
