//! Top-level router assembly.
//!
//! Combines the JSON API, the server-rendered web UI, static assets, and the
//! health endpoint into a single application router. Trailing slashes are
//! normalized so `/api/notes/` and `/api/notes` reach the same handler.

use axum::{middleware, routing::get, Router};
use tower::Layer as _;
use tower_http::{
    normalize_path::{NormalizePath, NormalizePathLayer},
    services::ServeDir,
};

use crate::{
    api::{
        handlers::health_handler,
        middleware::{auth, rate_limit, tracing},
        routes as api_routes,
    },
    state::AppState,
    web,
};

/// Build the full application router.
///
/// Route groups:
///
/// - `POST /token` and `POST /api/users` - credential endpoints behind the
///   strict rate limiter
/// - `/api/*` - bearer-protected JSON API behind the standard rate limiter
/// - `/` and `/notes` - cookie-protected web pages
/// - `/login` and `/logout` - public web pages behind the strict rate limiter
/// - `GET /health` - liveness and database connectivity check
/// - `/static/*` - stylesheets and other assets
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api_routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::layer())
        .merge(api_routes::public_api_routes().layer(rate_limit::secure_layer()));

    let token_router = api_routes::public_routes().layer(rate_limit::secure_layer());

    let web_router = web::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            web::middleware::web_auth::layer,
        ))
        .merge(web::routes::public_routes().layer(rate_limit::secure_layer()));

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(token_router)
        .nest("/api", api_router)
        .merge(web_router)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
