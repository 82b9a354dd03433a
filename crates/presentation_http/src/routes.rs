//! Route definitions

use axum::{
    Router,
    middleware::from_fn,
    routing::get,
};

use crate::{handlers, middleware, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(
            "/weather",
            get(handlers::weather::list_records).post(handlers::weather::create_record),
        )
        .route(
            "/weather/latest/{city_name}",
            get(handlers::weather::get_latest_by_city),
        )
        .route(
            "/weather/{id}",
            get(handlers::weather::get_record)
                .put(handlers::weather::update_record)
                .delete(handlers::weather::delete_record),
        )
        .layer(from_fn(middleware::request_id))
        .with_state(state)
}
