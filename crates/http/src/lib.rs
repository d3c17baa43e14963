//! HTTP API server for goal-lookup.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;
mod usage;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};

use goal_lookup_service::GoalService;

pub use response_types::{GoalListResponse, GoalSummary};

/// Shared application state for all HTTP handlers.
///
/// Holds no dataset: every request reloads goals through the service.
pub struct AppState {
    /// Service resolving lookups against a freshly loaded dataset
    pub goal_service: Arc<GoalService>,
}

impl AppState {
    #[must_use]
    pub fn new(goal_service: Arc<GoalService>) -> Self {
        Self { goal_service }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(usage::serve_usage))
        .route("/health", get(health))
        .route("/goal", get(handlers::goals::get_goal))
        .route("/goal/compact", get(handlers::goals::get_goal_compact))
        .route("/goal/random", get(handlers::goals::get_random_goal))
        .route("/goals", get(handlers::goals::list_goals))
        .route("/goals/difficulty/{level}", get(handlers::goals::goals_by_difficulty))
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}
