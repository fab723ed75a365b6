//! A generic JSON collection served over HTTP.
//!
//! Records are arbitrary JSON objects keyed by a numeric `id` the server
//! assigns. This is the contract the eventdesk client expects from its
//! store; the server itself knows nothing about events.

pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub use state::Collection;

/// The full application: `/events` routes over `collection`.
pub fn router(collection: Collection) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::events::router())
        .with_state(collection)
        .layer(cors)
}
