pub mod assets;
pub mod config;
pub mod content;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod seo;

pub use routes::AppState;

use std::sync::Arc;

use acceleron_inquiry::IntakeDispatcher;

/// Build the application router.
///
/// The dispatcher is injected so integration tests can drive the form
/// action against a stub; the binary wires in the HTTP one.
pub fn create_app(config: config::Config, intake: Arc<dyn IntakeDispatcher>) -> axum::Router {
    routes::router(AppState { config, intake })
}
