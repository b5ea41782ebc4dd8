use axum::{
    routing::{get, post},
    Router,
};

use crate::config::Config;
use crate::controllers::sizing_controller::{calculate_system, service_info};

/// Build the application router. Handlers extract the immutable `Config`
/// via `State`; the service keeps no other state.
pub fn sizing_routes(config: Config) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/calculate", post(calculate_system))
        .with_state(config)
}
