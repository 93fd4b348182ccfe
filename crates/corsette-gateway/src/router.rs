//! Axum router wiring.
//!
//! The CORS hook is attached last so it wraps every route, the 405 method
//! fallback included.

use axum::{routing::get, Router};

use crate::{app_state::AppState, transport};

pub fn build_router(state: AppState) -> Router {
    let cors = state.cors();
    let app = Router::new()
        .route("/healthz", get(transport::health::healthz))
        .with_state(state);
    transport::cors::attach(app, cors)
}
