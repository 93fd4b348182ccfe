//! Shared application state for the corsette gateway.
//!
//! The CORS policy is compiled once here and handed to the router as an
//! explicit value, so the request pipeline can be exercised without a server.

use std::sync::Arc;

use corsette_core::{build_cors_policy, CorsPolicy};

use crate::config::GatewayConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    cors: Arc<CorsPolicy>,
}

struct AppStateInner {
    cfg: GatewayConfig,
}

impl AppState {
    pub fn new(cfg: GatewayConfig) -> Self {
        let cors = Arc::new(build_cors_policy(cfg.cors.frontend_url.clone()));
        tracing::info!(
            frontend_url = %cfg.cors.frontend_url,
            credentials = cors.allow_credentials(),
            "cors policy compiled"
        );

        Self {
            inner: Arc::new(AppStateInner { cfg }),
            cors,
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn cors(&self) -> Arc<CorsPolicy> {
        Arc::clone(&self.cors)
    }
}
