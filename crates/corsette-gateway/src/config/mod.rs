//! Gateway config loader (strict parsing).

pub mod schema;

use std::{env, fs};

use corsette_core::error::{CorsetteError, Result};

pub use schema::{CorsSection, GatewayConfig, ServerSection};

pub const DEFAULT_CONFIG_PATH: &str = "corsette.yaml";
/// Overrides [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "CORSETTE_CONFIG";
/// Overrides `cors.frontend_url`.
pub const FRONTEND_URL_ENV: &str = "FRONTEND_URL";

/// Load from `$CORSETTE_CONFIG` (or `corsette.yaml`), then apply `$FRONTEND_URL`.
pub fn load() -> Result<GatewayConfig> {
    let path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let mut cfg = load_from_file(&path)?;
    apply_frontend_url_override(&mut cfg, env::var(FRONTEND_URL_ENV).ok());
    Ok(cfg)
}

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| CorsetteError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| CorsetteError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn apply_frontend_url_override(cfg: &mut GatewayConfig, frontend_url: Option<String>) {
    if let Some(url) = frontend_url {
        tracing::info!(frontend_url = %url, "cors.frontend_url overridden from environment");
        cfg.cors.frontend_url = url;
    }
}
