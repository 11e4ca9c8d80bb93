//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` so the server crate only imports `service`.

/// Check the configuration file before startup continues.
pub async fn ensure_env(config_path: &str) -> anyhow::Result<()> {
    common::env::ensure_env(config_path).await
}
