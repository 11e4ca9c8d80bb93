//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the database is touched.

use tracing::{info, warn};

/// Ensure the directory holding `config_path` is readable; warn when the file is missing
/// so the operator knows env-var fallbacks are in effect.
pub async fn ensure_env(config_path: &str) -> anyhow::Result<()> {
    match tokio::fs::metadata(config_path).await {
        Ok(meta) if meta.is_file() => {
            info!(%config_path, "using configuration file");
            Ok(())
        }
        Ok(_) => Err(anyhow::anyhow!("{config_path} exists but is not a regular file")),
        Err(_) => {
            warn!(%config_path, "configuration file not found; falling back to environment variables");
            Ok(())
        }
    }
}
