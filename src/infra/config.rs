//! Centralized configuration (environment variables + defaults).
//!
//! Call `dotenv::dotenv()` before reading, as the binary does.

use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_DATA_PATH: &str = "data/schools.json";

/// Address the API server listens on (`SCHOOLS_BIND_ADDR`).
pub fn bind_addr() -> anyhow::Result<SocketAddr> {
    let raw = std::env::var("SCHOOLS_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    raw.parse::<SocketAddr>()
        .map_err(|e| anyhow::anyhow!("SCHOOLS_BIND_ADDR must be host:port (got {:?}): {}", raw, e))
}

/// Location of the JSON document backing the store (`SCHOOLS_DATA_PATH`).
pub fn data_path() -> PathBuf {
    std::env::var("SCHOOLS_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH))
}

/// Wipe the store on start-up (`SCHOOLS_RESET_ON_START=true`).
pub fn reset_on_start() -> bool {
    std::env::var("SCHOOLS_RESET_ON_START").unwrap_or_default() == "true"
}
