use std::net::SocketAddr;

/// Application-level constants
pub const APP_NAME: &str = "Corporate Action Portal";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Loopback only unless `CAPORTAL_ADDR` says otherwise.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:7420";

/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "CAPORTAL_ADDR";

/// Log filter used when `RUST_LOG` is unset or invalid.
pub fn default_log_filter() -> &'static str {
    "info,caportal_lib=debug"
}

/// Runtime settings resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub bind_addr: SocketAddr,
}

impl PortalConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through `lookup`; unset variables take defaults,
    /// malformed ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(BIND_ADDR_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let bind_addr = raw
            .parse::<SocketAddr>()
            .map_err(|e| format!("Invalid {BIND_ADDR_VAR} '{raw}': {e}"))?;

        Ok(Self { bind_addr })
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 7420)),
        }
    }
}
