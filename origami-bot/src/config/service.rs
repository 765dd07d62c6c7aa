//! Service config: health-check port and shutdown grace period. Loaded from env.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_HEALTH_PORT: u16 = 8000;
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// HEALTH_PORT
    pub health_port: u16,
    /// SHUTDOWN_GRACE_SECS
    pub shutdown_grace_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            health_port: DEFAULT_HEALTH_PORT,
            shutdown_grace_secs: DEFAULT_SHUTDOWN_GRACE_SECS,
        }
    }
}

impl ServiceConfig {
    /// Load from env; `health_port` overrides HEALTH_PORT if provided.
    pub fn load(health_port: Option<u16>) -> Result<Self> {
        let health_port = match health_port {
            Some(port) => port,
            None => match env::var("HEALTH_PORT") {
                Ok(s) => s
                    .parse()
                    .with_context(|| format!("HEALTH_PORT is not a valid port: {}", s))?,
                Err(_) => DEFAULT_HEALTH_PORT,
            },
        };
        let shutdown_grace_secs = match env::var("SHUTDOWN_GRACE_SECS") {
            Ok(s) => s
                .parse()
                .with_context(|| format!("SHUTDOWN_GRACE_SECS is not a number: {}", s))?,
            Err(_) => DEFAULT_SHUTDOWN_GRACE_SECS,
        };
        Ok(Self {
            health_port,
            shutdown_grace_secs,
        })
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}
