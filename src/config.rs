// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{discovery, server};
use anyhow::{bail, Context, Result};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Service configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server listens on
    pub bind_address: SocketAddr,
    /// YAML file seeding the provider store
    pub providers_file: PathBuf,
    pub discovery_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| server::DEFAULT_BIND_ADDRESS.to_string())
            .parse()
            .context("BIND_ADDRESS is not a valid socket address")?;

        let providers_file = lookup("PROVIDERS_FILE")
            .map(PathBuf::from)
            .context("PROVIDERS_FILE environment variable not set")?;

        let timeout_secs: u64 = match lookup("DISCOVERY_TIMEOUT_SECS") {
            Some(v) => v
                .parse()
                .context("DISCOVERY_TIMEOUT_SECS is not a whole number of seconds")?,
            None => discovery::TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            bail!("DISCOVERY_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            bind_address,
            providers_file,
            discovery_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
