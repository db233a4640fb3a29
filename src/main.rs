// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kubecreds::config::Config;
use kubecreds::credentials::CredentialService;
use kubecreds::kubernetes::KubeClientFactory;
use kubecreds::store::MemoryProviderStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting kubecreds");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: providers_file={}, discovery_timeout={:?}",
        config.providers_file.display(),
        config.discovery_timeout
    );

    let store = MemoryProviderStore::from_file(&config.providers_file).await?;

    let service = CredentialService::new(
        Arc::new(store),
        Arc::new(KubeClientFactory),
        config.discovery_timeout,
    );

    kubecreds::api::serve(config.bind_address, service).await
}
