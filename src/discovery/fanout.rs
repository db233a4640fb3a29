// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Concurrent namespace discovery, one task per provider.

use crate::error::{KubecredsError, Result};
use crate::kubernetes::ClusterClientFactory;
use crate::store::ProviderStore;
use crate::types::DiscoveryResult;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, instrument, warn, Instrument};

/// Discover namespaces for every named provider concurrently.
///
/// Returns one result per provider whose discovery succeeded; failures are
/// logged and leave no result. Completes once every worker has finished, each
/// bounded by `timeout` on its list call.
pub async fn discover_namespaces(
    store: Arc<dyn ProviderStore>,
    clients: Arc<dyn ClusterClientFactory>,
    provider_names: Vec<String>,
    timeout: Duration,
) -> Vec<DiscoveryResult> {
    if provider_names.is_empty() {
        return Vec::new();
    }

    let (result_tx, mut result_rx) = mpsc::channel(provider_names.len());
    let mut workers = JoinSet::new();

    for name in provider_names {
        let store = store.clone();
        let clients = clients.clone();
        let result_tx = result_tx.clone();
        let span = tracing::info_span!("discover", provider = %name);

        workers.spawn(
            async move {
                match discover_provider(store.as_ref(), clients.as_ref(), &name, timeout).await {
                    Ok(result) => {
                        // capacity equals the batch size, never blocks
                        if result_tx.send(result).await.is_err() {
                            error!("Discovery result channel closed early");
                        }
                    }
                    Err(e) => warn!(provider = %name, error = %e, "Namespace discovery failed"),
                }
            }
            .instrument(span),
        );
    }
    drop(result_tx);

    while let Some(joined) = workers.join_next().await {
        if let Err(e) = joined {
            error!(error = %e, "Namespace discovery worker panicked");
        }
    }

    result_rx.close();
    let mut results = Vec::new();
    while let Some(result) = result_rx.recv().await {
        results.push(result);
    }

    info!("Discovered namespaces for {} providers", results.len());
    results
}

/// Discover the namespaces of a single provider.
///
/// Connection details are fetched again so a provider updated since listing is
/// reached with its current credentials.
#[instrument(skip(store, clients))]
pub async fn discover_provider(
    store: &dyn ProviderStore,
    clients: &dyn ClusterClientFactory,
    name: &str,
    timeout: Duration,
) -> Result<DiscoveryResult> {
    let provider = store.get_provider(name).await?;
    // line-wrapped CA data is accepted
    let ca_data: String = provider.ca_data.split_ascii_whitespace().collect();
    let ca_bundle = STANDARD.decode(ca_data)?;

    let cluster = clients
        .connect(&provider.host, &provider.bearer_token, &ca_bundle)
        .await?;

    let namespaces = tokio::time::timeout(timeout, cluster.list_namespaces(timeout))
        .await
        .map_err(|_| KubecredsError::DiscoveryTimeout {
            provider: name.to_string(),
            seconds: timeout.as_secs(),
        })??;

    debug!("Found {} namespaces", namespaces.len());

    Ok(DiscoveryResult {
        provider_name: name.to_string(),
        namespaces,
    })
}
