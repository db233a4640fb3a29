// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation from provider connection material

use crate::error::{KubecredsError, Result};
use crate::kubernetes::namespaces::KubeNamespaceLister;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Client;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

const KUBECONFIG_ENTRY: &str = "provider";

/// A connection to one cluster that can list its namespaces
#[async_trait]
pub trait NamespaceLister: Send + Sync {
    /// Names of all namespaces, in the order the API returned them
    async fn list_namespaces(&self, timeout: Duration) -> Result<Vec<String>>;
}

/// Produces cluster connections from decoded provider credentials
#[async_trait]
pub trait ClusterClientFactory: Send + Sync {
    async fn connect(
        &self,
        host: &str,
        bearer_token: &str,
        ca_bundle: &[u8],
    ) -> Result<Box<dyn NamespaceLister>>;
}

/// Factory backed by kube-rs clients
#[derive(Debug, Clone, Copy, Default)]
pub struct KubeClientFactory;

#[async_trait]
impl ClusterClientFactory for KubeClientFactory {
    #[instrument(skip(self, bearer_token, ca_bundle))]
    async fn connect(
        &self,
        host: &str,
        bearer_token: &str,
        ca_bundle: &[u8],
    ) -> Result<Box<dyn NamespaceLister>> {
        let client = create_client(host, bearer_token, ca_bundle).await?;
        Ok(Box::new(KubeNamespaceLister::new(client)))
    }
}

/// Create a Kubernetes client for a provider cluster
pub async fn create_client(host: &str, bearer_token: &str, ca_bundle: &[u8]) -> Result<Client> {
    let kubeconfig = build_kubeconfig(host, bearer_token, ca_bundle)?;

    let client_config =
        kube::Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
            .await
            .map_err(|e| {
                KubecredsError::KubeconfigError(format!("Failed to create config: {}", e))
            })?;

    debug!("Creating client for {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| KubecredsError::KubeconfigError(format!("Failed to create client: {}", e)))
}

/// Build a single-context kubeconfig pointing at `host` with token auth
fn build_kubeconfig(host: &str, bearer_token: &str, ca_bundle: &[u8]) -> Result<Kubeconfig> {
    let url = Url::parse(host).map_err(|e| KubecredsError::InvalidHost(format!("{}: {}", host, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(KubecredsError::InvalidHost(format!(
            "{}: unsupported scheme {}",
            host,
            url.scheme()
        )));
    }

    let mut cluster = serde_json::json!({ "server": host });
    if !ca_bundle.is_empty() {
        // kubeconfig carries CA data base64 encoded
        cluster["certificate-authority-data"] = STANDARD.encode(ca_bundle).into();
    }

    let kubeconfig = serde_json::json!({
        "apiVersion": "v1",
        "kind": "Config",
        "clusters": [{ "name": KUBECONFIG_ENTRY, "cluster": cluster }],
        "users": [{ "name": KUBECONFIG_ENTRY, "user": { "token": bearer_token } }],
        "contexts": [{
            "name": KUBECONFIG_ENTRY,
            "context": { "cluster": KUBECONFIG_ENTRY, "user": KUBECONFIG_ENTRY }
        }],
        "current-context": KUBECONFIG_ENTRY,
    });

    serde_json::from_value(kubeconfig)
        .map_err(|e| KubecredsError::KubeconfigError(format!("Failed to build kubeconfig: {}", e)))
}
