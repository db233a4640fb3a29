// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Building credential responses for all providers or a single one.

use crate::discovery::{discover_namespaces, merge_namespaces};
use crate::error::Result;
use crate::kubernetes::ClusterClientFactory;
use crate::projector::project;
use crate::store::ProviderStore;
use crate::types::Credential;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Shared collaborators for building credentials
#[derive(Clone)]
pub struct CredentialService {
    store: Arc<dyn ProviderStore>,
    clients: Arc<dyn ClusterClientFactory>,
    discovery_timeout: Duration,
}

impl CredentialService {
    pub fn new(
        store: Arc<dyn ProviderStore>,
        clients: Arc<dyn ClusterClientFactory>,
        discovery_timeout: Duration,
    ) -> Self {
        Self {
            store,
            clients,
            discovery_timeout,
        }
    }

    /// Credentials for all providers, in listing order.
    ///
    /// Any store failure fails the whole call. With `expand`, the kind map is
    /// attached and namespaces are discovered; discovery failures only leave
    /// that provider's namespaces empty.
    #[instrument(skip(self))]
    pub async fn list_credentials(&self, expand: bool) -> Result<Vec<Credential>> {
        let providers = self.store.list_providers().await?;

        let mut credentials = Vec::with_capacity(providers.len());
        for provider in &providers {
            let groups = self.store.access_groups(&provider.name).await?;
            credentials.push(project(provider, groups, expand));
        }

        if !expand {
            debug!("Returning {} credentials without discovery", credentials.len());
            return Ok(credentials);
        }

        let names = providers.into_iter().map(|p| p.name).collect();
        let results = discover_namespaces(
            self.store.clone(),
            self.clients.clone(),
            names,
            self.discovery_timeout,
        )
        .await;

        merge_namespaces(&mut credentials, results);
        info!("Returning {} expanded credentials", credentials.len());
        Ok(credentials)
    }

    /// Credential for one provider, always with the kind map and never with namespaces
    #[instrument(skip(self))]
    pub async fn get_credential(&self, account: &str) -> Result<Credential> {
        let provider = self.store.get_provider(account).await?;
        let groups = self.store.access_groups(&provider.name).await?;
        Ok(project(&provider, groups, true))
    }
}
