// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! In-memory provider store, seeded from a YAML file

use crate::error::{KubecredsError, Result};
use crate::store::ProviderStore;
use crate::types::{AccessGroups, Provider};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument};

/// One entry of the providers file
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ProviderRecord {
    #[serde(flatten)]
    provider: Provider,
    #[serde(default)]
    permissions: AccessGroups,
}

#[derive(Debug, Default)]
pub struct MemoryProviderStore {
    entries: Vec<(Provider, AccessGroups)>,
}

impl MemoryProviderStore {
    /// Build a store from providers in listing order.
    /// Names must be unique ignoring case.
    pub fn new(entries: Vec<(Provider, AccessGroups)>) -> Result<Self> {
        let mut seen = HashSet::new();
        for (provider, _) in &entries {
            if !seen.insert(Provider::match_key(&provider.name)) {
                return Err(KubecredsError::Store(format!(
                    "duplicate provider name {}",
                    provider.name
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let records: Vec<ProviderRecord> = serde_yaml::from_str(yaml)
            .map_err(|e| KubecredsError::Store(format!("Failed to parse providers: {}", e)))?;

        Self::new(
            records
                .into_iter()
                .map(|r| (r.provider, r.permissions))
                .collect(),
        )
    }

    pub async fn from_file(path: &Path) -> Result<Self> {
        let yaml = tokio::fs::read_to_string(path).await.map_err(|e| {
            KubecredsError::Store(format!(
                "Failed to read providers file {}: {}",
                path.display(),
                e
            ))
        })?;

        let store = Self::from_yaml(&yaml)?;
        info!(
            "Loaded {} providers from {}",
            store.entries.len(),
            path.display()
        );
        Ok(store)
    }

    fn entry(&self, name: &str) -> Result<&(Provider, AccessGroups)> {
        self.entries
            .iter()
            .find(|(p, _)| p.name == name)
            .ok_or_else(|| KubecredsError::ProviderNotFound(name.to_string()))
    }
}

#[async_trait]
impl ProviderStore for MemoryProviderStore {
    async fn list_providers(&self) -> Result<Vec<Provider>> {
        Ok(self.entries.iter().map(|(p, _)| p.clone()).collect())
    }

    #[instrument(skip(self))]
    async fn get_provider(&self, name: &str) -> Result<Provider> {
        let (provider, _) = self.entry(name)?;
        debug!("Found provider");
        Ok(provider.clone())
    }

    async fn list_read_groups(&self, name: &str) -> Result<Vec<String>> {
        Ok(self.entry(name)?.1.read.clone())
    }

    async fn list_write_groups(&self, name: &str) -> Result<Vec<String>> {
        Ok(self.entry(name)?.1.write.clone())
    }
}
