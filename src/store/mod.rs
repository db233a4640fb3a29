// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Provider store: registered providers and their access groups.

pub mod memory;

pub use memory::MemoryProviderStore;

use crate::error::Result;
use crate::types::{AccessGroups, Provider};
use async_trait::async_trait;

#[async_trait]
pub trait ProviderStore: Send + Sync {
    /// All registered providers, in listing order
    async fn list_providers(&self) -> Result<Vec<Provider>>;

    async fn get_provider(&self, name: &str) -> Result<Provider>;

    async fn list_read_groups(&self, name: &str) -> Result<Vec<String>>;

    async fn list_write_groups(&self, name: &str) -> Result<Vec<String>>;

    /// Read and write groups of a provider, failing if either lookup fails
    async fn access_groups(&self, name: &str) -> Result<AccessGroups> {
        Ok(AccessGroups {
            read: self.list_read_groups(name).await?,
            write: self.list_write_groups(name).await?,
        })
    }
}
