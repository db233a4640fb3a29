// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered cluster account and the material needed to reach it
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub name: String,
    pub host: String,
    pub bearer_token: String,
    /// Base64 encoded CA certificate bundle
    pub ca_data: String,
}

impl Provider {
    /// Case-insensitive key used when matching discovery results to credentials
    pub fn match_key(name: &str) -> String {
        name.to_lowercase()
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("name", &self.name)
            .field("host", &self.host)
            .field("bearer_token", &"<redacted>")
            .field("ca_data", &format_args!("<{} bytes>", self.ca_data.len()))
            .finish()
    }
}

/// Read and write access groups of a provider
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessGroups {
    #[serde(rename = "READ", default)]
    pub read: Vec<String>,
    #[serde(rename = "WRITE", default)]
    pub write: Vec<String>,
}

/// Namespaces discovered for one provider, in the order the cluster returned them
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoveryResult {
    pub provider_name: String,
    pub namespaces: Vec<String>,
}
