// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::types::kind_map::KindMap;
use serde::Serialize;

/// External representation of a provider, as consumed by the orchestration system
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub account_type: String,
    pub challenge_destructive_actions: bool,
    pub cloud_provider: &'static str,
    pub environment: String,
    pub name: String,
    pub permissions: Permissions,
    pub primary_account: bool,
    pub provider_version: &'static str,
    pub required_group_membership: Vec<String>,
    pub skin: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spinnaker_kind_map: Option<&'static KindMap>,
    #[serde(rename = "type")]
    pub type_: &'static str,
    /// `None` until discovery has run for this request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespaces: Option<Vec<String>>,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Permissions {
    #[serde(rename = "READ")]
    pub read: Vec<String>,
    #[serde(rename = "WRITE")]
    pub write: Vec<String>,
}

impl Credential {
    /// Namespaces attached to this credential, empty when none were discovered
    pub fn namespaces(&self) -> &[String] {
        self.namespaces.as_deref().unwrap_or_default()
    }
}
