// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Projection of provider records into credentials

use crate::constants::credential;
use crate::types::{kind_map, AccessGroups, Credential, Permissions, Provider};

/// Build the credential for a provider. The kind map is attached only when `expand` is set.
pub fn project(provider: &Provider, groups: AccessGroups, expand: bool) -> Credential {
    Credential {
        account_type: provider.name.clone(),
        challenge_destructive_actions: false,
        cloud_provider: credential::CLOUD_PROVIDER,
        environment: provider.name.clone(),
        name: provider.name.clone(),
        permissions: Permissions {
            read: groups.read,
            write: groups.write,
        },
        primary_account: false,
        provider_version: credential::PROVIDER_VERSION,
        required_group_membership: Vec::new(),
        skin: credential::SKIN,
        spinnaker_kind_map: expand.then(kind_map),
        type_: credential::TYPE,
        namespaces: None,
    }
}
