// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Folding discovered namespaces back into credentials

use crate::types::{Credential, DiscoveryResult, Provider};
use std::collections::HashMap;
use tracing::warn;

/// Attach discovered namespaces to the credential with the same name, ignoring case.
///
/// Every credential ends up with a namespace list; those without a result get an
/// empty one. The order of `credentials` is unchanged.
pub fn merge_namespaces(credentials: &mut [Credential], results: Vec<DiscoveryResult>) {
    let index: HashMap<String, usize> = credentials
        .iter()
        .enumerate()
        .map(|(i, c)| (Provider::match_key(&c.name), i))
        .collect();

    for credential in credentials.iter_mut() {
        if credential.namespaces.is_none() {
            credential.namespaces = Some(Vec::new());
        }
    }

    for result in results {
        match index.get(&Provider::match_key(&result.provider_name)) {
            Some(&i) => credentials[i].namespaces = Some(result.namespaces),
            None => warn!(
                provider = %result.provider_name,
                "Discovered namespaces for a provider with no credential"
            ),
        }
    }
}
