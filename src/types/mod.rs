// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Provider records, credentials and the kind classification table.

pub mod credential;
pub mod kind_map;
pub mod provider;

pub use credential::{Credential, Permissions};
pub use kind_map::{kind_map, KindCategory, KindMap};
pub use provider::{AccessGroups, DiscoveryResult, Provider};
