// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace discovery across provider clusters and merging into credentials.

pub mod fanout;
pub mod merge;

pub use fanout::{discover_namespaces, discover_provider};
pub use merge::merge_namespaces;
