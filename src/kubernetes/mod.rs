// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation and namespace listing for provider clusters.

pub mod client;
pub mod namespaces;

pub use client::{ClusterClientFactory, KubeClientFactory, NamespaceLister};
pub use namespaces::KubeNamespaceLister;
