// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Classification of Kubernetes resource kinds into UI categories.
//!
//! Every account currently shares the same table.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum KindCategory {
    Unclassified,
    Configs,
    ServerGroups,
    ServerGroupManagers,
    LoadBalancers,
    SecurityGroups,
    Instances,
}

pub type KindMap = BTreeMap<&'static str, KindCategory>;

const KINDS: &[(&str, KindCategory)] = &[
    ("apiService", KindCategory::Unclassified),
    ("clusterRole", KindCategory::Unclassified),
    ("clusterRoleBinding", KindCategory::Unclassified),
    ("configMap", KindCategory::Configs),
    ("controllerRevision", KindCategory::Unclassified),
    ("cronJob", KindCategory::ServerGroups),
    ("customResourceDefinition", KindCategory::Unclassified),
    ("daemonSet", KindCategory::ServerGroups),
    ("deployment", KindCategory::ServerGroupManagers),
    ("event", KindCategory::Unclassified),
    // lowercase in the consuming system as well
    ("horizontalpodautoscaler", KindCategory::Unclassified),
    ("ingress", KindCategory::LoadBalancers),
    ("job", KindCategory::ServerGroups),
    ("limitRange", KindCategory::Unclassified),
    ("mutatingWebhookConfiguration", KindCategory::Unclassified),
    ("namespace", KindCategory::Unclassified),
    ("networkPolicy", KindCategory::SecurityGroups),
    ("persistentVolume", KindCategory::Configs),
    ("persistentVolumeClaim", KindCategory::Configs),
    ("pod", KindCategory::Instances),
    ("podDisruptionBudget", KindCategory::Unclassified),
    ("podPreset", KindCategory::Unclassified),
    ("podSecurityPolicy", KindCategory::Unclassified),
    ("replicaSet", KindCategory::ServerGroups),
    ("role", KindCategory::Unclassified),
    ("roleBinding", KindCategory::Unclassified),
    ("secret", KindCategory::Configs),
    ("service", KindCategory::LoadBalancers),
    ("serviceAccount", KindCategory::Unclassified),
    ("statefulSet", KindCategory::ServerGroups),
    ("storageClass", KindCategory::Unclassified),
    ("validatingWebhookConfiguration", KindCategory::Unclassified),
];

static KIND_MAP: LazyLock<KindMap> = LazyLock::new(|| KINDS.iter().copied().collect());

/// The process-wide kind classification table
pub fn kind_map() -> &'static KindMap {
    &KIND_MAP
}
