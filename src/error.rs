// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KubecredsError {
    #[error("Provider not found: {0}")]
    ProviderNotFound(String),

    #[error("Provider store error: {0}")]
    Store(String),

    #[error("Failed to decode CA data: {0}")]
    CaDecode(#[from] base64::DecodeError),

    #[error("Invalid provider host: {0}")]
    InvalidHost(String),

    #[error("Failed to build kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Listing namespaces for provider {provider} timed out after {seconds}s")]
    DiscoveryTimeout { provider: String, seconds: u64 },
}

impl KubecredsError {
    /// Store errors abort the request; everything else only costs a provider its namespaces.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            KubecredsError::ProviderNotFound(_) | KubecredsError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, KubecredsError>;
