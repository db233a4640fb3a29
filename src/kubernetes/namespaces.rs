// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace listing against a provider cluster

use crate::error::Result;
use crate::kubernetes::client::NamespaceLister;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Namespace;
use kube::core::{ObjectList, Request};
use kube::{api::ListParams, Client, ResourceExt};
use std::time::Duration;
use tracing::{debug, instrument};

const NAMESPACES_PATH: &str = "/api/v1/namespaces";

pub struct KubeNamespaceLister {
    client: Client,
}

impl KubeNamespaceLister {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NamespaceLister for KubeNamespaceLister {
    #[instrument(skip(self))]
    async fn list_namespaces(&self, timeout: Duration) -> Result<Vec<String>> {
        let request = list_request(timeout)?;

        let list: ObjectList<Namespace> = self.client.request(request).await?;
        debug!("Listed {} namespaces", list.items.len());

        Ok(list.items.iter().map(|ns| ns.name_any()).collect())
    }
}

/// Namespace list request carrying `timeoutSeconds`.
///
/// `ListParams` only sends the timeout on watches, so it is appended here.
fn list_request(timeout: Duration) -> Result<http::Request<Vec<u8>>> {
    let mut request = Request::new(NAMESPACES_PATH)
        .list(&ListParams::default())
        .map_err(kube::Error::BuildRequest)?;

    let mut uri = request.uri().to_string();
    if !uri.ends_with('?') {
        uri.push(if uri.contains('?') { '&' } else { '?' });
    }
    uri.push_str(&format!("timeoutSeconds={}", timeout.as_secs().max(1)));

    *request.uri_mut() = uri
        .parse()
        .map_err(|e: http::uri::InvalidUri| kube::Error::HttpError(e.into()))?;
    Ok(request)
}
