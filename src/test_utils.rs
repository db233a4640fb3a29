// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities: a mock Kubernetes API, a scripted cluster factory and provider fixtures.

use crate::error::{KubecredsError, Result};
use crate::kubernetes::{ClusterClientFactory, NamespaceLister};
use crate::store::MemoryProviderStore;
use crate::types::{AccessGroups, Provider};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;
use tower::Service;

/// A mock HTTP service that returns predefined responses based on request paths.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(("GET".to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    /// Query strings of all requests seen for a path
    pub fn queries(&self, path: &str) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(p, _)| p == path)
            .map(|(_, q)| q.clone())
            .collect()
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = std::result::Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();
        let query = req.uri().query().unwrap_or_default().to_string();

        self.requests.lock().unwrap().push((path.clone(), query));
        let response = self.responses.lock().unwrap().get(&(method, path)).cloned();

        Box::pin(async move {
            let (status, body) = response.unwrap_or_else(|| {
                (
                    404,
                    r#"{"kind":"Status","apiVersion":"v1","status":"Failure","message":"not found","reason":"NotFound","code":404}"#
                        .to_string(),
                )
            });
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a mock NamespaceList JSON response
pub fn namespace_list_json(names: &[&str]) -> String {
    let items: Vec<_> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "apiVersion": "v1",
                "kind": "Namespace",
                "metadata": { "name": name, "uid": format!("uid-{}", name) }
            })
        })
        .collect();

    serde_json::json!({
        "apiVersion": "v1",
        "kind": "NamespaceList",
        "metadata": { "resourceVersion": "1" },
        "items": items
    })
    .to_string()
}

/// Host used by the fixture provider `name`
pub fn host_for(name: &str) -> String {
    format!("https://{}.clusters.test", name.to_lowercase())
}

/// A provider with valid base64 CA data, reachable at `host_for(name)`
pub fn provider(name: &str) -> Provider {
    Provider {
        name: name.to_string(),
        host: host_for(name),
        bearer_token: format!("token-{}", name),
        ca_data: STANDARD.encode(format!("ca-{}", name)),
    }
}

/// A store holding fixture providers in the given order, each with one read and write group
pub fn store_with(names: &[&str]) -> MemoryProviderStore {
    store_of(names.iter().map(|n| provider(n)).collect())
}

pub fn store_of(providers: Vec<Provider>) -> MemoryProviderStore {
    MemoryProviderStore::new(
        providers
            .into_iter()
            .map(|p| {
                let groups = AccessGroups {
                    read: vec![format!("{}-readers", p.name)],
                    write: vec![format!("{}-writers", p.name)],
                };
                (p, groups)
            })
            .collect(),
    )
    .unwrap()
}

/// How a scripted cluster answers
#[derive(Clone, Debug)]
pub enum ClusterBehavior {
    Namespaces { names: Vec<String>, latency: Duration },
    ConnectError,
    ListError,
    Panic,
}

/// Cluster factory answering from a script keyed by host, counting calls
#[derive(Clone, Default)]
pub struct FakeClusterFactory {
    clusters: Arc<Mutex<HashMap<String, ClusterBehavior>>>,
    connects: Arc<AtomicUsize>,
    lists: Arc<AtomicUsize>,
    timeouts: Arc<Mutex<Vec<Duration>>>,
    ca_bundles: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl FakeClusterFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namespaces(self, provider: &str, names: &[&str]) -> Self {
        self.with_slow_namespaces(provider, names, Duration::ZERO)
    }

    pub fn with_slow_namespaces(self, provider: &str, names: &[&str], latency: Duration) -> Self {
        self.with(
            provider,
            ClusterBehavior::Namespaces {
                names: names.iter().map(|n| n.to_string()).collect(),
                latency,
            },
        )
    }

    pub fn with(self, provider: &str, behavior: ClusterBehavior) -> Self {
        self.clusters
            .lock()
            .unwrap()
            .insert(host_for(provider), behavior);
        self
    }

    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn list_count(&self) -> usize {
        self.lists.load(Ordering::SeqCst)
    }

    /// Timeouts passed to every list call
    pub fn timeouts(&self) -> Vec<Duration> {
        self.timeouts.lock().unwrap().clone()
    }

    /// Decoded CA bundles passed to every connect call
    pub fn ca_bundles(&self) -> Vec<Vec<u8>> {
        self.ca_bundles.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClusterClientFactory for FakeClusterFactory {
    async fn connect(
        &self,
        host: &str,
        _bearer_token: &str,
        ca_bundle: &[u8],
    ) -> Result<Box<dyn NamespaceLister>> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        self.ca_bundles.lock().unwrap().push(ca_bundle.to_vec());

        let behavior = self.clusters.lock().unwrap().get(host).cloned();
        match behavior {
            Some(ClusterBehavior::ConnectError) | None => Err(KubecredsError::KubeconfigError(
                format!("cannot connect to {}", host),
            )),
            Some(behavior) => Ok(Box::new(FakeCluster {
                behavior,
                lists: self.lists.clone(),
                timeouts: self.timeouts.clone(),
            })),
        }
    }
}

struct FakeCluster {
    behavior: ClusterBehavior,
    lists: Arc<AtomicUsize>,
    timeouts: Arc<Mutex<Vec<Duration>>>,
}

#[async_trait]
impl NamespaceLister for FakeCluster {
    async fn list_namespaces(&self, timeout: Duration) -> Result<Vec<String>> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        self.timeouts.lock().unwrap().push(timeout);

        match &self.behavior {
            ClusterBehavior::Namespaces { names, latency } => {
                tokio::time::sleep(*latency).await;
                Ok(names.clone())
            }
            ClusterBehavior::Panic => panic!("cluster client crashed"),
            _ => Err(KubecredsError::KubeError(kube::Error::Api(
                kube::core::ErrorResponse {
                    status: "Failure".to_string(),
                    message: "namespaces is forbidden".to_string(),
                    reason: "Forbidden".to_string(),
                    code: 403,
                },
            ))),
        }
    }
}
