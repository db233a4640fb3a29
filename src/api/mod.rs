// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! HTTP API: the credentials endpoints and a health probe.

mod error;

use crate::constants::EXPAND_TRUE;
use crate::credentials::CredentialService;
use crate::error::Result;
use crate::types::Credential;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Whether the first `expand` parameter is exactly "true"; repeats are ignored
fn expand_requested(params: &[(String, String)]) -> bool {
    params
        .iter()
        .find(|(key, _)| key == "expand")
        .is_some_and(|(_, value)| value == EXPAND_TRUE)
}

pub fn router(service: CredentialService) -> Router {
    Router::new()
        .route("/credentials", get(list_credentials))
        .route("/credentials/:account", get(get_credential))
        .route("/health", get(|| async { Json(serde_json::json!({ "status": "ok" })) }))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn list_credentials(
    State(service): State<CredentialService>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Credential>>> {
    Ok(Json(service.list_credentials(expand_requested(&params)).await?))
}

async fn get_credential(
    State(service): State<CredentialService>,
    Path(account): Path<String>,
) -> Result<Json<Credential>> {
    Ok(Json(service.get_credential(&account).await?))
}

/// Serve the router on `addr` until Ctrl-C
pub async fn serve(addr: SocketAddr, service: CredentialService) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(service))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutting down");
        })
        .await?;

    Ok(())
}
