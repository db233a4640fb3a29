// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::KubecredsError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::error;

impl IntoResponse for KubecredsError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        error!(error = %self, "Request failed");

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();

        let body = serde_json::json!({
            "error": status.canonical_reason().unwrap_or_default(),
            "message": self.to_string(),
            "status": status.as_u16(),
            "timestamp": timestamp,
        });

        (status, Json(body)).into_response()
    }
}
