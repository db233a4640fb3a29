// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Fixed fields of every projected credential
pub mod credential {
    pub const CLOUD_PROVIDER: &str = "kubernetes";
    pub const PROVIDER_VERSION: &str = "v2";
    pub const SKIN: &str = "v2";
    pub const TYPE: &str = "kubernetes";
}

/// Namespace discovery configuration
pub mod discovery {
    /// Deadline in seconds for a single namespace listing call
    pub const TIMEOUT_SECS: u64 = 5;
}

/// HTTP server defaults
pub mod server {
    pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:7002";
}

/// Query value that switches on expansion
pub const EXPAND_TRUE: &str = "true";
