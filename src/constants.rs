// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Data keys written into the destination secret
pub mod secret_keys {
    pub const ACCESS_KEY_ID: &str = "ACCESS_KEY_ID";
    pub const ACCESS_KEY_SECRET: &str = "ACCESS_KEY_SECRET";
}

/// IAM allows at most this many access keys per user
pub const MAX_KEYS_PER_USER: usize = 2;

/// Destination defaults when not overridden by the environment
pub const DEFAULT_SECRET_NAME: &str = "aws-credentials";
pub const DEFAULT_NAMESPACE: &str = "default";
