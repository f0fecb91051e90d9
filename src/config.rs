// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Result};
use std::env;
use std::fmt;

use crate::constants::{DEFAULT_NAMESPACE, DEFAULT_SECRET_NAME};

/// Rotation settings loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// IAM user whose access keys are rotated
    pub username: String,
    /// Name of the destination secret
    pub secret_name: String,
    /// Namespace of the destination secret
    pub namespace: String,
    /// Explicit API endpoint for clusters reachable neither through
    /// in-cluster config nor a kubeconfig file
    pub endpoint: Option<ClusterEndpoint>,
}

/// Host, port and bearer token for direct cluster access
#[derive(Clone)]
pub struct ClusterEndpoint {
    pub host: String,
    pub port: String,
    pub token: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let username = match env::var("TARGET_USERNAME") {
            Ok(v) if !v.trim().is_empty() => v,
            _ => bail!("TARGET_USERNAME environment variable is required"),
        };

        let secret_name =
            env::var("SECRET_NAME").unwrap_or_else(|_| DEFAULT_SECRET_NAME.to_string());
        let namespace = env::var("NAMESPACE").unwrap_or_else(|_| DEFAULT_NAMESPACE.to_string());

        let endpoint = ClusterEndpoint::from_parts(
            env::var("KUBERNETES_SERVICE_HOST").ok(),
            env::var("KUBERNETES_SERVICE_PORT").ok(),
            env::var("KUBERNETES_TOKEN").ok(),
        );

        Ok(Config {
            username,
            secret_name,
            namespace,
            endpoint,
        })
    }
}

impl ClusterEndpoint {
    /// The endpoint is only usable when all three variables are present
    fn from_parts(
        host: Option<String>,
        port: Option<String>,
        token: Option<String>,
    ) -> Option<Self> {
        match (host, port, token) {
            (Some(host), Some(port), Some(token)) => Some(ClusterEndpoint { host, port, token }),
            _ => None,
        }
    }
}

// Keeps the bearer token out of log output
impl fmt::Debug for ClusterEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusterEndpoint")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_requires_all_three_parts() {
        assert!(ClusterEndpoint::from_parts(
            Some("10.0.0.1".to_string()),
            Some("6443".to_string()),
            None,
        )
        .is_none());

        assert!(ClusterEndpoint::from_parts(None, None, None).is_none());

        let endpoint = ClusterEndpoint::from_parts(
            Some("10.0.0.1".to_string()),
            Some("6443".to_string()),
            Some("sha256~abc".to_string()),
        )
        .unwrap();
        assert_eq!(endpoint.host, "10.0.0.1");
        assert_eq!(endpoint.port, "6443");
    }

    #[test]
    fn test_endpoint_debug_redacts_token() {
        let endpoint = ClusterEndpoint {
            host: "10.0.0.1".to_string(),
            port: "6443".to_string(),
            token: "sha256~abc".to_string(),
        };

        let printed = format!("{:?}", endpoint);
        assert!(!printed.contains("sha256~abc"));
    }
}
