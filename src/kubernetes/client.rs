// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster configuration discovery and client construction

use kube::{config::KubeConfigOptions, Client, Config as KConfig};
use tracing::{debug, info};

use crate::config::{ClusterEndpoint, Config};
use crate::error::{RekeyError, Result};

/// Sources of cluster configuration, tried in order. First success wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSource {
    /// Service-account credentials mounted into a pod
    InCluster,
    /// Explicit host/port/bearer-token from the environment
    BearerEndpoint,
    /// The user-level kubeconfig file
    KubeconfigFile,
}

const DISCOVERY_ORDER: [ConfigSource; 3] = [
    ConfigSource::InCluster,
    ConfigSource::BearerEndpoint,
    ConfigSource::KubeconfigFile,
];

/// Build a client for the cluster holding the destination secret
pub async fn connect(config: &Config) -> Result<Client> {
    let cluster_config = discover_cluster_config(config).await?;

    Client::try_from(cluster_config)
        .map_err(|e| RekeyError::ClusterConfig(format!("failed to create client: {}", e)))
}

/// Walk the discovery sources in order, returning the first usable
/// configuration
async fn discover_cluster_config(config: &Config) -> Result<KConfig> {
    for source in DISCOVERY_ORDER {
        match try_source(source, config).await {
            Ok(cluster_config) => {
                info!(?source, "cluster configuration discovered");
                return Ok(cluster_config);
            }
            Err(reason) => {
                debug!(?source, %reason, "cluster configuration source unavailable");
            }
        }
    }

    Err(RekeyError::ClusterConfig(
        "no usable cluster configuration; log in with 'oc login' (or place a kubeconfig), or set \
         KUBERNETES_SERVICE_HOST, KUBERNETES_SERVICE_PORT and KUBERNETES_TOKEN"
            .to_string(),
    ))
}

async fn try_source(source: ConfigSource, config: &Config) -> std::result::Result<KConfig, String> {
    match source {
        ConfigSource::InCluster => KConfig::incluster().map_err(|e| e.to_string()),
        ConfigSource::BearerEndpoint => match &config.endpoint {
            Some(endpoint) => bearer_endpoint_config(endpoint),
            None => Err("endpoint variables not set".to_string()),
        },
        ConfigSource::KubeconfigFile => KConfig::from_kubeconfig(&KubeConfigOptions::default())
            .await
            .map_err(|e| e.to_string()),
    }
}

/// Build a configuration from an explicit endpoint and bearer token.
/// Certificate verification is off on this path: it exists for development
/// clusters (e.g. CRC) that serve self-signed certificates.
fn bearer_endpoint_config(endpoint: &ClusterEndpoint) -> std::result::Result<KConfig, String> {
    let url = format!("https://{}:{}", endpoint.host, endpoint.port);
    let cluster_url: http::Uri = url
        .parse()
        .map_err(|e| format!("invalid endpoint url {}: {}", url, e))?;

    let mut cluster_config = KConfig::new(cluster_url);
    cluster_config.auth_info.token = Some(endpoint.token.clone().into());
    cluster_config.accept_invalid_certs = true;

    Ok(cluster_config)
}
