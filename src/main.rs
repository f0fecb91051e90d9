// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rekey::config::Config;
use rekey::iam::IamCredentials;
use rekey::kubernetes::{self, KubeSecretStore};
use rekey::rotation::{rotate_access_keys, RotationTarget};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run().await {
        error!("key rotation failed: {:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;
    info!(
        user = %config.username,
        secret = %config.secret_name,
        namespace = %config.namespace,
        "starting access key rotation"
    );

    // Cluster access is resolved before any IAM call is made
    let kube_client = kubernetes::connect(&config).await?;
    info!("connected to Kubernetes cluster");

    let provider = IamCredentials::connect().await;
    let store = KubeSecretStore::new(kube_client);

    let target = RotationTarget {
        username: config.username,
        secret_name: config.secret_name,
        namespace: config.namespace,
    };

    rotate_access_keys(&provider, &store, &target).await?;

    info!("key rotation completed successfully");
    Ok(())
}
