// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! One rotation pass: list, clear capacity, create, publish, deactivate.

use std::collections::BTreeMap;

use k8s_openapi::ByteString;
use tracing::{info, instrument};

use crate::constants::MAX_KEYS_PER_USER;
use crate::error::{RekeyError, Result, StoreError};
use crate::iam::CredentialProvider;
use crate::kubernetes::secrets::{credential_data, SecretStore};
use crate::types::{AccessKeyMetadata, KeyStatus};

/// Where a rotation pass reads from and writes to
#[derive(Debug, Clone)]
pub struct RotationTarget {
    /// IAM user whose access keys are rotated
    pub username: String,
    /// Destination secret name
    pub secret_name: String,
    /// Destination namespace
    pub namespace: String,
}

/// Perform one rotation pass against `target`.
///
/// Ordering is the safety mechanism here: inactive keys are deleted before
/// creation so the provider-side key limit cannot reject the new key, and
/// old keys are deactivated only after the new key has been published, so
/// a publish failure leaves the previous credentials usable.
#[instrument(
    skip(provider, store, target),
    fields(
        user = %target.username,
        secret = %format!("{}/{}", target.namespace, target.secret_name)
    )
)]
pub async fn rotate_access_keys<P, S>(
    provider: &P,
    store: &S,
    target: &RotationTarget,
) -> Result<()>
where
    P: CredentialProvider + ?Sized,
    S: SecretStore + ?Sized,
{
    if target.username.trim().is_empty() {
        return Err(RekeyError::Config(
            "IAM user name must not be empty".to_string(),
        ));
    }

    let keys = provider.list_keys(&target.username).await?;
    let (active, inactive): (Vec<AccessKeyMetadata>, Vec<AccessKeyMetadata>) =
        keys.iter().cloned().partition(|k| k.is_active());

    info!(
        active = active.len(),
        inactive = inactive.len(),
        "listed access keys"
    );

    // The provider refuses to create a key past its limit, so inactive
    // keys must go first when the user is at capacity
    if keys.len() >= MAX_KEYS_PER_USER && !inactive.is_empty() {
        for key in &inactive {
            info!(key_id = %key.id, "deleting inactive access key");
            provider.delete_key(&target.username, &key.id).await?;
        }
    }

    let new_key = provider.create_key(&target.username).await?;
    info!(key_id = %new_key.id, "created new access key");

    publish(store, target, &credential_data(&new_key)).await?;

    // Every key that was active before creation gets revoked, including
    // stray extras left behind by an interrupted earlier pass
    for key in &active {
        info!(key_id = %key.id, "deactivating old access key");
        provider
            .set_key_status(&target.username, &key.id, KeyStatus::Inactive)
            .await?;
    }

    info!(key_id = %new_key.id, "rotation complete");
    Ok(())
}

/// Write the credential fields to the destination secret, creating it when
/// it does not exist yet
async fn publish<S>(
    store: &S,
    target: &RotationTarget,
    data: &BTreeMap<String, ByteString>,
) -> Result<()>
where
    S: SecretStore + ?Sized,
{
    match store
        .patch(&target.secret_name, &target.namespace, data)
        .await
    {
        Ok(()) => {
            info!("updated existing secret");
            Ok(())
        }
        Err(StoreError::NotFound) => {
            info!("secret not found, creating it");
            store
                .create(&target.secret_name, &target.namespace, data)
                .await?;
            Ok(())
        }
        Err(err @ StoreError::Api(_)) => Err(err.into()),
    }
}
