// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! IAM access key management

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_iam::error::DisplayErrorContext;
use aws_sdk_iam::types::StatusType;
use aws_sdk_iam::Client;
use tracing::instrument;

use crate::error::{RekeyError, Result};
use crate::types::{AccessKey, AccessKeyMetadata, KeyStatus};

/// Access key operations consumed by the rotation pass. Backed by IAM in
/// production, by in-memory fakes in tests.
#[async_trait]
pub trait CredentialProvider {
    /// List every access key belonging to the user
    async fn list_keys(&self, username: &str) -> Result<Vec<AccessKeyMetadata>>;

    /// Create a new access key for the user
    async fn create_key(&self, username: &str) -> Result<AccessKey>;

    /// Delete an access key by id
    async fn delete_key(&self, username: &str, key_id: &str) -> Result<()>;

    /// Activate or deactivate an access key
    async fn set_key_status(&self, username: &str, key_id: &str, status: KeyStatus) -> Result<()>;
}

/// IAM-backed credential provider
pub struct IamCredentials {
    client: Client,
}

impl IamCredentials {
    /// Connect using the default AWS credential and region chain
    pub async fn connect() -> Self {
        let shared_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
        Self {
            client: Client::new(&shared_config),
        }
    }
}

fn provider_error<E: std::error::Error>(err: E) -> RekeyError {
    RekeyError::Provider(DisplayErrorContext(err).to_string())
}

#[async_trait]
impl CredentialProvider for IamCredentials {
    #[instrument(skip(self))]
    async fn list_keys(&self, username: &str) -> Result<Vec<AccessKeyMetadata>> {
        // A user holds at most two keys, so a single page always suffices
        let output = self
            .client
            .list_access_keys()
            .user_name(username)
            .send()
            .await
            .map_err(provider_error)?;

        Ok(output
            .access_key_metadata()
            .iter()
            .filter_map(|meta| {
                let id = meta.access_key_id()?.to_string();
                let status = match meta.status() {
                    Some(StatusType::Active) => KeyStatus::Active,
                    _ => KeyStatus::Inactive,
                };
                Some(AccessKeyMetadata { id, status })
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn create_key(&self, username: &str) -> Result<AccessKey> {
        let output = self
            .client
            .create_access_key()
            .user_name(username)
            .send()
            .await
            .map_err(provider_error)?;

        let key = output.access_key().ok_or_else(|| {
            RekeyError::Provider("IAM returned no access key on creation".to_string())
        })?;

        Ok(AccessKey {
            id: key.access_key_id().to_string(),
            secret: key.secret_access_key().to_string(),
        })
    }

    async fn delete_key(&self, username: &str, key_id: &str) -> Result<()> {
        self.client
            .delete_access_key()
            .user_name(username)
            .access_key_id(key_id)
            .send()
            .await
            .map_err(provider_error)?;
        Ok(())
    }

    async fn set_key_status(&self, username: &str, key_id: &str, status: KeyStatus) -> Result<()> {
        let status = match status {
            KeyStatus::Active => StatusType::Active,
            KeyStatus::Inactive => StatusType::Inactive,
        };

        self.client
            .update_access_key()
            .user_name(username)
            .access_key_id(key_id)
            .status(status)
            .send()
            .await
            .map_err(provider_error)?;
        Ok(())
    }
}
