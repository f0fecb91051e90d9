// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Destination secret construction and upsert primitives

use std::collections::BTreeMap;

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::{
    api::{ObjectMeta, Patch, PatchParams, PostParams},
    Api, Client,
};
use tracing::instrument;

use crate::constants::secret_keys;
use crate::error::StoreError;
use crate::types::AccessKey;

/// Secret upsert operations consumed by the rotation pass. `patch` must
/// report a missing secret as [`StoreError::NotFound`] so the caller can
/// fall back to `create`.
#[async_trait]
pub trait SecretStore {
    async fn patch(
        &self,
        name: &str,
        namespace: &str,
        data: &BTreeMap<String, ByteString>,
    ) -> Result<(), StoreError>;

    async fn create(
        &self,
        name: &str,
        namespace: &str,
        data: &BTreeMap<String, ByteString>,
    ) -> Result<(), StoreError>;
}

/// Build the secret data fields for a new access key. Values are raw
/// bytes; the API client base64-encodes them on the wire.
pub fn credential_data(key: &AccessKey) -> BTreeMap<String, ByteString> {
    BTreeMap::from([
        (
            secret_keys::ACCESS_KEY_ID.to_string(),
            ByteString(key.id.clone().into_bytes()),
        ),
        (
            secret_keys::ACCESS_KEY_SECRET.to_string(),
            ByteString(key.secret.clone().into_bytes()),
        ),
    ])
}

/// Kubernetes-backed secret store
pub struct KubeSecretStore {
    client: Client,
}

impl KubeSecretStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api(&self, namespace: &str) -> Api<Secret> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

#[async_trait]
impl SecretStore for KubeSecretStore {
    #[instrument(skip(self, data), fields(secret = %format!("{}/{}", namespace, name)))]
    async fn patch(
        &self,
        name: &str,
        namespace: &str,
        data: &BTreeMap<String, ByteString>,
    ) -> Result<(), StoreError> {
        // A merge patch carries only the data fields, so existing metadata
        // on the secret stays untouched
        let patch = Secret {
            data: Some(data.clone()),
            ..Default::default()
        };

        self.api(namespace)
            .patch(name, &PatchParams::default(), &Patch::Merge(&patch))
            .await?;
        Ok(())
    }

    #[instrument(skip(self, data), fields(secret = %format!("{}/{}", namespace, name)))]
    async fn create(
        &self,
        name: &str,
        namespace: &str,
        data: &BTreeMap<String, ByteString>,
    ) -> Result<(), StoreError> {
        let secret = Secret {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(namespace.to_string()),
                ..Default::default()
            },
            data: Some(data.clone()),
            ..Default::default()
        };

        self.api(namespace)
            .create(&PostParams::default(), &secret)
            .await?;
        Ok(())
    }
}
