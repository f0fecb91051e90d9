// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RekeyError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IAM error: {0}")]
    Provider(String),

    #[error("secret store error: {0}")]
    Store(#[from] StoreError),

    #[error("cluster configuration discovery failed: {0}")]
    ClusterConfig(String),
}

/// Secret store failures, with a missing secret split out from other API
/// errors so callers can branch on it without inspecting error internals.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("secret not found")]
    NotFound,

    #[error("Kubernetes API error: {0}")]
    Api(#[source] kube::Error),
}

impl From<kube::Error> for StoreError {
    fn from(err: kube::Error) -> Self {
        match err {
            kube::Error::Api(ref resp) if resp.code == 404 => StoreError::NotFound,
            other => StoreError::Api(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, RekeyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use kube::core::ErrorResponse;

    fn api_error(code: u16) -> kube::Error {
        kube::Error::Api(ErrorResponse {
            status: "Failure".to_string(),
            message: "test".to_string(),
            reason: "Test".to_string(),
            code,
        })
    }

    #[test]
    fn test_404_maps_to_not_found() {
        assert!(matches!(StoreError::from(api_error(404)), StoreError::NotFound));
    }

    #[test]
    fn test_other_codes_map_to_api() {
        assert!(matches!(StoreError::from(api_error(403)), StoreError::Api(_)));
        assert!(matches!(StoreError::from(api_error(500)), StoreError::Api(_)));
    }
}
