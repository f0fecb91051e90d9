// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::fmt;

/// Status of an access key at the identity provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStatus {
    Active,
    Inactive,
}

/// Listing entry for an access key. The provider only hands out secret
/// material at creation time, so listings carry id and status alone.
#[derive(Debug, Clone)]
pub struct AccessKeyMetadata {
    pub id: String,
    pub status: KeyStatus,
}

impl AccessKeyMetadata {
    pub fn is_active(&self) -> bool {
        self.status == KeyStatus::Active
    }
}

/// A freshly created access key, including its secret
#[derive(Clone)]
pub struct AccessKey {
    pub id: String,
    pub secret: String,
}

// Keeps the secret out of log output and error chains
impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessKey")
            .field("id", &self.id)
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let key = AccessKey {
            id: "AKIAEXAMPLE".to_string(),
            secret: "wJalrXUtnFEMI".to_string(),
        };

        let printed = format!("{:?}", key);
        assert!(printed.contains("AKIAEXAMPLE"));
        assert!(!printed.contains("wJalrXUtnFEMI"));
    }

    #[test]
    fn test_is_active() {
        let key = AccessKeyMetadata {
            id: "AKIA1".to_string(),
            status: KeyStatus::Active,
        };
        assert!(key.is_active());

        let key = AccessKeyMetadata {
            id: "AKIA2".to_string(),
            status: KeyStatus::Inactive,
        };
        assert!(!key.is_active());
    }
}
