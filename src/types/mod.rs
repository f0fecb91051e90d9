// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod access_key;

pub use access_key::{AccessKey, AccessKeyMetadata, KeyStatus};
