// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster access and secret persistence

pub mod client;
pub mod secrets;

pub use client::connect;
pub use secrets::{KubeSecretStore, SecretStore};
