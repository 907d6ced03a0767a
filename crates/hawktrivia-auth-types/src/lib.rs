//! Credential types shared across Hawktrivia services.
//!
//! Provides the `PlayerIdentity` and `AdminCredential` header extractors.

pub mod admin;
pub mod identity;
