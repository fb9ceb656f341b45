//! DTOs for frontend communication.
//!
//! Snapshot types in `astra-connect` already serialize in the camelCase
//! shape the web layer expects, so only shell-local payloads live here.

use serde::{Deserialize, Serialize};

/// Payload of the `service:show` event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceShowDto {
    pub name: String,
    pub page: String,
    pub focus: bool,
}

/// Editor installation info for the web layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorInfoDto {
    pub name: String,
    pub platform: String,
    pub version: String,
}
