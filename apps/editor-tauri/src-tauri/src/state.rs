//! Shared application state managed by Tauri.

use std::sync::Arc;

use tokio::sync::Mutex;

use astra_connect::ConnectHub;

use crate::config::EditorConfig;
use crate::services::{EditorCloudProject, EditorServiceCollection};

/// State handed to every command via `tauri::State`.
pub struct EditorState {
    /// Connectivity hub shared with the host seams.
    pub hub: Arc<ConnectHub>,
    /// Service page directory, also registered as the hub's registry seam.
    pub services: Arc<EditorServiceCollection>,
    /// Cloud project binding owner.
    pub cloud_project: Arc<EditorCloudProject>,
    /// Editor shell configuration.
    pub config: Arc<Mutex<EditorConfig>>,
}
