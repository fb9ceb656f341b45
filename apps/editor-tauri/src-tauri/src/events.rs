//! Re-broadcast of hub state changes to the web layer.

use std::sync::Arc;

use tauri::{AppHandle, Emitter};
use tracing::debug;

use astra_connect::ConnectHub;

/// Event fired when the connectivity snapshot changes.
pub const EVENT_CONNECT_CHANGED: &str = "connect:state-changed";
/// Event fired when the project snapshot changes.
pub const EVENT_PROJECT_CHANGED: &str = "connect:project-changed";
/// Event fired when the user snapshot changes.
pub const EVENT_USER_CHANGED: &str = "connect:user-changed";

/// Registers one hub listener per category that forwards the snapshot to
/// the frontend as a Tauri event.
pub fn register_forwarders(handle: &AppHandle, hub: &Arc<ConnectHub>) {
    let connect_handle = handle.clone();
    hub.on_connect_changed(move |info| {
        let _ = connect_handle.emit(EVENT_CONNECT_CHANGED, info);
    });

    let project_handle = handle.clone();
    hub.on_project_changed(move |info| {
        let _ = project_handle.emit(EVENT_PROJECT_CHANGED, info);
    });

    let user_handle = handle.clone();
    hub.on_user_changed(move |info| {
        let _ = user_handle.emit(EVENT_USER_CHANGED, info);
    });

    debug!("frontend state forwarders registered");
}
