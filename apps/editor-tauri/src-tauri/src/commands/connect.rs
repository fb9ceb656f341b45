//! Connectivity lifecycle commands.

use tauri::State;
use tracing::info;

use astra_connect::{ConnectInfo, ProjectInfo, UserInfo};

use crate::state::EditorState;

/// Returns the current connectivity snapshot.
#[tauri::command]
pub async fn get_connect_info(state: State<'_, EditorState>) -> Result<ConnectInfo, String> {
    Ok(state.hub.connect_info())
}

/// Returns the current project snapshot.
#[tauri::command]
pub async fn get_project_info(state: State<'_, EditorState>) -> Result<ProjectInfo, String> {
    Ok(state.hub.project_info())
}

/// Returns the current user snapshot.
#[tauri::command]
pub async fn get_user_info(state: State<'_, EditorState>) -> Result<UserInfo, String> {
    Ok(state.hub.user_info())
}

/// Returns the most recently shown (service, page), if any.
#[tauri::command]
pub async fn get_active_service(
    state: State<'_, EditorState>,
) -> Result<Option<(String, String)>, String> {
    Ok(state.services.active())
}

/// Opens the hub service at the given page.
#[tauri::command]
pub async fn go_to_hub(state: State<'_, EditorState>, page: String) -> Result<(), String> {
    state.hub.go_to_hub(&page);
    Ok(())
}

/// Detaches the current project from its cloud binding.
#[tauri::command]
pub async fn unbind_project(state: State<'_, EditorState>) -> Result<(), String> {
    info!("unbind requested from the web layer");
    state.hub.unbind_project();
    Ok(())
}

/// Suspends connectivity, as on system sleep.
#[tauri::command]
pub async fn computer_goes_to_sleep(state: State<'_, EditorState>) -> Result<(), String> {
    state.hub.computer_goes_to_sleep();
    Ok(())
}

/// Restores connectivity, as on system wake.
#[tauri::command]
pub async fn computer_did_wake_up(state: State<'_, EditorState>) -> Result<(), String> {
    state.hub.computer_did_wake_up();
    Ok(())
}

/// Drops the stored access token and invalidates the user snapshot.
#[tauri::command]
pub async fn clear_access_token(state: State<'_, EditorState>) -> Result<(), String> {
    state.hub.clear_access_token();
    Ok(())
}

/// Toggles offline mode.
#[tauri::command]
pub async fn set_work_offline(state: State<'_, EditorState>, offline: bool) -> Result<(), String> {
    state.hub.set_work_offline(offline);
    Ok(())
}
