//! Configuration and compliance commands.

use tauri::State;

use astra_connect::CoppaCompliance;

use crate::state::EditorState;
use crate::types::EditorInfoDto;

/// Resolves a cloud configuration URL by its legacy index.
#[tauri::command]
pub async fn get_configuration_url_by_index(
    state: State<'_, EditorState>,
    index: i32,
) -> Result<String, String> {
    Ok(state.hub.configuration_url_by_index(index))
}

/// Resolves the core cloud configuration URL.
#[tauri::command]
pub async fn get_core_configuration_url(state: State<'_, EditorState>) -> Result<String, String> {
    Ok(state.hub.core_configuration_url())
}

/// Records the project's COPPA compliance choice.
#[tauri::command]
pub async fn set_coppa_compliance(
    state: State<'_, EditorState>,
    compliance: i32,
) -> Result<bool, String> {
    Ok(state.hub.set_coppa_compliance(compliance))
}

/// Returns the recorded COPPA compliance choice.
#[tauri::command]
pub async fn get_coppa_compliance(
    state: State<'_, EditorState>,
) -> Result<CoppaCompliance, String> {
    Ok(state.cloud_project.compliance())
}

/// Returns editor installation info for the web layer.
#[tauri::command]
pub async fn get_editor_info(state: State<'_, EditorState>) -> Result<EditorInfoDto, String> {
    let config = state.config.lock().await;
    Ok(EditorInfoDto {
        name: config.editor_name.clone(),
        platform: std::env::consts::OS.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
