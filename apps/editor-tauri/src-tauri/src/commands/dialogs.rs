//! Dialog commands.

use tauri::State;

use crate::state::EditorState;

/// Shows a blocking confirmation dialog and returns the user's choice.
#[tauri::command]
pub async fn display_dialog(
    state: State<'_, EditorState>,
    title: String,
    message: String,
    ok_label: String,
    cancel_label: String,
) -> Result<bool, String> {
    Ok(state
        .hub
        .display_dialog(&title, &message, &ok_label, &cancel_label))
}
