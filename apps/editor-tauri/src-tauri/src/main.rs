#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    astra_editor_tauri_lib::run();
}
