mod commands;
mod config;
mod events;
mod menu;
mod services;
mod state;
mod types;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use astra_connect::{ConnectHub, HostBindings, TokenStore, HUB_SERVICE_NAME};

use config::EditorConfig;
use services::{EditorCloudProject, EditorDialogs, EditorServiceCollection, EndpointResolver};
use state::EditorState;

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,astra_connect=debug")),
        )
        .init();

    let cfg = EditorConfig::load().unwrap_or_default();

    let services = Arc::new(EditorServiceCollection::new());
    services.register(HUB_SERVICE_NAME);
    services.register("collab");

    let cloud_project = Arc::new(EditorCloudProject::new());
    let dialogs = Arc::new(EditorDialogs::new());
    let urls = Arc::new(EndpointResolver::new(cfg.endpoints.clone()));

    let token_store = config::token_store_path()
        .and_then(|path| {
            TokenStore::new(path)
                .map_err(|e| tracing::warn!("failed to load token store: {e}"))
                .ok()
        })
        .map(Arc::new);

    let hub = Arc::new(ConnectHub::new(
        HostBindings {
            registry: services.clone(),
            cloud_project: cloud_project.clone(),
            dialogs: dialogs.clone(),
            urls,
        },
        token_store,
    ));

    let editor_state = EditorState {
        hub: hub.clone(),
        services: services.clone(),
        cloud_project: cloud_project.clone(),
        config: Arc::new(tokio::sync::Mutex::new(cfg)),
    };

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .plugin(tauri_plugin_dialog::init())
        .manage(editor_state)
        .setup(move |app| {
            let handle = app.handle().clone();
            services.attach(handle.clone());
            dialogs.attach(handle.clone());
            events::register_forwarders(&handle, &hub);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Connectivity
            commands::connect::get_connect_info,
            commands::connect::get_project_info,
            commands::connect::get_user_info,
            commands::connect::get_active_service,
            commands::connect::go_to_hub,
            commands::connect::unbind_project,
            commands::connect::computer_goes_to_sleep,
            commands::connect::computer_did_wake_up,
            commands::connect::clear_access_token,
            commands::connect::set_work_offline,
            // Settings
            commands::settings::get_configuration_url_by_index,
            commands::settings::get_core_configuration_url,
            commands::settings::set_coppa_compliance,
            commands::settings::get_coppa_compliance,
            commands::settings::get_editor_info,
            // Dialogs
            commands::dialogs::display_dialog,
        ])
        .build(tauri::generate_context!())
        .expect("error building tauri application");

    app.run(move |_handle, event| {
        if let tauri::RunEvent::Exit = event {
            tracing::info!("shutting down editor connect shell");
        }
    });
}
