//! Manual-trigger menu for connectivity lifecycle hooks.
//!
//! These entries exist so developers can exercise sleep/wake and token
//! expiry paths without touching the OS power state or waiting for a
//! token to lapse.

use astra_connect::ConnectHub;

/// Actions triggered from the connect menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ComputerGoesToSleep,
    ComputerDidWakeUp,
    ClearAccessToken,
}

/// A single menu item.
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// Display text.
    pub label: String,
    /// Whether the item is enabled (clickable).
    pub enabled: bool,
    /// Optional action triggered on click.
    pub action: Option<MenuAction>,
}

/// Builds the connect menu items.
pub fn build_menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            label: "Connect".into(),
            enabled: false,
            action: None,
        },
        MenuItem {
            label: "Computer Goes To Sleep".into(),
            enabled: true,
            action: Some(MenuAction::ComputerGoesToSleep),
        },
        MenuItem {
            label: "Computer Did Wake Up".into(),
            enabled: true,
            action: Some(MenuAction::ComputerDidWakeUp),
        },
        MenuItem {
            label: "Clear Access Token".into(),
            enabled: true,
            action: Some(MenuAction::ClearAccessToken),
        },
    ]
}

/// Dispatches a menu action onto the hub.
pub fn handle_action(hub: &ConnectHub, action: MenuAction) {
    match action {
        MenuAction::ComputerGoesToSleep => hub.computer_goes_to_sleep(),
        MenuAction::ComputerDidWakeUp => hub.computer_did_wake_up(),
        MenuAction::ClearAccessToken => hub.clear_access_token(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use astra_connect::{ConnectInfo, HostBindings, UserInfo};

    use super::*;
    use crate::config::Endpoints;
    use crate::services::{
        EditorCloudProject, EditorDialogs, EditorServiceCollection, EndpointResolver,
    };

    fn test_hub() -> ConnectHub {
        let hosts = HostBindings {
            registry: Arc::new(EditorServiceCollection::new()),
            cloud_project: Arc::new(EditorCloudProject::new()),
            dialogs: Arc::new(EditorDialogs::new()),
            urls: Arc::new(EndpointResolver::new(Endpoints::default())),
        };
        ConnectHub::new(hosts, None)
    }

    #[test]
    fn menu_has_all_three_triggers() {
        let actions: Vec<_> = build_menu().into_iter().filter_map(|i| i.action).collect();
        assert_eq!(
            actions,
            vec![
                MenuAction::ComputerGoesToSleep,
                MenuAction::ComputerDidWakeUp,
                MenuAction::ClearAccessToken,
            ]
        );
    }

    #[test]
    fn header_is_disabled() {
        let menu = build_menu();
        assert!(!menu[0].enabled);
        assert!(menu[0].action.is_none());
    }

    #[test]
    fn sleep_action_suspends_connectivity() {
        let hub = test_hub();
        hub.set_connect_info(ConnectInfo {
            online: true,
            logged_in: true,
            work_offline: false,
            ready: true,
            last_error: None,
        });

        handle_action(&hub, MenuAction::ComputerGoesToSleep);
        assert!(!hub.connect_info().online);

        handle_action(&hub, MenuAction::ComputerDidWakeUp);
        assert!(hub.connect_info().online);
    }

    #[test]
    fn clear_token_action_invalidates_user() {
        let hub = test_hub();
        hub.set_user_info(UserInfo {
            valid: true,
            user_id: "usr-1".into(),
            user_name: "dev@astra.test".into(),
            display_name: "Dev".into(),
        });

        handle_action(&hub, MenuAction::ClearAccessToken);
        assert!(!hub.user_info().valid);
    }
}
