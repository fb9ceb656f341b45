//! Editor-side implementations of the hub's host seams.

use std::collections::HashMap;
use std::sync::Mutex;

use tauri::{AppHandle, Emitter};
use tracing::{debug, info, warn};

use astra_connect::{
    CloudConfigUrl, CloudProjectHost, ConfigUrlResolver, CoppaCompliance, DialogPresenter,
    ServiceRegistry,
};

use crate::config::Endpoints;
use crate::types::ServiceShowDto;

/// Directory of the editor's cloud service pages.
///
/// Created before the Tauri app exists; [`attach`](Self::attach) hands it
/// the handle once the webview is up. Until then, show requests update
/// local state but emit nothing.
pub struct EditorServiceCollection {
    handle: Mutex<Option<AppHandle>>,
    /// Service name -> bound to the current project.
    services: Mutex<HashMap<String, bool>>,
    /// Most recently shown (service, page).
    active: Mutex<Option<(String, String)>>,
}

impl EditorServiceCollection {
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
            services: Mutex::new(HashMap::new()),
            active: Mutex::new(None),
        }
    }

    /// Registers a service name. Newly registered services start bound.
    pub fn register(&self, name: &str) {
        self.services.lock().unwrap().insert(name.to_string(), true);
    }

    /// Attaches the Tauri handle once the webview exists.
    pub fn attach(&self, handle: AppHandle) {
        *self.handle.lock().unwrap() = Some(handle);
    }

    /// Returns the most recently shown (service, page).
    pub fn active(&self) -> Option<(String, String)> {
        self.active.lock().unwrap().clone()
    }

    /// Returns whether a registered service is bound to the project.
    pub fn is_bound(&self, name: &str) -> bool {
        self.services.lock().unwrap().get(name).copied().unwrap_or(false)
    }

    fn emit<T: serde::Serialize + Clone>(&self, event: &str, payload: &T) {
        if let Some(handle) = self.handle.lock().unwrap().as_ref() {
            let _ = handle.emit(event, payload);
        } else {
            debug!(event, "no webview attached, dropping service event");
        }
    }
}

impl ServiceRegistry for EditorServiceCollection {
    fn show_service(&self, name: &str, page: &str, focus: bool) {
        debug!(service = name, page, focus, "showing service page");
        *self.active.lock().unwrap() = Some((name.to_string(), page.to_string()));
        self.emit(
            "service:show",
            &ServiceShowDto {
                name: name.to_string(),
                page: page.to_string(),
                focus,
            },
        );
    }

    fn unbind_all_services(&self) {
        info!("detaching all services from the current project");
        for bound in self.services.lock().unwrap().values_mut() {
            *bound = false;
        }
        self.emit("service:unbind-all", &());
    }
}

/// Editor-side owner of the cloud project binding and its COPPA flag.
pub struct EditorCloudProject {
    compliance: Mutex<CoppaCompliance>,
}

impl EditorCloudProject {
    pub fn new() -> Self {
        Self {
            compliance: Mutex::new(CoppaCompliance::Undefined),
        }
    }

    /// Returns the recorded COPPA compliance choice.
    pub fn compliance(&self) -> CoppaCompliance {
        *self.compliance.lock().unwrap()
    }
}

impl CloudProjectHost for EditorCloudProject {
    fn unbind_cloud_project(&self) {
        info!("releasing cloud project binding");
        *self.compliance.lock().unwrap() = CoppaCompliance::Undefined;
    }

    fn set_coppa_compliance(&self, compliance: CoppaCompliance) -> bool {
        // "Undefined" is the absence of a choice, not a choice.
        if compliance == CoppaCompliance::Undefined {
            warn!("rejecting COPPA compliance reset to undefined");
            return false;
        }
        *self.compliance.lock().unwrap() = compliance;
        info!(?compliance, "COPPA compliance recorded");
        true
    }
}

/// Modal dialogs over the Tauri dialog plugin.
pub struct EditorDialogs {
    handle: Mutex<Option<AppHandle>>,
}

impl EditorDialogs {
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
        }
    }

    /// Attaches the Tauri handle once the webview exists.
    pub fn attach(&self, handle: AppHandle) {
        *self.handle.lock().unwrap() = Some(handle);
    }
}

impl DialogPresenter for EditorDialogs {
    fn confirm(&self, title: &str, message: &str, ok_label: &str, cancel_label: &str) -> bool {
        use tauri_plugin_dialog::{DialogExt, MessageDialogButtons};

        let handle = self.handle.lock().unwrap().clone();
        let Some(handle) = handle else {
            // No webview yet; nothing to confirm against.
            warn!(title, "dialog requested before webview attach, answering cancel");
            return false;
        };

        handle
            .dialog()
            .message(message)
            .title(title)
            .buttons(MessageDialogButtons::OkCancelCustom(
                ok_label.to_string(),
                cancel_label.to_string(),
            ))
            .blocking_show()
    }
}

/// Resolves named configuration endpoints from the editor config.
pub struct EndpointResolver {
    endpoints: Endpoints,
}

impl EndpointResolver {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }
}

impl ConfigUrlResolver for EndpointResolver {
    fn resolve(&self, url: CloudConfigUrl) -> String {
        match url {
            CloudConfigUrl::Core => self.endpoints.core.clone(),
            CloudConfigUrl::Collab => self.endpoints.collab.clone(),
            CloudConfigUrl::Webauth => self.endpoints.webauth.clone(),
            CloudConfigUrl::Login => self.endpoints.login.clone(),
            CloudConfigUrl::Identity => self.endpoints.identity.clone(),
            CloudConfigUrl::Portal => self.endpoints.portal.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_service_tracks_active_page_without_webview() {
        let services = EditorServiceCollection::new();
        services.register("hub");
        services.show_service("hub", "projects", true);
        assert_eq!(services.active(), Some(("hub".into(), "projects".into())));
    }

    #[test]
    fn unbind_all_clears_bound_flags() {
        let services = EditorServiceCollection::new();
        services.register("hub");
        services.register("collab");
        assert!(services.is_bound("hub"));
        assert!(services.is_bound("collab"));

        services.unbind_all_services();
        assert!(!services.is_bound("hub"));
        assert!(!services.is_bound("collab"));
    }

    #[test]
    fn unknown_service_is_not_bound() {
        let services = EditorServiceCollection::new();
        assert!(!services.is_bound("never-registered"));
    }

    #[test]
    fn coppa_choice_is_recorded() {
        let project = EditorCloudProject::new();
        assert_eq!(project.compliance(), CoppaCompliance::Undefined);

        assert!(project.set_coppa_compliance(CoppaCompliance::Compliant));
        assert_eq!(project.compliance(), CoppaCompliance::Compliant);

        assert!(project.set_coppa_compliance(CoppaCompliance::NotCompliant));
        assert_eq!(project.compliance(), CoppaCompliance::NotCompliant);
    }

    #[test]
    fn coppa_undefined_is_rejected() {
        let project = EditorCloudProject::new();
        project.set_coppa_compliance(CoppaCompliance::Compliant);
        assert!(!project.set_coppa_compliance(CoppaCompliance::Undefined));
        // The previous choice survives the rejected reset.
        assert_eq!(project.compliance(), CoppaCompliance::Compliant);
    }

    #[test]
    fn unbind_resets_compliance() {
        let project = EditorCloudProject::new();
        project.set_coppa_compliance(CoppaCompliance::Compliant);
        project.unbind_cloud_project();
        assert_eq!(project.compliance(), CoppaCompliance::Undefined);
    }

    #[test]
    fn dialogs_without_webview_answer_cancel() {
        let dialogs = EditorDialogs::new();
        assert!(!dialogs.confirm("Unbind", "Sure?", "Yes", "No"));
    }

    #[test]
    fn resolver_maps_every_endpoint() {
        let resolver = EndpointResolver::new(Endpoints::default());
        assert_eq!(
            resolver.resolve(CloudConfigUrl::Core),
            "https://core.cloud.astra-engine.dev"
        );
        assert_eq!(
            resolver.resolve(CloudConfigUrl::Webauth),
            "https://webauth.cloud.astra-engine.dev"
        );
        assert_eq!(
            resolver.resolve(CloudConfigUrl::Identity),
            "https://id.cloud.astra-engine.dev"
        );
    }
}
