//! Connectivity hub: state snapshots and change re-broadcast.
//!
//! Holds the last-known connection, project, and user snapshots, lets
//! in-process code subscribe to changes in each category, and forwards
//! imperative requests (unbind, navigation, dialogs, compliance, URL
//! lookups) to the host seams injected at construction.

use std::sync::{Arc, Mutex, RwLock};

use tracing::{debug, info, warn};

use crate::host::HostBindings;
use crate::tokens::TokenStore;
use crate::types::{
    CloudConfigUrl, ConnectInfo, CoppaCompliance, ListenerId, ProjectInfo, UserInfo,
};

/// Registry name of the hub landing service.
pub const HUB_SERVICE_NAME: &str = "hub";

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Ordered listener list with monotonic ID assignment.
struct ListenerList<T> {
    next_id: u64,
    entries: Vec<(ListenerId, Listener<T>)>,
}

impl<T> ListenerList<T> {
    fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    fn add(&mut self, listener: Listener<T>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    fn remove(&mut self, id: ListenerId) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    /// Clones the callback handles so dispatch can run without holding
    /// the list lock (listeners may subscribe/unsubscribe re-entrantly).
    fn snapshot(&self) -> Vec<Listener<T>> {
        self.entries.iter().map(|(_, l)| l.clone()).collect()
    }
}

/// Editor connectivity hub.
///
/// Explicitly constructed and owned by the application shell; every
/// consumer receives a shared handle instead of reaching for a global.
pub struct ConnectHub {
    connect: RwLock<ConnectInfo>,
    project: RwLock<ProjectInfo>,
    user: RwLock<UserInfo>,
    connect_listeners: Mutex<ListenerList<ConnectInfo>>,
    project_listeners: Mutex<ListenerList<ProjectInfo>>,
    user_listeners: Mutex<ListenerList<UserInfo>>,
    hosts: HostBindings,
    tokens: Option<Arc<TokenStore>>,
}

impl ConnectHub {
    /// Creates a hub with default (empty) snapshots.
    pub fn new(hosts: HostBindings, tokens: Option<Arc<TokenStore>>) -> Self {
        Self {
            connect: RwLock::new(ConnectInfo::default()),
            project: RwLock::new(ProjectInfo::default()),
            user: RwLock::new(UserInfo::default()),
            connect_listeners: Mutex::new(ListenerList::new()),
            project_listeners: Mutex::new(ListenerList::new()),
            user_listeners: Mutex::new(ListenerList::new()),
            hosts,
            tokens,
        }
    }

    // --- snapshot access -------------------------------------------------

    /// Returns the last-known connectivity snapshot.
    pub fn connect_info(&self) -> ConnectInfo {
        self.connect.read().unwrap().clone()
    }

    /// Returns the last-known project snapshot.
    pub fn project_info(&self) -> ProjectInfo {
        self.project.read().unwrap().clone()
    }

    /// Returns the last-known user snapshot.
    pub fn user_info(&self) -> UserInfo {
        self.user.read().unwrap().clone()
    }

    // --- host-driven snapshot replacement --------------------------------

    /// Replaces the connectivity snapshot. The host decides what the new
    /// state is; call [`notify_connect_changed`](Self::notify_connect_changed)
    /// afterwards to fan it out.
    pub fn set_connect_info(&self, info: ConnectInfo) {
        *self.connect.write().unwrap() = info;
    }

    /// Replaces the project snapshot.
    pub fn set_project_info(&self, info: ProjectInfo) {
        *self.project.write().unwrap() = info;
    }

    /// Replaces the user snapshot.
    pub fn set_user_info(&self, info: UserInfo) {
        *self.user.write().unwrap() = info;
    }

    // --- subscriptions ---------------------------------------------------

    /// Registers a connectivity-change listener.
    pub fn on_connect_changed<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&ConnectInfo) + Send + Sync + 'static,
    {
        self.connect_listeners.lock().unwrap().add(Arc::new(listener))
    }

    /// Registers a project-change listener.
    pub fn on_project_changed<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&ProjectInfo) + Send + Sync + 'static,
    {
        self.project_listeners.lock().unwrap().add(Arc::new(listener))
    }

    /// Registers a user-change listener.
    pub fn on_user_changed<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&UserInfo) + Send + Sync + 'static,
    {
        self.user_listeners.lock().unwrap().add(Arc::new(listener))
    }

    /// Removes a connectivity-change listener. Unknown IDs are a no-op.
    pub fn remove_connect_listener(&self, id: ListenerId) {
        self.connect_listeners.lock().unwrap().remove(id);
    }

    /// Removes a project-change listener. Unknown IDs are a no-op.
    pub fn remove_project_listener(&self, id: ListenerId) {
        self.project_listeners.lock().unwrap().remove(id);
    }

    /// Removes a user-change listener. Unknown IDs are a no-op.
    pub fn remove_user_listener(&self, id: ListenerId) {
        self.user_listeners.lock().unwrap().remove(id);
    }

    // --- change notification ---------------------------------------------

    /// Invokes every connectivity listener with the current snapshot.
    pub fn notify_connect_changed(&self) {
        dispatch(&self.connect, &self.connect_listeners);
    }

    /// Invokes every project listener with the current snapshot.
    pub fn notify_project_changed(&self) {
        dispatch(&self.project, &self.project_listeners);
    }

    /// Invokes every user listener with the current snapshot.
    pub fn notify_user_changed(&self) {
        dispatch(&self.user, &self.user_listeners);
    }

    // --- forwarded requests ----------------------------------------------

    /// Releases the bound cloud project, then detaches every registered
    /// service. The project unbind must complete before services are
    /// detached.
    pub fn unbind_project(&self) {
        info!("unbinding cloud project");
        self.hosts.cloud_project.unbind_cloud_project();
        self.hosts.registry.unbind_all_services();
        *self.project.write().unwrap() = ProjectInfo::default();
        self.notify_project_changed();
    }

    /// Navigates the hub service to a page. Fire-and-forget.
    pub fn go_to_hub(&self, page: &str) {
        debug!(page, "navigating to hub");
        self.hosts.registry.show_service(HUB_SERVICE_NAME, page, true);
    }

    /// Shows a blocking OK/Cancel dialog through the host facility and
    /// returns exactly what it reports.
    pub fn display_dialog(
        &self,
        title: &str,
        message: &str,
        ok_label: &str,
        cancel_label: &str,
    ) -> bool {
        self.hosts.dialogs.confirm(title, message, ok_label, cancel_label)
    }

    /// Records a COPPA compliance choice from its wire code. Returns the
    /// host setter's verdict.
    pub fn set_coppa_compliance(&self, code: i32) -> bool {
        let compliance = CoppaCompliance::from_code(code);
        self.hosts.cloud_project.set_coppa_compliance(compliance)
    }

    /// Resolves a configuration endpoint by its legacy integer index.
    ///
    /// The embedded web modules only ever call this with 0-3; 6 and 7
    /// were added for newer modules. Unknown indices resolve to an empty
    /// string.
    pub fn configuration_url_by_index(&self, index: i32) -> String {
        let url = match index {
            0 => CloudConfigUrl::Core,
            1 => CloudConfigUrl::Collab,
            2 => CloudConfigUrl::Webauth,
            3 => CloudConfigUrl::Login,
            6 => CloudConfigUrl::Identity,
            7 => CloudConfigUrl::Portal,
            _ => return String::new(),
        };
        self.hosts.urls.resolve(url)
    }

    /// Resolves the core services endpoint.
    pub fn core_configuration_url(&self) -> String {
        self.hosts.urls.resolve(CloudConfigUrl::Core)
    }

    // --- lifecycle hooks --------------------------------------------------

    /// Marks connectivity suspended for system sleep.
    pub fn computer_goes_to_sleep(&self) {
        info!("suspending cloud connectivity for system sleep");
        self.connect.write().unwrap().online = false;
        self.notify_connect_changed();
    }

    /// Restores connectivity after system wake, unless the user chose to
    /// work offline.
    pub fn computer_did_wake_up(&self) {
        info!("resuming cloud connectivity after system wake");
        {
            let mut connect = self.connect.write().unwrap();
            if !connect.work_offline {
                connect.online = true;
            }
        }
        self.notify_connect_changed();
    }

    /// Toggles offline mode. While enabled the connection is forced
    /// offline regardless of reachability.
    pub fn set_work_offline(&self, enabled: bool) {
        info!(enabled, "work offline");
        {
            let mut connect = self.connect.write().unwrap();
            connect.work_offline = enabled;
            if enabled {
                connect.online = false;
            }
        }
        self.notify_connect_changed();
    }

    /// Drops the persisted access token for the signed-in user and
    /// invalidates the user snapshot, forcing a fresh sign-in.
    pub fn clear_access_token(&self) {
        info!("clearing access token");
        if let Some(store) = &self.tokens {
            let alias = self.user.read().unwrap().user_id.clone();
            if !alias.is_empty()
                && let Err(e) = store.clear(&alias)
            {
                warn!("failed to clear persisted access token: {e}");
            }
        }
        *self.user.write().unwrap() = UserInfo::default();
        self.notify_user_changed();
    }
}

/// Reads the current snapshot, then invokes every registered listener
/// with it. Listeners run outside both locks.
fn dispatch<T: Clone>(value: &RwLock<T>, listeners: &Mutex<ListenerList<T>>) {
    let current = value.read().unwrap().clone();
    let targets = listeners.lock().unwrap().snapshot();
    for listener in targets {
        listener(&current);
    }
}
