//! Seams to host-owned subsystems.
//!
//! The hub never talks to the editor shell directly; everything with a side
//! effect outside the hub goes through one of these traits, injected at
//! construction.

use std::sync::Arc;

use crate::types::{CloudConfigUrl, CoppaCompliance};

/// Directory of pluggable editor cloud services.
pub trait ServiceRegistry: Send + Sync {
    /// Brings a named service page to the front.
    fn show_service(&self, name: &str, page: &str, focus: bool);

    /// Detaches every registered service from the current project.
    fn unbind_all_services(&self);
}

/// Host-side owner of the cloud project binding.
pub trait CloudProjectHost: Send + Sync {
    /// Releases the cloud project bound to the open local project.
    fn unbind_cloud_project(&self);

    /// Records a COPPA compliance choice. Returns whether the host
    /// accepted the value.
    fn set_coppa_compliance(&self, compliance: CoppaCompliance) -> bool;
}

/// Modal dialog facility.
pub trait DialogPresenter: Send + Sync {
    /// Shows a blocking OK/Cancel dialog. Returns true for OK.
    ///
    /// Blocks the calling thread until the user responds; must not be
    /// called from a context where blocking is unsafe.
    fn confirm(&self, title: &str, message: &str, ok_label: &str, cancel_label: &str) -> bool;
}

/// Resolver for named cloud configuration endpoints.
pub trait ConfigUrlResolver: Send + Sync {
    fn resolve(&self, url: CloudConfigUrl) -> String;
}

/// Bundle of host seams handed to the hub at construction.
#[derive(Clone)]
pub struct HostBindings {
    pub registry: Arc<dyn ServiceRegistry>,
    pub cloud_project: Arc<dyn CloudProjectHost>,
    pub dialogs: Arc<dyn DialogPresenter>,
    pub urls: Arc<dyn ConfigUrlResolver>,
}
