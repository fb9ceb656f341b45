//! Editor cloud connectivity hub.
//!
//! Tracks connection, project, and user state snapshots, re-broadcasts
//! change notifications to in-process listeners, and forwards imperative
//! requests to host-owned subsystems through injected seams.

pub mod host;
pub mod hub;
pub mod tokens;
pub mod types;

pub use host::{
    CloudProjectHost, ConfigUrlResolver, DialogPresenter, HostBindings, ServiceRegistry,
};
pub use hub::{ConnectHub, HUB_SERVICE_NAME};
pub use tokens::{TokenError, TokenStore};
pub use types::{CloudConfigUrl, ConnectInfo, CoppaCompliance, ListenerId, ProjectInfo, UserInfo};
