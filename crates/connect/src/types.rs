//! Public types for the connectivity hub.

use serde::{Deserialize, Serialize};

/// Snapshot of cloud service connectivity.
///
/// Replaced wholesale by the host whenever connectivity changes; the hub
/// never mutates individual fields on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectInfo {
    /// Cloud services are reachable.
    pub online: bool,
    /// A user session is active.
    pub logged_in: bool,
    /// The user asked to work without cloud connectivity.
    pub work_offline: bool,
    /// The connectivity layer finished initializing.
    pub ready: bool,
    /// Last connectivity error reported by the host, if any.
    pub last_error: Option<String>,
}

/// Snapshot of the currently bound cloud project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    /// The snapshot describes a real project (false after unbind).
    pub valid: bool,
    /// A cloud project is bound to the open local project.
    pub project_bound: bool,
    pub project_guid: String,
    pub project_name: String,
    pub organization_id: String,
}

/// Snapshot of the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// The snapshot describes a signed-in user.
    pub valid: bool,
    pub user_id: String,
    pub user_name: String,
    pub display_name: String,
}

/// COPPA compliance choice for the bound project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoppaCompliance {
    /// No choice has been made yet.
    Undefined,
    Compliant,
    NotCompliant,
}

impl CoppaCompliance {
    /// Maps the wire code used by the embedded web modules.
    /// Out-of-range codes collapse to `Undefined`.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Compliant,
            2 => Self::NotCompliant,
            _ => Self::Undefined,
        }
    }
}

/// Named cloud configuration endpoints the host can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloudConfigUrl {
    Core,
    Collab,
    Webauth,
    Login,
    Identity,
    Portal,
}

/// Handle returned by listener registration; pass back to remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_defaults_are_empty() {
        let connect = ConnectInfo::default();
        assert!(!connect.online);
        assert!(!connect.logged_in);
        assert!(connect.last_error.is_none());

        let project = ProjectInfo::default();
        assert!(!project.valid);
        assert!(project.project_guid.is_empty());

        let user = UserInfo::default();
        assert!(!user.valid);
        assert!(user.user_id.is_empty());
    }

    #[test]
    fn coppa_from_code() {
        assert_eq!(CoppaCompliance::from_code(0), CoppaCompliance::Undefined);
        assert_eq!(CoppaCompliance::from_code(1), CoppaCompliance::Compliant);
        assert_eq!(CoppaCompliance::from_code(2), CoppaCompliance::NotCompliant);
        assert_eq!(CoppaCompliance::from_code(-1), CoppaCompliance::Undefined);
        assert_eq!(CoppaCompliance::from_code(42), CoppaCompliance::Undefined);
    }

    #[test]
    fn connect_info_serializes_camel_case() {
        let info = ConnectInfo {
            online: true,
            logged_in: true,
            work_offline: false,
            ready: true,
            last_error: None,
        };
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"loggedIn\":true"));
        assert!(json.contains("\"workOffline\":false"));
    }
}
