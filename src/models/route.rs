//! Hash-based routing.

use super::StorageTarget;
use crate::config::{LOGIN_HASH, PERMISSION_DENIED_HASH};

/// Application routes.
///
/// URL format:
/// - `#/{kind}/{id}` browses a storage target
/// - `#/{kind}/{id}?readonly` browses it with download-only capabilities
/// - `#/login`, `#/permission-denied` are auth redirect targets
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// No target selected
    Landing,
    /// File browser on a storage target
    Browse {
        target: StorageTarget,
        read_only: bool,
    },
    /// Backend reported an unauthenticated session
    Login,
    /// Backend refused the operation
    PermissionDenied,
}

impl AppRoute {
    /// Parse URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        let hash = hash.trim_start_matches('#');
        let (path, query) = hash.split_once('?').unwrap_or((hash, ""));
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["login"] => Self::Login,
            ["permission-denied"] => Self::PermissionDenied,
            [kind, id] => Self::Browse {
                target: StorageTarget::new(*kind, *id),
                read_only: query.split('&').any(|p| p == "readonly"),
            },
            _ => Self::Landing,
        }
    }

    /// Convert to URL hash (with `#` prefix).
    pub fn to_hash(&self) -> String {
        match self {
            Self::Landing => "#/".to_string(),
            Self::Browse { target, read_only } => {
                let suffix = if *read_only { "?readonly" } else { "" };
                format!("#/{}/{}{}", target.kind, target.id, suffix)
            }
            Self::Login => LOGIN_HASH.to_string(),
            Self::PermissionDenied => PERMISSION_DENIED_HASH.to_string(),
        }
    }

    /// Get current route from the browser URL.
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash())
    }

    /// Navigate to this route (adds a history entry and fires `hashchange`).
    pub fn push(&self) {
        crate::utils::dom::set_hash(&self.to_hash());
    }

    pub fn target(&self) -> Option<&StorageTarget> {
        match self {
            Self::Browse { target, .. } => Some(target),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Landing);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Landing);
        assert_eq!(AppRoute::from_hash("#/login"), AppRoute::Login);
        assert_eq!(
            AppRoute::from_hash("#/permission-denied"),
            AppRoute::PermissionDenied
        );
        assert_eq!(
            AppRoute::from_hash("#/sftp/7"),
            AppRoute::Browse {
                target: StorageTarget::new("sftp", "7"),
                read_only: false,
            }
        );
        assert_eq!(
            AppRoute::from_hash("#/storages/abc?readonly"),
            AppRoute::Browse {
                target: StorageTarget::new("storages", "abc"),
                read_only: true,
            }
        );
        assert_eq!(AppRoute::from_hash("#/a/b/c"), AppRoute::Landing);
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::Landing.to_hash(), "#/");
        assert_eq!(AppRoute::Login.to_hash(), "#/login");
        assert_eq!(AppRoute::PermissionDenied.to_hash(), "#/permission-denied");

        let route = AppRoute::Browse {
            target: StorageTarget::new("storages", "abc"),
            read_only: true,
        };
        assert_eq!(route.to_hash(), "#/storages/abc?readonly");
        assert_eq!(AppRoute::from_hash(&route.to_hash()), route);
        assert_eq!(route.target().map(|t| t.id.as_str()), Some("abc"));
    }
}
