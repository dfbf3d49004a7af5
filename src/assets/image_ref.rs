//! Image References
//!
//! The value handed back to callers after an upload, plus the helpers that
//! map between folders, URLs and storage identifiers.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Namespace every uploaded asset lives under
pub const NAMESPACE: &str = "billedy";

/// Folder used when the caller does not name one
pub const DEFAULT_FOLDER: &str = "entities";

/// A stored image: the secure URL plus the identifier needed to destroy it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// HTTPS URL of the transformed image
    pub url: String,
    /// Storage identifier (e.g. `billedy/accounts/abc123`)
    pub public_id: String,
}

impl ImageRef {
    pub fn new(url: impl Into<String>, public_id: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            public_id: public_id.into(),
        }
    }

    /// Build a reference from a URL alone, deriving the identifier.
    ///
    /// Returns `None` when the URL is outside the namespace.
    pub fn from_url(url: &str) -> Option<Self> {
        public_id_from_url(url).map(|id| Self::new(url, id))
    }
}

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    /// The asset existed and was destroyed
    Deleted,
    /// The vendor had nothing under that identifier
    NotFound,
    /// No identifier could be derived, so nothing was sent
    Skipped,
}

impl DeleteOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeleteOutcome::Deleted => "deleted",
            DeleteOutcome::NotFound => "not_found",
            DeleteOutcome::Skipped => "skipped",
        }
    }
}

impl std::fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full folder path for an upload: `billedy/<folder>`
pub fn folder_path(folder: Option<&str>) -> String {
    let folder = folder
        .map(|f| f.trim_matches('/'))
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_FOLDER);
    format!("{}/{}", NAMESPACE, folder)
}

/// Whether a caller-supplied folder name is acceptable.
///
/// Segments are `[A-Za-z0-9_-]+` joined by `/`.
pub fn is_valid_folder(folder: &str) -> bool {
    !folder.is_empty()
        && folder.split('/').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        })
}

/// Whether `public_id` names an asset under the `billedy/` namespace.
///
/// Any characters `public_id_from_url` can produce are accepted; only empty
/// segments, `..` segments and query or fragment markers are rejected.
pub fn is_valid_public_id(public_id: &str) -> bool {
    let Some(path) = public_id
        .strip_prefix(NAMESPACE)
        .and_then(|rest| rest.strip_prefix('/'))
    else {
        return false;
    };

    !path.is_empty()
        && !path.contains(['?', '#'])
        && path
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "..")
}

fn namespace_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"billedy/[^?#]+").expect("Invalid namespace pattern"))
}

/// Derive the storage identifier from an asset URL.
///
/// Takes everything from the `billedy/` segment onward and strips the file
/// extension of the last path segment.
pub fn public_id_from_url(url: &str) -> Option<String> {
    let matched = namespace_pattern().find(url)?.as_str();

    let last_slash = matched.rfind('/').unwrap_or(0);
    let stem = match matched[last_slash..].rfind('.') {
        Some(dot) => &matched[..last_slash + dot],
        None => matched,
    };

    let stem = stem.trim_end_matches('/');
    if stem.len() <= NAMESPACE.len() + 1 {
        return None;
    }
    Some(stem.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_path_defaults_to_entities() {
        assert_eq!(folder_path(None), "billedy/entities");
        assert_eq!(folder_path(Some("")), "billedy/entities");
        assert_eq!(folder_path(Some("accounts")), "billedy/accounts");
        assert_eq!(folder_path(Some("/budgets/")), "billedy/budgets");
    }

    #[test]
    fn test_public_id_strips_extension() {
        let url = "https://res.cloudinary.com/demo/image/upload/v1712/billedy/accounts/abc123.png";
        assert_eq!(
            public_id_from_url(url).as_deref(),
            Some("billedy/accounts/abc123")
        );
    }

    #[test]
    fn test_public_id_bare_substring() {
        assert_eq!(
            public_id_from_url("billedy/accounts/abc123.png").as_deref(),
            Some("billedy/accounts/abc123")
        );
    }

    #[test]
    fn test_public_id_ignores_query_string() {
        let url = "https://res.cloudinary.com/demo/image/upload/billedy/entities/x1.webp?_a=1";
        assert_eq!(public_id_from_url(url).as_deref(), Some("billedy/entities/x1"));
    }

    #[test]
    fn test_public_id_without_extension() {
        let url = "https://res.cloudinary.com/demo/image/upload/billedy/entities/x1";
        assert_eq!(public_id_from_url(url).as_deref(), Some("billedy/entities/x1"));
    }

    #[test]
    fn test_public_id_keeps_dots_in_folders() {
        let url = "https://cdn.example.com/billedy/v1.2/logo.jpg";
        assert_eq!(public_id_from_url(url).as_deref(), Some("billedy/v1.2/logo"));
    }

    #[test]
    fn test_public_id_outside_namespace() {
        assert_eq!(
            public_id_from_url("https://res.cloudinary.com/demo/image/upload/other/abc.png"),
            None
        );
        assert_eq!(public_id_from_url(""), None);
    }

    #[test]
    fn test_image_ref_from_url() {
        let image = ImageRef::from_url("https://x.test/billedy/savings/fund.png").unwrap();
        assert_eq!(image.public_id, "billedy/savings/fund");
        assert!(ImageRef::from_url("https://x.test/avatar.png").is_none());
    }

    #[test]
    fn test_valid_folder() {
        assert!(is_valid_folder("accounts"));
        assert!(is_valid_folder("savings/funds_2024"));
        assert!(!is_valid_folder(""));
        assert!(!is_valid_folder("../etc"));
        assert!(!is_valid_folder("a//b"));
        assert!(!is_valid_folder("with space"));
    }

    #[test]
    fn test_is_valid_public_id() {
        assert!(is_valid_public_id("billedy/accounts/abc123"));
        assert!(is_valid_public_id("billedy/v1.2/logo"));
        assert!(!is_valid_public_id("billedy/"));
        assert!(!is_valid_public_id("billedy"));
        assert!(!is_valid_public_id("billedyx/logo"));
        assert!(!is_valid_public_id("other/accounts/abc123"));
        assert!(!is_valid_public_id("billedy/../secrets"));
        assert!(!is_valid_public_id("billedy/a//b"));
        assert!(!is_valid_public_id("billedy/logo?x=1"));
        assert!(!is_valid_public_id("billedy/logo#top"));
    }

    #[test]
    fn test_derived_ids_are_valid() {
        for url in [
            "https://cdn.example.com/billedy/v1.2/logo.jpg",
            "https://res.cloudinary.com/demo/image/upload/v17/billedy/accounts/abc123.png?x=1",
        ] {
            let derived = public_id_from_url(url).unwrap();
            assert!(is_valid_public_id(&derived), "{} should be valid", derived);
        }
    }

    #[test]
    fn test_delete_outcome_serializes_snake_case() {
        let json = serde_json::to_string(&DeleteOutcome::NotFound).unwrap();
        assert_eq!(json, "\"not_found\"");
    }
}
