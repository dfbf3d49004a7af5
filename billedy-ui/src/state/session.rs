//! Session Context
//!
//! Holds the signed-in user for components that display it. Sign-in itself
//! is handled outside the dashboard.

use leptos::*;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SessionUser {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl SessionUser {
    /// Up to two initials for the avatar fallback
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Clone, Copy)]
pub struct SessionState {
    pub user: RwSignal<Option<SessionUser>>,
}

/// Provide session state to the component tree
pub fn provide_session() {
    provide_context(SessionState {
        user: create_rw_signal(None),
    });
}

pub fn use_session() -> SessionState {
    use_context::<SessionState>().expect("SessionState not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let user = SessionUser {
            name: "ada lovelace byron".to_string(),
            email: None,
            image: None,
        };
        assert_eq!(user.initials(), "AL");
    }

    #[test]
    fn test_initials_empty_name() {
        let user = SessionUser {
            name: "  ".to_string(),
            email: None,
            image: None,
        };
        assert_eq!(user.initials(), "");
    }
}
