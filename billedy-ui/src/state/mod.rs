//! State Management
//!
//! Context-provided state shared by the root layout and pages.

pub mod session;
pub mod theme;
pub mod toast;

pub use session::{provide_session, use_session, SessionState, SessionUser};
pub use theme::{provide_theme, use_theme, Theme, ThemeState};
pub use toast::{provide_toasts, use_toasts, ToastKind, ToastMessage, ToastState};
