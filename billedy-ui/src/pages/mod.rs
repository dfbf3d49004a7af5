//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod not_found;
pub mod section;

pub use dashboard::Dashboard;
pub use not_found::NotFound;
pub use section::SectionPage;
