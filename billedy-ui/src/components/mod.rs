//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod client_only;
pub mod image_upload;
pub mod nav;
pub mod progress;
pub mod shimmer;
pub mod skeleton;
pub mod submit_button;
pub mod toast;

pub use client_only::ClientOnly;
pub use image_upload::ImageUpload;
pub use nav::Nav;
pub use progress::ProgressIndicator;
pub use shimmer::ShimmerText;
pub use skeleton::{Loading, PageSkeleton, SkeletonLayout};
pub use submit_button::SubmitButton;
pub use toast::ToastStack;
