// Public API exports
pub mod domain;
pub mod shared;

// Dioxus component layer
pub mod app;

pub use app::{SidebarNav, ThemedSidebar};
pub use domain::models::PageDescriptor;
pub use shared::theme::{create_sidebar_theme, ThemeConfig};
