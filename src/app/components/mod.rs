pub mod sidebar_nav;

pub use sidebar_nav::SidebarNav;
