pub mod components;
pub mod layouts;

pub use components::SidebarNav;
pub use layouts::ThemedSidebar;
