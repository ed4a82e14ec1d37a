pub mod themed_sidebar;

pub use themed_sidebar::ThemedSidebar;
