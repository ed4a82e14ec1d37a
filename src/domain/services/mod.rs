// Business logic services
// Framework-agnostic, 100% testable

pub mod navigation;

pub use navigation::{build_nav_plan, NavLink, NavPlan, NavState};
