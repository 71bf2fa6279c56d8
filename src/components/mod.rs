//! Page chrome for Shoreline.

mod navigation;

pub use navigation::{Navigation, SideNavigation, SIDE_ICONS};
