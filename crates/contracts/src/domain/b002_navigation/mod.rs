//! Which page is showing, for both tap-driven and scroll-driven reading.

pub mod coordinator;
pub mod roles;
pub mod scroll;

pub use coordinator::{NavigationCoordinator, NavigationState, NavigationView};
pub use roles::{initial_transform, role_of, role_transform, PageRole, PageTransform};
