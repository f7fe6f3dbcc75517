//! This crate contains all shared UI for the workspace.

mod navbar;
pub use navbar::Navbar;

mod layout;
pub use layout::Layout;

mod auth;
pub use auth::*;

mod components;
pub use components::*;
