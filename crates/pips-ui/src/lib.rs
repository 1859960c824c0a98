//! pips-ui: widgets for the dice roller built on the PIPS scene graph.
//!
//! Widgets own no drawing state of their own beyond their geometry: every
//! shape lives in the [`SdiRegistry`](pips_sdi::SdiRegistry) handed to each
//! call, and rendering goes through `SdiBackend` trait methods -- no
//! platform-specific code.

pub mod button;
pub mod die_view;
pub mod dropdown;
pub mod theme;
pub mod window;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use button::Button;
pub use die_view::DieView;
pub use dropdown::Dropdown;
pub use theme::Theme;
pub use window::Window;
