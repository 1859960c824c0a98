//! pips-app: the dice roller built from the PIPS widgets.
//!
//! [`config::RollerConfig`] holds the window, layout, and option lists;
//! [`roller::Roller`] lays the widgets out and runs the click loop.

pub mod config;
pub mod roller;
