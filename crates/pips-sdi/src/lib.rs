//! pips-sdi: the retained scene graph behind every widget.
//!
//! Widgets never draw directly. They create named [`SdiObject`]s in an
//! [`SdiRegistry`], mutate their style, toggle visibility, and destroy them
//! when done. The registry replays every visible object through an
//! [`SdiBackend`](pips_types::backend::SdiBackend) once per frame, mapping
//! logical coordinates to pixels on the way.

pub mod object;
pub mod registry;

pub use object::{SdiObject, Shape, TextStyle};
pub use registry::SdiRegistry;
