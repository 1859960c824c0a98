//! Platform-agnostic input event types.
//!
//! Every backend maps its native input to this enum. Widgets never see raw
//! platform input, and only pointer clicks and quit requests drive the app.

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer click at an absolute pixel position (mouse or touch).
    PointerClick { x: i32, y: i32 },
    /// Pointer released.
    PointerRelease { x: i32, y: i32 },
    /// Cursor moved to an absolute pixel position.
    CursorMove { x: i32, y: i32 },
    /// User requested quit (window close, etc.).
    Quit,
}
