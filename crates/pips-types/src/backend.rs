//! Backend trait definitions.
//!
//! Every platform implements these traits. The scene graph and widgets
//! dispatch all drawing and input through trait boundaries -- they never call
//! platform-specific APIs.
//!
//! Coordinates here are pixels with the origin at the top-left corner. The
//! logical frame widgets use is mapped onto pixels by
//! [`CoordMap`](crate::geometry::CoordMap) before anything reaches a backend.

pub use crate::color::Color;
use crate::error::Result;
use crate::input::InputEvent;

/// Width of one glyph of the built-in bitmap font at scale 1.
pub const BITMAP_GLYPH_WIDTH: u32 = 8;

/// Height of one glyph of the built-in bitmap font at scale 1.
pub const BITMAP_GLYPH_HEIGHT: u32 = 8;

/// Font weight used for [`SdiBackend::draw_text_weighted`].
pub const WEIGHT_NORMAL: u16 = 400;
/// Bold font weight.
pub const WEIGHT_BOLD: u16 = 700;

/// Rendering backend trait.
///
/// # Core Methods (required)
///
/// `init`, `clear`, `fill_rect`, `draw_text`, `measure_text`,
/// `swap_buffers`, and `shutdown`.
///
/// # Extended Primitives (optional, with defaults)
///
/// Backends may override the shape methods for native rendering. Default
/// implementations approximate using `fill_rect`.
pub trait SdiBackend {
    /// Initialize the rendering subsystem.
    fn init(&mut self, width: u32, height: u32) -> Result<()>;

    /// Clear the screen to a solid color.
    fn clear(&mut self, color: Color) -> Result<()>;

    /// Draw a filled rectangle.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()>;

    /// Draw text with its top-left corner at the given position.
    /// `font_size` is a hint in pixels; backends may approximate.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: u16, color: Color)
    -> Result<()>;

    /// Measure the width of a text string at the given font size.
    fn measure_text(&self, text: &str, font_size: u16) -> u32;

    /// Present the current frame to the display.
    fn swap_buffers(&mut self) -> Result<()>;

    /// Shut down the rendering subsystem and release resources.
    fn shutdown(&mut self) -> Result<()>;

    // -----------------------------------------------------------------------
    // Extended: Shape Primitives
    // -----------------------------------------------------------------------

    /// Draw the outline of a rectangle.
    ///
    /// `stroke_width` is drawn inward from the given bounds.
    fn stroke_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        stroke_width: u16,
        color: Color,
    ) -> Result<()> {
        let sw = stroke_width as u32;
        self.fill_rect(x, y, w, sw, color)?;
        self.fill_rect(x, y + h as i32 - sw as i32, w, sw, color)?;
        self.fill_rect(x, y + sw as i32, sw, h.saturating_sub(sw * 2), color)?;
        self.fill_rect(
            x + w as i32 - sw as i32,
            y + sw as i32,
            sw,
            h.saturating_sub(sw * 2),
            color,
        )?;
        Ok(())
    }

    /// Draw a line between two points.
    ///
    /// Diagonal lines have no default rendering; backends must override for
    /// diagonal support.
    fn draw_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        width: u16,
        color: Color,
    ) -> Result<()> {
        if y1 == y2 {
            let lx = x1.min(x2);
            let w = (x1 - x2).unsigned_abs();
            self.fill_rect(lx, y1, w.max(1), width as u32, color)?;
        } else if x1 == x2 {
            let ly = y1.min(y2);
            let h = (y1 - y2).unsigned_abs();
            self.fill_rect(x1, ly, width as u32, h.max(1), color)?;
        }
        Ok(())
    }

    /// Draw a filled circle.
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u16, color: Color) -> Result<()> {
        let r = radius as i32;
        self.fill_rect(cx - r, cy - r, radius as u32 * 2, radius as u32 * 2, color)
    }

    /// Draw the outline of a circle.
    fn stroke_circle(
        &mut self,
        cx: i32,
        cy: i32,
        radius: u16,
        stroke_width: u16,
        color: Color,
    ) -> Result<()> {
        let r = radius as i32;
        self.stroke_rect(
            cx - r,
            cy - r,
            radius as u32 * 2,
            radius as u32 * 2,
            stroke_width,
            color,
        )
    }

    // -----------------------------------------------------------------------
    // Extended: Text System
    // -----------------------------------------------------------------------

    /// Measure the height of text at the given font size.
    fn measure_text_height(&self, font_size: u16) -> u32 {
        (font_size as f32 * 1.2) as u32
    }

    /// Draw text with a font weight hint.
    ///
    /// `weight`: 100 (thin) to 900 (black), 400 = normal, 700 = bold.
    /// Backends with only a single bitmap font ignore the weight.
    fn draw_text_weighted(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        weight: u16,
        color: Color,
    ) -> Result<()> {
        let _ = weight;
        self.draw_text(text, x, y, font_size, color)
    }
}

/// Input backend trait.
///
/// Maps platform-specific input to the platform-agnostic `InputEvent` enum.
pub trait InputBackend {
    /// Poll for pending input events without blocking.
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Block until at least one event is available, then return everything
    /// pending.
    ///
    /// The default spins on `poll_events`; backends with a native blocking
    /// wait should override it.
    fn wait_events(&mut self) -> Vec<InputEvent> {
        loop {
            let events = self.poll_events();
            if !events.is_empty() {
                return events;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
    }
}
