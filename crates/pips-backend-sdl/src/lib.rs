//! SDL2 backend for PIPS.
//!
//! Implements `SdiBackend` and `InputBackend` using SDL2. Shapes are drawn
//! with SDL2 renderer calls plus a midpoint-circle rasterizer, and text uses
//! the shared 8x8 bitmap font scaled by whole pixels.

use sdl2::EventPump;
use sdl2::event::{Event, WindowEvent};
use sdl2::rect::{Point as SdlPoint, Rect};
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

use pips_types::backend::{Color, InputBackend, SdiBackend, WEIGHT_BOLD};
use pips_types::bitmap_font;
use pips_types::error::{PipsError, Result};
use pips_types::input::InputEvent;

/// SDL2 rendering and input backend.
pub struct SdlBackend {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    viewport_w: u32,
    viewport_h: u32,
}

impl SdlBackend {
    /// Create a new SDL2 backend with a centered window.
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        let sdl = sdl2::init().map_err(PipsError::Backend)?;
        let video = sdl.video().map_err(PipsError::Backend)?;
        let window = video
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| PipsError::Backend(e.to_string()))?;
        let canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(|e| PipsError::Backend(e.to_string()))?;
        let event_pump = sdl.event_pump().map_err(PipsError::Backend)?;

        log::info!("SDL2 backend initialized: {width}x{height}");

        Ok(Self {
            canvas,
            event_pump,
            viewport_w: width,
            viewport_h: height,
        })
    }

    /// Set the SDL draw color with optional blend mode.
    fn set_color(&mut self, color: Color) {
        if color.a < 255 {
            self.canvas.set_blend_mode(BlendMode::Blend);
        } else {
            self.canvas.set_blend_mode(BlendMode::None);
        }
        self.canvas.set_draw_color(sdl2::pixels::Color::RGBA(
            color.r, color.g, color.b, color.a,
        ));
    }

    /// Paint one string of bitmap glyphs in the current draw color.
    fn blit_glyphs(&mut self, text: &str, x: i32, y: i32, scale: i32) {
        let glyph_w = bitmap_font::GLYPH_WIDTH as i32 * scale;
        let mut cx = x;
        for ch in text.chars() {
            let rows = bitmap_font::glyph(ch);
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..bitmap_font::GLYPH_WIDTH as i32 {
                    if bits & (1 << col) == 0 {
                        continue;
                    }
                    let px = cx + col * scale;
                    let py = y + row as i32 * scale;
                    if scale == 1 {
                        let _ = self.canvas.draw_point(SdlPoint::new(px, py));
                    } else {
                        let _ = self.canvas.fill_rect(Rect::new(
                            px,
                            py,
                            scale as u32,
                            scale as u32,
                        ));
                    }
                }
            }
            cx += glyph_w;
        }
    }
}

impl SdiBackend for SdlBackend {
    fn init(&mut self, width: u32, height: u32) -> Result<()> {
        if (width, height) != (self.viewport_w, self.viewport_h) {
            self.canvas
                .window_mut()
                .set_size(width, height)
                .map_err(|e| PipsError::Backend(e.to_string()))?;
            self.viewport_w = width;
            self.viewport_h = height;
            log::debug!("SDL2 window resized to {width}x{height}");
        }
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.set_color(color);
        self.canvas.clear();
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        self.set_color(color);
        self.canvas
            .fill_rect(Rect::new(x, y, w, h))
            .map_err(PipsError::Backend)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    ) -> Result<()> {
        self.set_color(color);
        let scale = bitmap_font::scale_for(font_size) as i32;
        self.blit_glyphs(text, x, y, scale);
        Ok(())
    }

    fn measure_text(&self, text: &str, font_size: u16) -> u32 {
        text.chars().count() as u32 * bitmap_font::GLYPH_WIDTH * bitmap_font::scale_for(font_size)
    }

    fn swap_buffers(&mut self) -> Result<()> {
        self.canvas.present();
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        self.canvas.window_mut().hide();
        log::info!("SDL2 backend shut down");
        Ok(())
    }

    // -------------------------------------------------------------------
    // Extended: Shape Primitives
    // -------------------------------------------------------------------

    fn stroke_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        stroke_width: u16,
        color: Color,
    ) -> Result<()> {
        self.set_color(color);
        if stroke_width == 1 {
            let _ = self.canvas.draw_rect(Rect::new(x, y, w, h));
        } else {
            let sw = stroke_width as u32;
            let _ = self.canvas.fill_rect(Rect::new(x, y, w, sw));
            let _ = self
                .canvas
                .fill_rect(Rect::new(x, y + h as i32 - sw as i32, w, sw));
            let _ = self
                .canvas
                .fill_rect(Rect::new(x, y + sw as i32, sw, h.saturating_sub(sw * 2)));
            let _ = self.canvas.fill_rect(Rect::new(
                x + w as i32 - sw as i32,
                y + sw as i32,
                sw,
                h.saturating_sub(sw * 2),
            ));
        }
        Ok(())
    }

    fn draw_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        width: u16,
        color: Color,
    ) -> Result<()> {
        self.set_color(color);
        if width <= 1 {
            let _ = self
                .canvas
                .draw_line(SdlPoint::new(x1, y1), SdlPoint::new(x2, y2));
        } else {
            // Parallel lines along the normal for thickness.
            let half = width as i32 / 2;
            let dx = (x2 - x1) as f32;
            let dy = (y2 - y1) as f32;
            let len = (dx * dx + dy * dy).sqrt().max(1.0);
            let nx = (-dy / len).round() as i32;
            let ny = (dx / len).round() as i32;
            for i in -half..=(width as i32 - half - 1) {
                let _ = self.canvas.draw_line(
                    SdlPoint::new(x1 + nx * i, y1 + ny * i),
                    SdlPoint::new(x2 + nx * i, y2 + ny * i),
                );
            }
        }
        Ok(())
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u16, color: Color) -> Result<()> {
        self.set_color(color);
        for (dx, dy) in midpoint_octant(radius as i32) {
            let _ = self.canvas.draw_line(
                SdlPoint::new(cx - dy, cy + dx),
                SdlPoint::new(cx + dy, cy + dx),
            );
            if dx != 0 {
                let _ = self.canvas.draw_line(
                    SdlPoint::new(cx - dy, cy - dx),
                    SdlPoint::new(cx + dy, cy - dx),
                );
            }
            if dx != dy {
                let _ = self.canvas.draw_line(
                    SdlPoint::new(cx - dx, cy + dy),
                    SdlPoint::new(cx + dx, cy + dy),
                );
                let _ = self.canvas.draw_line(
                    SdlPoint::new(cx - dx, cy - dy),
                    SdlPoint::new(cx + dx, cy - dy),
                );
            }
        }
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        cx: i32,
        cy: i32,
        radius: u16,
        stroke_width: u16,
        color: Color,
    ) -> Result<()> {
        self.set_color(color);
        // Concentric rings, outermost first, drawn inward.
        for ring in 0..stroke_width.min(radius.saturating_add(1)) {
            let r = radius as i32 - ring as i32;
            let points: Vec<SdlPoint> = midpoint_octant(r)
                .into_iter()
                .flat_map(|(dx, dy)| {
                    [
                        (dx, dy),
                        (dy, dx),
                        (-dx, dy),
                        (-dy, dx),
                        (dx, -dy),
                        (dy, -dx),
                        (-dx, -dy),
                        (-dy, -dx),
                    ]
                })
                .map(|(ox, oy)| SdlPoint::new(cx + ox, cy + oy))
                .collect();
            let _ = self.canvas.draw_points(points.as_slice());
        }
        Ok(())
    }

    // -------------------------------------------------------------------
    // Extended: Text System
    // -------------------------------------------------------------------

    fn measure_text_height(&self, font_size: u16) -> u32 {
        bitmap_font::GLYPH_HEIGHT * bitmap_font::scale_for(font_size)
    }

    fn draw_text_weighted(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        weight: u16,
        color: Color,
    ) -> Result<()> {
        self.draw_text(text, x, y, font_size, color)?;
        if weight >= WEIGHT_BOLD {
            // Faux bold: a second pass one pixel to the right.
            let scale = bitmap_font::scale_for(font_size) as i32;
            self.blit_glyphs(text, x + 1, y, scale);
        }
        Ok(())
    }
}

impl InputBackend for SdlBackend {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.event_pump.poll_iter().filter_map(map_sdl_event).collect()
    }

    fn wait_events(&mut self) -> Vec<InputEvent> {
        loop {
            let first = self.event_pump.wait_event();
            let mut events: Vec<InputEvent> = map_sdl_event(first).into_iter().collect();
            events.extend(self.poll_events());
            if !events.is_empty() {
                return events;
            }
        }
    }
}

/// Map an SDL2 event to a PIPS input event.
fn map_sdl_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::Window {
            win_event: WindowEvent::Close,
            ..
        } => Some(InputEvent::Quit),
        Event::MouseMotion { x, y, .. } => Some(InputEvent::CursorMove { x, y }),
        Event::MouseButtonDown { x, y, .. } => Some(InputEvent::PointerClick { x, y }),
        Event::MouseButtonUp { x, y, .. } => Some(InputEvent::PointerRelease { x, y }),
        _ => None,
    }
}

/// One octant of a midpoint circle of radius `r`, as `(x, y)` offsets with
/// `x <= y`.
fn midpoint_octant(r: i32) -> Vec<(i32, i32)> {
    let mut points = Vec::new();
    let mut x = 0i32;
    let mut y = r;
    let mut d = 1 - r;
    while x <= y {
        points.push((x, y));
        x += 1;
        if d < 0 {
            d += 2 * x + 1;
        } else {
            y -= 1;
            d += 2 * (x - y) + 1;
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::mouse::{MouseButton, MouseState};

    #[test]
    fn quit_maps_to_quit() {
        assert_eq!(
            map_sdl_event(Event::Quit { timestamp: 0 }),
            Some(InputEvent::Quit)
        );
    }

    #[test]
    fn window_close_maps_to_quit() {
        let e = Event::Window {
            timestamp: 0,
            window_id: 1,
            win_event: WindowEvent::Close,
        };
        assert_eq!(map_sdl_event(e), Some(InputEvent::Quit));
    }

    #[test]
    fn mouse_buttons_map_to_pointer_events() {
        let down = Event::MouseButtonDown {
            timestamp: 0,
            window_id: 1,
            which: 0,
            mouse_btn: MouseButton::Left,
            clicks: 1,
            x: 120,
            y: 45,
        };
        assert_eq!(
            map_sdl_event(down),
            Some(InputEvent::PointerClick { x: 120, y: 45 })
        );
        let up = Event::MouseButtonUp {
            timestamp: 0,
            window_id: 1,
            which: 0,
            mouse_btn: MouseButton::Right,
            clicks: 1,
            x: 3,
            y: 4,
        };
        assert_eq!(
            map_sdl_event(up),
            Some(InputEvent::PointerRelease { x: 3, y: 4 })
        );
    }

    #[test]
    fn motion_maps_to_cursor_move() {
        let e = Event::MouseMotion {
            timestamp: 0,
            window_id: 1,
            which: 0,
            mousestate: MouseState::from_sdl_state(0),
            x: 7,
            y: 9,
            xrel: 1,
            yrel: 1,
        };
        assert_eq!(map_sdl_event(e), Some(InputEvent::CursorMove { x: 7, y: 9 }));
    }

    #[test]
    fn keyboard_is_ignored() {
        let e = Event::KeyDown {
            timestamp: 0,
            window_id: 1,
            keycode: None,
            scancode: None,
            keymod: sdl2::keyboard::Mod::NOMOD,
            repeat: false,
        };
        assert_eq!(map_sdl_event(e), None);
    }

    #[test]
    fn octant_endpoints() {
        let pts = midpoint_octant(5);
        assert_eq!(pts.first(), Some(&(0, 5)));
        assert!(pts.iter().all(|(x, y)| x <= y));
        for (x, y) in pts {
            let d2 = x * x + y * y;
            assert!((16..=36).contains(&d2), "({x}, {y}) off the ring");
        }
    }

    #[test]
    fn zero_radius_is_single_point() {
        assert_eq!(midpoint_octant(0), vec![(0, 0)]);
    }
}
