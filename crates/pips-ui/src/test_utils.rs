//! Shared test utilities for pips-ui widget tests.
//!
//! Provides a [`MockBackend`] that records all draw calls for assertion and
//! replays a scripted list of input events.

use std::collections::VecDeque;

use pips_sdi::SdiRegistry;
use pips_types::backend::{BITMAP_GLYPH_WIDTH, Color, InputBackend, SdiBackend};
use pips_types::error::Result;
use pips_types::geometry::CoordMap;
use pips_types::input::InputEvent;

/// A recorded draw call from the mock backend.
#[derive(Debug, Clone)]
pub enum DrawCall {
    FillRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
    },
    StrokeRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        stroke_width: u16,
        color: Color,
    },
    FillCircle {
        cx: i32,
        cy: i32,
        radius: u16,
        color: Color,
    },
    DrawText {
        text: String,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    },
}

/// A mock backend that records draw calls and serves scripted input.
#[derive(Debug, Default)]
pub struct MockBackend {
    pub calls: Vec<DrawCall>,
    pub events: VecDeque<InputEvent>,
    pub clears: Vec<Color>,
    pub init_size: Option<(u32, u32)>,
    pub swaps: usize,
    pub shut_down: bool,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that will hand out `events` one per wait, in order.
    pub fn with_events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Count of `FillRect` calls.
    pub fn fill_rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillRect { .. }))
            .count()
    }

    /// Count of `StrokeRect` calls.
    pub fn stroke_rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::StrokeRect { .. }))
            .count()
    }

    /// Count of `DrawText` calls.
    pub fn draw_text_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::DrawText { .. }))
            .count()
    }

    /// Fill colors of every circle drawn, in draw order.
    pub fn circle_colors(&self) -> Vec<Color> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::FillCircle { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }

    /// Check if any `DrawText` call contains the given substring.
    pub fn has_text(&self, needle: &str) -> bool {
        self.calls.iter().any(|c| {
            if let DrawCall::DrawText { text, .. } = c {
                text.contains(needle)
            } else {
                false
            }
        })
    }
}

impl SdiBackend for MockBackend {
    fn init(&mut self, width: u32, height: u32) -> Result<()> {
        self.init_size = Some((width, height));
        Ok(())
    }

    fn clear(&mut self, color: Color) -> Result<()> {
        self.clears.push(color);
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) -> Result<()> {
        self.calls.push(DrawCall::FillRect { x, y, w, h, color });
        Ok(())
    }

    fn stroke_rect(
        &mut self,
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        stroke_width: u16,
        color: Color,
    ) -> Result<()> {
        self.calls.push(DrawCall::StrokeRect {
            x,
            y,
            w,
            h,
            stroke_width,
            color,
        });
        Ok(())
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: u16, color: Color) -> Result<()> {
        self.calls.push(DrawCall::FillCircle {
            cx,
            cy,
            radius,
            color,
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        font_size: u16,
        color: Color,
    ) -> Result<()> {
        self.calls.push(DrawCall::DrawText {
            text: text.to_string(),
            x,
            y,
            font_size,
            color,
        });
        Ok(())
    }

    fn measure_text(&self, text: &str, _font_size: u16) -> u32 {
        text.len() as u32 * BITMAP_GLYPH_WIDTH
    }

    fn swap_buffers(&mut self) -> Result<()> {
        self.swaps += 1;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        self.shut_down = true;
        Ok(())
    }
}

impl InputBackend for MockBackend {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.events.pop_front().into_iter().collect()
    }

    /// One scripted event per call; an exhausted script reads as the user
    /// closing the window so loops under test always terminate.
    fn wait_events(&mut self) -> Vec<InputEvent> {
        vec![self.events.pop_front().unwrap_or(InputEvent::Quit)]
    }
}

/// Draw `sdi` onto `backend` through a 101x101 pixel map of the 0..10 square.
pub fn render(sdi: &SdiRegistry, backend: &mut MockBackend) {
    let map = CoordMap::new(101, 101, 0.0, 0.0, 10.0, 10.0).unwrap();
    sdi.draw(backend, &map).unwrap();
}
