//! Scene objects: one primitive shape plus its style.

use pips_types::backend::{Color, SdiBackend, WEIGHT_BOLD, WEIGHT_NORMAL};
use pips_types::error::Result;
use pips_types::geometry::{CoordMap, Point};

/// Default text size in pixels.
pub const DEFAULT_FONT_SIZE: u16 = 12;

/// Geometry of a scene object, in logical coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle spanning two opposite corners.
    Rect { p1: Point, p2: Point },
    /// Circle from center and logical radius.
    Circle { center: Point, radius: f64 },
    /// Text centered on an anchor point. The string lives in
    /// [`SdiObject::text`].
    Text { anchor: Point },
    /// Straight segment.
    Line { p1: Point, p2: Point },
}

/// Text weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    Normal,
    Bold,
}

impl TextStyle {
    fn weight(self) -> u16 {
        match self {
            TextStyle::Normal => WEIGHT_NORMAL,
            TextStyle::Bold => WEIGHT_BOLD,
        }
    }
}

/// A named, styled shape in the scene graph.
#[derive(Debug, Clone, PartialEq)]
pub struct SdiObject {
    pub shape: Shape,
    /// Interior color. `None` leaves the interior transparent.
    pub fill: Option<Color>,
    /// Outline color for rectangles, circles, and lines.
    pub stroke_color: Color,
    /// Outline width in pixels. Zero disables the outline.
    pub stroke_width: u16,
    pub text: Option<String>,
    pub text_color: Color,
    pub font_size: u16,
    pub text_style: TextStyle,
    /// Whether the object is attached to the surface. Hidden objects keep
    /// their style and come back unchanged when made visible again.
    pub visible: bool,
    /// Stacking order; higher draws later.
    pub z: i32,
}

impl SdiObject {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            fill: None,
            stroke_color: Color::BLACK,
            stroke_width: 1,
            text: None,
            text_color: Color::BLACK,
            font_size: DEFAULT_FONT_SIZE,
            text_style: TextStyle::Normal,
            visible: true,
            z: 0,
        }
    }

    /// Text string, or `""` when unset.
    pub fn text_str(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Render this object through `backend`.
    pub fn draw(&self, backend: &mut dyn SdiBackend, map: &CoordMap) -> Result<()> {
        match &self.shape {
            Shape::Rect { p1, p2 } => {
                let (ax, ay) = map.to_pixel(*p1);
                let (bx, by) = map.to_pixel(*p2);
                let x = ax.min(bx);
                let y = ay.min(by);
                let w = (ax - bx).unsigned_abs().max(1);
                let h = (ay - by).unsigned_abs().max(1);
                if let Some(fill) = self.fill {
                    backend.fill_rect(x, y, w, h, fill)?;
                }
                if self.stroke_width > 0 {
                    backend.stroke_rect(x, y, w, h, self.stroke_width, self.stroke_color)?;
                }
            },
            Shape::Circle { center, radius } => {
                let (cx, cy) = map.to_pixel(*center);
                let r = map.scale_len(*radius).min(u16::MAX as u32) as u16;
                if let Some(fill) = self.fill {
                    backend.fill_circle(cx, cy, r, fill)?;
                }
                if self.stroke_width > 0 {
                    backend.stroke_circle(cx, cy, r, self.stroke_width, self.stroke_color)?;
                }
            },
            Shape::Text { anchor } => {
                let text = self.text_str();
                if text.is_empty() {
                    return Ok(());
                }
                let (ax, ay) = map.to_pixel(*anchor);
                let w = backend.measure_text(text, self.font_size) as i32;
                let h = backend.measure_text_height(self.font_size) as i32;
                backend.draw_text_weighted(
                    text,
                    ax - w / 2,
                    ay - h / 2,
                    self.font_size,
                    self.text_style.weight(),
                    self.text_color,
                )?;
            },
            Shape::Line { p1, p2 } => {
                let (ax, ay) = map.to_pixel(*p1);
                let (bx, by) = map.to_pixel(*p2);
                backend.draw_line(ax, ay, bx, by, self.stroke_width.max(1), self.stroke_color)?;
            },
        }
        Ok(())
    }
}
