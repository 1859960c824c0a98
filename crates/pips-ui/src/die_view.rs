//! Die face display.
//!
//! A square face with seven pip positions. Values 1 to 6 light the usual
//! pattern; anything larger blanks the pips and prints the number instead.
//!
//! Pip indices run down the left column, then the center, then down the
//! right column:
//!
//! ```text
//! 0     4
//! 1  3  5
//! 2     6
//! ```

use pips_sdi::{SdiRegistry, Shape};
use pips_types::error::{PipsError, Result};
use pips_types::geometry::{Bounds, Point};

use crate::theme::DieTheme;

/// Number of pip positions on a face.
pub const PIP_COUNT: usize = 7;

/// Lit pips for each face value, indexed by `value - 1`.
const PATTERNS: [&[usize]; 6] = [
    &[3],
    &[0, 6],
    &[0, 3, 6],
    &[0, 2, 4, 6],
    &[0, 2, 3, 4, 6],
    &[0, 1, 2, 4, 5, 6],
];

/// A die face drawn on the surface.
#[derive(Debug)]
pub struct DieView {
    id: String,
    bounds: Bounds,
    value: u32,
    visible: bool,
    style: DieTheme,
}

impl DieView {
    /// Draw a die of side `size` centered on `center`, showing 1.
    pub fn new(
        sdi: &mut SdiRegistry,
        style: &DieTheme,
        id: impl Into<String>,
        center: Point,
        size: f64,
    ) -> Result<Self> {
        let id = id.into();
        let bounds = Bounds::from_center(center, size, size)?;
        if sdi.contains(&face_name(&id)) {
            return Err(PipsError::Construction(format!(
                "die '{id}' is already drawn"
            )));
        }

        let (p1, p2) = bounds.corners();
        let face = sdi.create(&face_name(&id), Shape::Rect { p1, p2 });
        face.fill = Some(style.face);
        face.stroke_color = style.border;
        face.stroke_width = style.border_width;

        let radius = 0.1 * size;
        let offset = 0.6 * size / 2.0;
        for (i, (dx, dy)) in pip_offsets().into_iter().enumerate() {
            let pip = sdi.create(
                &pip_name(&id, i),
                Shape::Circle {
                    center: center.offset(dx * offset, dy * offset),
                    radius,
                },
            );
            pip.fill = Some(style.face);
            pip.stroke_width = 0;
        }

        let text = sdi.create(&text_name(&id), Shape::Text { anchor: center });
        text.text_color = style.text;
        text.font_size = style.font_size;

        let die = Self {
            id,
            bounds,
            value: 1,
            visible: true,
            style: *style,
        };
        die.paint(sdi);
        Ok(die)
    }

    /// Display `value`. Values below 1 are rejected and nothing changes.
    pub fn set_value(&mut self, sdi: &mut SdiRegistry, value: i64) -> Result<()> {
        if value < 1 {
            return Err(PipsError::OutOfRange(format!(
                "die value must be at least 1, got {value}"
            )));
        }
        self.value = u32::try_from(value).map_err(|_| {
            PipsError::OutOfRange(format!("die value {value} does not fit a face"))
        })?;
        self.paint(sdi);
        Ok(())
    }

    /// Detach every shape from the surface. No-op when already hidden.
    pub fn hide(&mut self, sdi: &mut SdiRegistry) {
        if !self.visible {
            return;
        }
        self.set_attached(sdi, false);
        self.visible = false;
    }

    /// Re-attach every shape and reset to 1. No-op when already shown.
    pub fn show(&mut self, sdi: &mut SdiRegistry) {
        if self.visible {
            return;
        }
        self.set_attached(sdi, true);
        self.visible = true;
        self.value = 1;
        self.paint(sdi);
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Pip indices lit for the current value; empty above six.
    pub fn lit_pips(&self) -> &'static [usize] {
        lit_for(self.value)
    }

    fn paint(&self, sdi: &mut SdiRegistry) {
        let lit = lit_for(self.value);
        for i in 0..PIP_COUNT {
            if let Ok(pip) = sdi.get_mut(&pip_name(&self.id, i)) {
                pip.fill = Some(if lit.contains(&i) {
                    self.style.pip
                } else {
                    self.style.face
                });
            }
        }
        if let Ok(text) = sdi.get_mut(&text_name(&self.id)) {
            text.text = (self.value > 6).then(|| self.value.to_string());
        }
    }

    fn set_attached(&self, sdi: &mut SdiRegistry, visible: bool) {
        let names = std::iter::once(face_name(&self.id))
            .chain((0..PIP_COUNT).map(|i| pip_name(&self.id, i)))
            .chain(std::iter::once(text_name(&self.id)));
        for name in names {
            match sdi.get_mut(&name) {
                Ok(obj) => obj.visible = visible,
                Err(e) => log::warn!("die '{}': {e}", self.id),
            }
        }
    }
}

/// Unit offsets of the seven pips from the face center, y up.
fn pip_offsets() -> [(f64, f64); PIP_COUNT] {
    [
        (-1.0, 1.0),
        (-1.0, 0.0),
        (-1.0, -1.0),
        (0.0, 0.0),
        (1.0, 1.0),
        (1.0, 0.0),
        (1.0, -1.0),
    ]
}

fn lit_for(value: u32) -> &'static [usize] {
    match value {
        1..=6 => PATTERNS[value as usize - 1],
        _ => &[],
    }
}

fn face_name(id: &str) -> String {
    format!("{id}.face")
}

fn pip_name(id: &str, i: usize) -> String {
    format!("{id}.pip{i}")
}

fn text_name(id: &str) -> String {
    format!("{id}.text")
}
