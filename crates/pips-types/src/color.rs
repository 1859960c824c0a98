//! RGBA colors and the named palette used by the built-in themes.

/// A color in RGBA format (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    // X11 names, matching what classic Tk-style canvases accept.
    pub const LIGHT_GREY: Self = Self::rgb(211, 211, 211);
    pub const DARK_GREY: Self = Self::rgb(169, 169, 169);
    pub const GREEN2: Self = Self::rgb(0, 238, 0);
}

/// Darken a color by `amount` (0.0 = unchanged, 1.0 = black).
pub fn darken(c: Color, amount: f32) -> Color {
    let f = 1.0 - amount.clamp(0.0, 1.0);
    Color::rgba(
        (c.r as f32 * f) as u8,
        (c.g as f32 * f) as u8,
        (c.b as f32 * f) as u8,
        c.a,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(Color::rgb(1, 2, 3).a, 255);
    }

    #[test]
    fn darken_bounds() {
        let c = Color::rgb(200, 100, 50);
        assert_eq!(darken(c, 0.0), c);
        assert_eq!(darken(c, 1.0), Color::BLACK);
        assert_eq!(darken(c, 0.5), Color::rgb(100, 50, 25));
    }

    #[test]
    fn darken_clamps_amount() {
        let c = Color::rgb(200, 100, 50);
        assert_eq!(darken(c, 3.0), Color::BLACK);
        assert_eq!(darken(c, -1.0), c);
    }
}
