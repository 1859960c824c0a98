//! Logical geometry: points, axis-aligned bounds, and the mapping between the
//! logical coordinate frame widgets are laid out in and backend pixels.

use crate::error::{PipsError, Result};

/// A point in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return this point shifted by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Closed axis-aligned box in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Bounds {
    /// Build a box of `width` x `height` centered on `center`.
    ///
    /// Fails when either dimension is zero, negative, or not finite.
    pub fn from_center(center: Point, width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(PipsError::Construction(format!(
                "width must be positive, got {width}"
            )));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(PipsError::Construction(format!(
                "height must be positive, got {height}"
            )));
        }
        let (hw, hh) = (width / 2.0, height / 2.0);
        Ok(Self {
            xmin: center.x - hw,
            xmax: center.x + hw,
            ymin: center.y - hh,
            ymax: center.y + hh,
        })
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: Point) -> bool {
        self.xmin <= p.x && p.x <= self.xmax && self.ymin <= p.y && p.y <= self.ymax
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.xmin + self.xmax) / 2.0,
            (self.ymin + self.ymax) / 2.0,
        )
    }

    /// Lower-left and upper-right corners.
    pub fn corners(&self) -> (Point, Point) {
        (
            Point::new(self.xmin, self.ymin),
            Point::new(self.xmax, self.ymax),
        )
    }

    /// True if the two boxes share any point (edges included).
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.xmin <= other.xmax
            && other.xmin <= self.xmax
            && self.ymin <= other.ymax
            && other.ymin <= self.ymax
    }
}

/// Maps a logical frame onto a pixel viewport.
///
/// The logical frame has `(x1, y1)` at the lower-left corner and `(x2, y2)` at
/// the upper-right, so logical y grows upward while pixel y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordMap {
    width: u32,
    height: u32,
    x1: f64,
    y2: f64,
    xscale: f64,
    yscale: f64,
}

impl CoordMap {
    pub fn new(width: u32, height: u32, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self> {
        if width < 2 || height < 2 {
            return Err(PipsError::Construction(format!(
                "viewport {width}x{height} is too small"
            )));
        }
        if x1 == x2 || y1 == y2 || ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
            return Err(PipsError::Construction(format!(
                "degenerate coordinate frame ({x1}, {y1})-({x2}, {y2})"
            )));
        }
        Ok(Self {
            width,
            height,
            x1,
            y2,
            xscale: (x2 - x1) / (width - 1) as f64,
            yscale: (y2 - y1) / (height - 1) as f64,
        })
    }

    pub fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Logical point to pixel position (rounded).
    pub fn to_pixel(&self, p: Point) -> (i32, i32) {
        let px = (p.x - self.x1) / self.xscale;
        let py = (self.y2 - p.y) / self.yscale;
        (px.round() as i32, py.round() as i32)
    }

    /// Pixel position to logical point.
    pub fn to_logical(&self, x: i32, y: i32) -> Point {
        Point::new(
            self.x1 + x as f64 * self.xscale,
            self.y2 - y as f64 * self.yscale,
        )
    }

    /// Horizontal logical length in pixels.
    pub fn scale_len(&self, len: f64) -> u32 {
        (len / self.xscale).abs().round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_center_computes_edges() {
        let b = Bounds::from_center(Point::new(5.0, 4.5), 6.0, 1.0).unwrap();
        assert_eq!(b.xmin, 2.0);
        assert_eq!(b.xmax, 8.0);
        assert_eq!(b.ymin, 4.0);
        assert_eq!(b.ymax, 5.0);
        assert_eq!(b.center(), Point::new(5.0, 4.5));
    }

    #[test]
    fn from_center_rejects_bad_dimensions() {
        let c = Point::new(0.0, 0.0);
        assert!(matches!(
            Bounds::from_center(c, 0.0, 1.0),
            Err(PipsError::Construction(_))
        ));
        assert!(Bounds::from_center(c, 1.0, -2.0).is_err());
        assert!(Bounds::from_center(c, f64::NAN, 1.0).is_err());
        assert!(Bounds::from_center(c, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn contains_is_inclusive() {
        let b = Bounds::from_center(Point::new(0.0, 0.0), 2.0, 2.0).unwrap();
        assert!(b.contains(Point::new(-1.0, -1.0)));
        assert!(b.contains(Point::new(1.0, 1.0)));
        assert!(!b.contains(Point::new(1.0001, 0.0)));
    }

    #[test]
    fn intersects_adjacent_bands() {
        let a = Bounds::from_center(Point::new(0.0, 0.0), 2.0, 1.0).unwrap();
        let b = Bounds::from_center(Point::new(0.0, -1.0), 2.0, 1.0).unwrap();
        let c = Bounds::from_center(Point::new(0.0, -2.0), 2.0, 1.0).unwrap();
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn coord_map_flips_y() {
        let m = CoordMap::new(501, 401, 0.0, 0.0, 10.0, 10.0).unwrap();
        assert_eq!(m.to_pixel(Point::new(0.0, 10.0)), (0, 0));
        assert_eq!(m.to_pixel(Point::new(10.0, 0.0)), (500, 400));
        assert_eq!(m.to_pixel(Point::new(5.0, 5.0)), (250, 200));
    }

    #[test]
    fn coord_map_to_logical() {
        let m = CoordMap::new(501, 401, 0.0, 0.0, 10.0, 10.0).unwrap();
        let p = m.to_logical(250, 200);
        assert!((p.x - 5.0).abs() < 1e-9);
        assert!((p.y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn coord_map_scale_len() {
        let m = CoordMap::new(501, 401, 0.0, 0.0, 10.0, 10.0).unwrap();
        assert_eq!(m.scale_len(1.0), 50);
        assert_eq!(m.scale_len(-1.0), 50);
    }

    #[test]
    fn coord_map_rejects_degenerate_frames() {
        assert!(CoordMap::new(1, 100, 0.0, 0.0, 1.0, 1.0).is_err());
        assert!(CoordMap::new(100, 100, 3.0, 0.0, 3.0, 1.0).is_err());
        assert!(CoordMap::new(100, 100, 0.0, f64::NAN, 1.0, 1.0).is_err());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn points_outside_are_never_contained(
                cx in -50.0f64..50.0,
                cy in -50.0f64..50.0,
                w in 0.1f64..20.0,
                h in 0.1f64..20.0,
                dx in 0.001f64..100.0,
            ) {
                let b = Bounds::from_center(Point::new(cx, cy), w, h).unwrap();
                prop_assert!(!b.contains(Point::new(b.xmax + dx, cy)));
                prop_assert!(!b.contains(Point::new(b.xmin - dx, cy)));
                prop_assert!(!b.contains(Point::new(cx, b.ymax + dx)));
                prop_assert!(!b.contains(Point::new(cx, b.ymin - dx)));
            }

            #[test]
            fn pixel_round_trip_stays_within_a_pixel(
                px in 0i32..500,
                py in 0i32..400,
            ) {
                let m = CoordMap::new(500, 400, 0.0, 0.0, 10.0, 10.0).unwrap();
                let (rx, ry) = m.to_pixel(m.to_logical(px, py));
                prop_assert!((rx - px).abs() <= 1);
                prop_assert!((ry - py).abs() <= 1);
            }
        }
    }
}
