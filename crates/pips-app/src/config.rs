//! Window, layout, and option configuration for the roller.

use pips_types::error::{PipsError, Result};
use pips_types::geometry::{CoordMap, Point};
use pips_ui::Theme;

/// Everything the roller needs to lay itself out.
///
/// Positions and sizes are in the logical frame spanned by `logical_min` and
/// `logical_max`, with y growing upward.
#[derive(Debug, Clone)]
pub struct RollerConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Lower-left corner of the logical frame.
    pub logical_min: Point,
    /// Upper-right corner of the logical frame.
    pub logical_max: Point,

    /// Number of die faces laid out; the dice selector picks a prefix.
    pub max_dice: usize,
    pub dice_options: Vec<String>,
    pub dice_label: String,
    /// `None` rolls six-sided dice with no selector on screen.
    pub sides_options: Option<Vec<String>>,
    pub sides_label: String,

    // Selectors
    pub dice_selector_center: Point,
    pub sides_selector_center: Point,
    pub selector_width: f64,
    pub selector_height: f64,

    // Dice row
    pub die_first_center: Point,
    pub die_spacing: f64,
    pub die_size: f64,

    // Triggers and readout
    pub roll_center: Point,
    pub roll_width: f64,
    pub roll_height: f64,
    pub roll_label: String,
    pub total_center: Point,
    pub quit_center: Point,
    pub quit_width: f64,
    pub quit_height: f64,
    pub quit_label: String,

    pub theme: Theme,
}

impl Default for RollerConfig {
    fn default() -> Self {
        Self {
            window_title: "Dice Roller".to_string(),
            window_width: 500,
            window_height: 400,
            logical_min: Point::new(0.0, 0.0),
            logical_max: Point::new(10.0, 10.0),
            max_dice: 5,
            dice_options: numbered(&[1, 2, 3, 4, 5]),
            dice_label: "Dice".to_string(),
            sides_options: Some(numbered(&[6, 8, 10, 12, 20])),
            sides_label: "Sides".to_string(),
            dice_selector_center: Point::new(2.5, 9.3),
            sides_selector_center: Point::new(7.5, 9.3),
            selector_width: 2.0,
            selector_height: 0.6,
            die_first_center: Point::new(1.5, 7.0),
            die_spacing: 1.75,
            die_size: 1.5,
            roll_center: Point::new(5.0, 3.8),
            roll_width: 6.0,
            roll_height: 1.0,
            roll_label: "Roll Dice".to_string(),
            total_center: Point::new(5.0, 2.6),
            quit_center: Point::new(5.0, 1.2),
            quit_width: 2.0,
            quit_height: 1.0,
            quit_label: "Quit".to_string(),
            theme: Theme::classic(),
        }
    }
}

impl RollerConfig {
    /// Pixel mapping for the configured window and logical frame.
    pub fn coord_map(&self) -> Result<CoordMap> {
        CoordMap::new(
            self.window_width,
            self.window_height,
            self.logical_min.x,
            self.logical_min.y,
            self.logical_max.x,
            self.logical_max.y,
        )
    }

    /// Center of die `index` in the row.
    pub fn die_center(&self, index: usize) -> Point {
        self.die_first_center
            .offset(index as f64 * self.die_spacing, 0.0)
    }

    /// Reject configurations no window should be opened for.
    ///
    /// Option values are checked against their role once the selectors exist;
    /// this covers what can be judged from the numbers alone.
    pub fn validate(&self) -> Result<()> {
        self.coord_map()?;
        if self.max_dice == 0 {
            return Err(PipsError::Construction(
                "max_dice must be at least 1".to_string(),
            ));
        }
        if self.dice_options.is_empty() {
            return Err(PipsError::Construction(
                "dice selector has no options".to_string(),
            ));
        }
        if matches!(&self.sides_options, Some(opts) if opts.is_empty()) {
            return Err(PipsError::Construction(
                "sides selector has no options".to_string(),
            ));
        }
        for (what, size) in [
            ("selector", (self.selector_width, self.selector_height)),
            ("die", (self.die_size, self.die_size)),
            ("roll button", (self.roll_width, self.roll_height)),
            ("quit button", (self.quit_width, self.quit_height)),
        ] {
            if !(size.0 > 0.0 && size.1 > 0.0) {
                return Err(PipsError::Construction(format!(
                    "{what} size must be positive, got {} x {}",
                    size.0, size.1
                )));
            }
        }
        Ok(())
    }
}

fn numbered(values: &[u32]) -> Vec<String> {
    values.iter().map(u32::to_string).collect()
}
