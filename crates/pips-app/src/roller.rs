//! The dice roller: widgets, layout, and the click loop.

use rand::Rng;

use pips_sdi::Shape;
use pips_types::backend::{InputBackend, SdiBackend};
use pips_types::error::{PipsError, Result};
use pips_types::geometry::{Bounds, Point};
use pips_ui::{Button, DieView, Dropdown, Window};

use crate::config::RollerConfig;

/// Sides rolled when no sides selector is configured.
pub const DEFAULT_SIDES: u32 = 6;

const TOTAL_NAME: &str = "total";

/// What the loop should do after a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// A selector together with its options parsed once at startup.
#[derive(Debug)]
struct Selector {
    dropdown: Dropdown,
    values: Vec<u32>,
}

impl Selector {
    fn new(dropdown: Dropdown) -> Result<Self> {
        let values = dropdown.values().map_err(|e| {
            PipsError::Construction(format!("selector '{}': {e}", dropdown.label()))
        })?;
        Ok(Self { dropdown, values })
    }

    fn value(&self) -> u32 {
        self.values[self.dropdown.current_index()]
    }
}

/// The running application.
pub struct Roller<B: SdiBackend + InputBackend> {
    window: Window<B>,
    dice_selector: Selector,
    sides_selector: Option<Selector>,
    dice: Vec<DieView>,
    roll_button: Button,
    quit_button: Button,
    total: u64,
}

impl<B: SdiBackend + InputBackend> Roller<B> {
    /// Lay out every widget on `window`.
    ///
    /// Fails if the configuration is invalid, an option value does not suit
    /// its selector, or two clickable regions could overlap.
    pub fn new(mut window: Window<B>, config: &RollerConfig) -> Result<Self> {
        config.validate()?;
        let theme = &config.theme;
        let sdi = window.sdi_mut();

        let dice_selector = Selector::new(Dropdown::new(
            sdi,
            &theme.button,
            "dice",
            config.dice_selector_center,
            config.selector_width,
            config.selector_height,
            config.dice_options.clone(),
            config.dice_label.clone(),
        )?)?;
        if let Some(&n) = dice_selector
            .values
            .iter()
            .find(|&&n| n as usize > config.max_dice)
        {
            return Err(PipsError::Construction(format!(
                "dice option {n} exceeds the {} dice on screen",
                config.max_dice
            )));
        }

        let sides_selector = match &config.sides_options {
            Some(options) => {
                let selector = Selector::new(Dropdown::new(
                    sdi,
                    &theme.button,
                    "sides",
                    config.sides_selector_center,
                    config.selector_width,
                    config.selector_height,
                    options.clone(),
                    config.sides_label.clone(),
                )?)?;
                if selector.values.contains(&0) {
                    return Err(PipsError::Construction(
                        "sides option 0 cannot be rolled".to_string(),
                    ));
                }
                Some(selector)
            },
            None => None,
        };

        let mut dice = Vec::with_capacity(config.max_dice);
        for i in 0..config.max_dice {
            dice.push(DieView::new(
                sdi,
                &theme.die,
                format!("die{i}"),
                config.die_center(i),
                config.die_size,
            )?);
        }

        let mut roll_button = Button::new(
            sdi,
            &theme.button,
            "roll",
            config.roll_center,
            config.roll_width,
            config.roll_height,
            config.roll_label.clone(),
        )?;
        roll_button.activate(sdi);

        let total = sdi.create(
            TOTAL_NAME,
            Shape::Text {
                anchor: config.total_center,
            },
        );
        total.text = Some(total_text(0));
        total.text_color = theme.text;
        total.font_size = theme.font_size_lg;

        let mut quit_button = Button::new(
            sdi,
            &theme.button,
            "quit",
            config.quit_center,
            config.quit_width,
            config.quit_height,
            config.quit_label.clone(),
        )?;
        quit_button.activate(sdi);

        let mut roller = Self {
            window,
            dice_selector,
            sides_selector,
            dice,
            roll_button,
            quit_button,
            total: 0,
        };
        roller.check_hit_regions()?;
        roller.show_prefix(roller.dice_count());
        log::info!(
            "roller ready: {} dice on screen, {} shown",
            roller.dice.len(),
            roller.dice_count()
        );
        Ok(roller)
    }

    /// Dispatch one click: quit, then roll, then the selectors.
    pub fn handle_click<R: Rng + ?Sized>(&mut self, p: Point, rng: &mut R) -> LoopControl {
        if self.quit_button.clicked(p) {
            log::info!("quit requested");
            return LoopControl::Quit;
        }
        if self.roll_button.clicked(p) {
            self.roll(rng);
            return LoopControl::Continue;
        }

        let sdi = self.window.sdi_mut();
        self.dice_selector.dropdown.clicked(sdi, p);
        if let Some(sides) = self.sides_selector.as_mut() {
            sides.dropdown.clicked(sdi, p);
        }
        LoopControl::Continue
    }

    /// Roll the selected number of dice and refresh the total.
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u64 {
        let count = self.dice_count();
        let sides = self.sides();
        let sdi = self.window.sdi_mut();
        let mut total = 0u64;
        for (i, die) in self.dice.iter_mut().enumerate() {
            if i < count {
                die.show(sdi);
                let value = rng.gen_range(1..=sides);
                if let Err(e) = die.set_value(sdi, i64::from(value)) {
                    log::warn!("die {i}: {e}");
                }
                total += u64::from(value);
            } else {
                die.hide(sdi);
            }
        }
        self.set_total(total);
        log::info!("rolled {count}d{sides}: total {total}");
        total
    }

    /// Run until the quit button is clicked or the window is closed.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        while let Some(p) = self.window.get_mouse()? {
            if self.handle_click(p, rng) == LoopControl::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Number of dice the dice selector currently asks for.
    pub fn dice_count(&self) -> usize {
        self.dice_selector.value() as usize
    }

    /// Sides per die, from the sides selector when there is one.
    pub fn sides(&self) -> u32 {
        self.sides_selector
            .as_ref()
            .map_or(DEFAULT_SIDES, Selector::value)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn dice(&self) -> &[DieView] {
        &self.dice
    }

    pub fn dice_selector(&self) -> &Dropdown {
        &self.dice_selector.dropdown
    }

    pub fn sides_selector(&self) -> Option<&Dropdown> {
        self.sides_selector.as_ref().map(|s| &s.dropdown)
    }

    pub fn roll_button(&self) -> &Button {
        &self.roll_button
    }

    pub fn quit_button(&self) -> &Button {
        &self.quit_button
    }

    pub fn window(&self) -> &Window<B> {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut Window<B> {
        &mut self.window
    }

    /// Give the window back for teardown.
    pub fn into_window(self) -> Window<B> {
        self.window
    }

    fn set_total(&mut self, total: u64) {
        self.total = total;
        if let Ok(text) = self.window.sdi_mut().get_mut(TOTAL_NAME) {
            text.text = Some(total_text(total));
        }
    }

    fn show_prefix(&mut self, count: usize) {
        let sdi = self.window.sdi_mut();
        for (i, die) in self.dice.iter_mut().enumerate() {
            if i < count {
                die.show(sdi);
            } else {
                die.hide(sdi);
            }
        }
    }

    /// Every clickable region, open menus included, must be disjoint.
    fn check_hit_regions(&self) -> Result<()> {
        let mut regions: Vec<(&str, Bounds)> = vec![
            ("dice selector", self.dice_selector.dropdown.footprint()),
            ("roll button", self.roll_button.bounds()),
            ("quit button", self.quit_button.bounds()),
        ];
        if let Some(sides) = &self.sides_selector {
            regions.push(("sides selector", sides.dropdown.footprint()));
        }
        for (i, (a_name, a)) in regions.iter().enumerate() {
            for (b_name, b) in &regions[i + 1..] {
                if a.intersects(b) {
                    return Err(PipsError::Construction(format!(
                        "{a_name} overlaps {b_name}"
                    )));
                }
            }
        }
        Ok(())
    }
}

fn total_text(total: u64) -> String {
    format!("Total: {total}")
}
