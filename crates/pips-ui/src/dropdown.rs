//! Dropdown selector.
//!
//! A summary [`Button`] reading `"<label>: <selection>"`, plus one option
//! button per choice that exists only while the menu is open. Options are
//! stacked below the summary, each the summary's size, in option order.

use pips_sdi::SdiRegistry;
use pips_types::error::{PipsError, Result};
use pips_types::geometry::{Bounds, Point};

use crate::button::Button;
use crate::theme::ButtonTheme;

/// A closed/open selector over a fixed list of string options.
#[derive(Debug)]
pub struct Dropdown {
    id: String,
    label: String,
    options: Vec<String>,
    current: usize,
    summary: Button,
    option_buttons: Vec<Button>,
    styles: ButtonTheme,
}

impl Dropdown {
    /// Create and draw a closed dropdown showing the first option.
    ///
    /// Fails on bad geometry, an empty option list, or duplicate options.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sdi: &mut SdiRegistry,
        styles: &ButtonTheme,
        id: impl Into<String>,
        center: Point,
        width: f64,
        height: f64,
        options: Vec<String>,
        label: impl Into<String>,
    ) -> Result<Self> {
        let id = id.into();
        let label = label.into();
        if options.is_empty() {
            return Err(PipsError::Construction(format!(
                "dropdown '{id}' needs at least one option"
            )));
        }
        for (i, opt) in options.iter().enumerate() {
            if options[..i].contains(opt) {
                return Err(PipsError::Construction(format!(
                    "dropdown '{id}' lists option '{opt}' twice"
                )));
            }
        }

        let mut summary = Button::new(
            sdi,
            styles,
            format!("{id}.summary"),
            center,
            width,
            height,
            summary_text(&label, &options[0]),
        )?;
        summary.activate(sdi);

        Ok(Self {
            id,
            label,
            options,
            current: 0,
            summary,
            option_buttons: Vec::new(),
            styles: *styles,
        })
    }

    /// Route a click: the summary toggles the menu, an open option is
    /// selected. Returns whether the click did anything.
    pub fn clicked(&mut self, sdi: &mut SdiRegistry, p: Point) -> bool {
        if self.summary.clicked(p) {
            if self.is_open() {
                self.close(sdi);
            } else {
                self.open(sdi);
            }
            return true;
        }

        if let Some(index) = self.option_buttons.iter().position(|b| b.clicked(p)) {
            self.apply_selection(sdi, index);
            return true;
        }

        false
    }

    /// Draw one active option button per option below the summary.
    /// No-op when already open.
    pub fn open(&mut self, sdi: &mut SdiRegistry) {
        if self.is_open() {
            return;
        }
        for i in 0..self.options.len() {
            let bounds = self.option_bounds(i);
            let mut button = Button::from_bounds(
                sdi,
                &self.styles,
                format!("{}.opt{i}", self.id),
                bounds,
                self.options[i].clone(),
            );
            button.activate(sdi);
            self.option_buttons.push(button);
        }
        log::debug!("dropdown '{}' opened", self.id);
    }

    /// Undraw every option button. No-op when already closed.
    pub fn close(&mut self, sdi: &mut SdiRegistry) {
        if !self.is_open() {
            return;
        }
        for button in self.option_buttons.drain(..) {
            button.undraw(sdi);
        }
        log::debug!("dropdown '{}' closed", self.id);
    }

    /// Select option `index` directly, closing the menu.
    pub fn select(&mut self, sdi: &mut SdiRegistry, index: usize) -> Result<()> {
        if index >= self.options.len() {
            return Err(PipsError::OutOfRange(format!(
                "dropdown '{}' has {} options, index {index} requested",
                self.id,
                self.options.len()
            )));
        }
        self.apply_selection(sdi, index);
        Ok(())
    }

    /// The current selection parsed as an integer.
    ///
    /// Negative and non-numeric selections are parse errors.
    pub fn current_value(&self) -> Result<u32> {
        parse_option(self.selection())
    }

    /// Every option parsed as an integer, in option order.
    pub fn values(&self) -> Result<Vec<u32>> {
        self.options.iter().map(|o| parse_option(o)).collect()
    }

    pub fn selection(&self) -> &str {
        &self.options[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_open(&self) -> bool {
        !self.option_buttons.is_empty()
    }

    /// Live option buttons; empty while closed.
    pub fn option_buttons(&self) -> &[Button] {
        &self.option_buttons
    }

    pub fn summary(&self) -> &Button {
        &self.summary
    }

    /// Band occupied by option `index` when the menu is open.
    pub fn option_bounds(&self, index: usize) -> Bounds {
        let s = self.summary.bounds();
        let h = s.height();
        let top = s.ymin - index as f64 * h;
        Bounds {
            xmin: s.xmin,
            xmax: s.xmax,
            ymin: top - h,
            ymax: top,
        }
    }

    /// Everything the dropdown can cover: the summary plus the open menu.
    pub fn footprint(&self) -> Bounds {
        let s = self.summary.bounds();
        let last = self.option_bounds(self.options.len() - 1);
        Bounds {
            ymin: last.ymin,
            ..s
        }
    }

    fn apply_selection(&mut self, sdi: &mut SdiRegistry, index: usize) {
        self.current = index;
        let text = summary_text(&self.label, &self.options[index]);
        self.summary.set_label(sdi, text);
        self.close(sdi);
        log::debug!(
            "dropdown '{}' selected '{}'",
            self.id,
            self.options[index]
        );
    }
}

fn summary_text(label: &str, option: &str) -> String {
    format!("{label}: {option}")
}

fn parse_option(option: &str) -> Result<u32> {
    option
        .trim()
        .parse()
        .map_err(|_| PipsError::Parse(format!("option '{option}' is not a non-negative integer")))
}
