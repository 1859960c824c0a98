//! Button widget.
//!
//! A rectangle plus a centered label, both living in the scene graph under
//! `"<id>.rect"` and `"<id>.label"`. The hit box is fixed at construction;
//! only the label and the active/inactive styling change afterwards.

use pips_sdi::{SdiRegistry, Shape};
use pips_types::error::{PipsError, Result};
use pips_types::geometry::{Bounds, Point};

use crate::theme::{ButtonTheme, WidgetStyle};

/// A clickable rectangle with a label.
#[derive(Debug, Clone)]
pub struct Button {
    id: String,
    bounds: Bounds,
    label: String,
    active: bool,
    styles: ButtonTheme,
}

impl Button {
    /// Create an inactive button of `width` x `height` centered on `center`
    /// and draw it.
    ///
    /// Fails if the size is not positive or if `id` is already drawn.
    pub fn new(
        sdi: &mut SdiRegistry,
        styles: &ButtonTheme,
        id: impl Into<String>,
        center: Point,
        width: f64,
        height: f64,
        label: impl Into<String>,
    ) -> Result<Self> {
        let id = id.into();
        let bounds = Bounds::from_center(center, width, height)?;
        if sdi.contains(&rect_name(&id)) || sdi.contains(&label_name(&id)) {
            return Err(PipsError::Construction(format!(
                "button '{id}' is already drawn"
            )));
        }
        Ok(Self::from_bounds(sdi, styles, id, bounds, label))
    }

    /// Build and draw from already validated bounds.
    pub(crate) fn from_bounds(
        sdi: &mut SdiRegistry,
        styles: &ButtonTheme,
        id: String,
        bounds: Bounds,
        label: impl Into<String>,
    ) -> Self {
        let (p1, p2) = bounds.corners();
        sdi.create(&rect_name(&id), Shape::Rect { p1, p2 });
        let text = sdi.create(
            &label_name(&id),
            Shape::Text {
                anchor: bounds.center(),
            },
        );
        let label = label.into();
        text.text = Some(label.clone());
        text.font_size = styles.font_size;

        let mut button = Self {
            id,
            bounds,
            label,
            active: true,
            styles: *styles,
        };
        button.deactivate(sdi);
        button
    }

    /// Make the button clickable and draw it in the active style.
    pub fn activate(&mut self, sdi: &mut SdiRegistry) {
        self.active = true;
        self.apply_style(sdi, self.styles.active);
    }

    /// Make the button ignore clicks and draw it in the inactive style.
    pub fn deactivate(&mut self, sdi: &mut SdiRegistry) {
        self.active = false;
        self.apply_style(sdi, self.styles.inactive);
    }

    /// True iff the button is active and `p` lies inside its box.
    pub fn clicked(&self, p: Point) -> bool {
        self.active && self.bounds.contains(p)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, sdi: &mut SdiRegistry, label: impl Into<String>) {
        self.label = label.into();
        if let Ok(obj) = sdi.get_mut(&label_name(&self.id)) {
            obj.text = Some(self.label.clone());
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Remove the button's shapes from the surface.
    pub fn undraw(self, sdi: &mut SdiRegistry) {
        for name in [rect_name(&self.id), label_name(&self.id)] {
            if sdi.destroy(&name).is_err() {
                log::warn!("button '{}' lost shape '{name}' before undraw", self.id);
            }
        }
    }

    fn apply_style(&self, sdi: &mut SdiRegistry, style: WidgetStyle) {
        if let Ok(obj) = sdi.get_mut(&rect_name(&self.id)) {
            obj.fill = Some(style.fill);
            obj.stroke_color = style.outline;
            obj.stroke_width = style.outline_width;
        }
        if let Ok(obj) = sdi.get_mut(&label_name(&self.id)) {
            obj.text_color = style.text;
            obj.text_style = style.text_style;
        }
    }
}

fn rect_name(id: &str) -> String {
    format!("{id}.rect")
}

fn label_name(id: &str) -> String {
    format!("{id}.label")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockBackend, render};
    use crate::theme::Theme;

    fn make(sdi: &mut SdiRegistry) -> Button {
        let theme = Theme::classic();
        Button::new(sdi, &theme.button, "roll", Point::new(5.0, 4.5), 6.0, 1.0, "Roll Dice")
            .unwrap()
    }

    #[test]
    fn new_is_inactive_with_fixed_box() {
        let mut sdi = SdiRegistry::new();
        let b = make(&mut sdi);
        assert!(!b.is_active());
        assert_eq!(b.label(), "Roll Dice");
        let bounds = b.bounds();
        assert_eq!((bounds.xmin, bounds.xmax), (2.0, 8.0));
        assert_eq!((bounds.ymin, bounds.ymax), (4.0, 5.0));
    }

    #[test]
    fn new_draws_rect_and_label() {
        let mut sdi = SdiRegistry::new();
        make(&mut sdi);
        assert!(sdi.contains("roll.rect"));
        assert_eq!(sdi.get("roll.label").unwrap().text_str(), "Roll Dice");
    }

    #[test]
    fn rejects_bad_geometry() {
        let theme = Theme::classic();
        let mut sdi = SdiRegistry::new();
        let r = Button::new(&mut sdi, &theme.button, "b", Point::new(0.0, 0.0), 0.0, 1.0, "x");
        assert!(matches!(r, Err(PipsError::Construction(_))));
        let r = Button::new(&mut sdi, &theme.button, "b", Point::new(0.0, 0.0), 1.0, -1.0, "x");
        assert!(r.is_err());
        assert!(sdi.is_empty());
    }

    #[test]
    fn rejects_duplicate_id() {
        let mut sdi = SdiRegistry::new();
        make(&mut sdi);
        let theme = Theme::classic();
        let r = Button::new(&mut sdi, &theme.button, "roll", Point::new(1.0, 1.0), 1.0, 1.0, "x");
        assert!(r.is_err());
    }

    #[test]
    fn inactive_never_clicks() {
        let mut sdi = SdiRegistry::new();
        let b = make(&mut sdi);
        assert!(!b.clicked(Point::new(5.0, 4.5)));
    }

    #[test]
    fn active_clicks_inside_inclusive() {
        let mut sdi = SdiRegistry::new();
        let mut b = make(&mut sdi);
        b.activate(&mut sdi);
        assert!(b.clicked(Point::new(5.0, 4.5)));
        assert!(b.clicked(Point::new(2.0, 4.0)));
        assert!(b.clicked(Point::new(8.0, 5.0)));
        assert!(!b.clicked(Point::new(8.01, 4.5)));
        assert!(!b.clicked(Point::new(5.0, 3.99)));
        assert!(!b.clicked(Point::new(-1e9, 1e9)));
    }

    #[test]
    fn deactivate_disables_clicks_again() {
        let mut sdi = SdiRegistry::new();
        let mut b = make(&mut sdi);
        b.activate(&mut sdi);
        b.deactivate(&mut sdi);
        assert!(!b.clicked(Point::new(5.0, 4.5)));
    }

    #[test]
    fn styles_follow_state() {
        let theme = Theme::classic();
        let mut sdi = SdiRegistry::new();
        let mut b = make(&mut sdi);
        let rect = sdi.get("roll.rect").unwrap();
        assert_eq!(rect.stroke_width, theme.button.inactive.outline_width);
        assert_eq!(
            sdi.get("roll.label").unwrap().text_color,
            theme.button.inactive.text
        );

        b.activate(&mut sdi);
        let rect = sdi.get("roll.rect").unwrap();
        assert_eq!(rect.stroke_width, theme.button.active.outline_width);
        assert_eq!(rect.fill, Some(theme.button.active.fill));
        assert_eq!(
            sdi.get("roll.label").unwrap().text_color,
            theme.button.active.text
        );
    }

    #[test]
    fn set_label_keeps_box() {
        let mut sdi = SdiRegistry::new();
        let mut b = make(&mut sdi);
        let before = b.bounds();
        b.set_label(&mut sdi, "Again");
        assert_eq!(b.label(), "Again");
        assert_eq!(sdi.get("roll.label").unwrap().text_str(), "Again");
        assert_eq!(b.bounds(), before);
    }

    #[test]
    fn undraw_removes_shapes() {
        let mut sdi = SdiRegistry::new();
        let b = make(&mut sdi);
        b.undraw(&mut sdi);
        assert!(sdi.is_empty());
    }

    #[test]
    fn renders_fill_outline_and_label() {
        let mut sdi = SdiRegistry::new();
        let mut b = make(&mut sdi);
        b.activate(&mut sdi);
        let mut backend = MockBackend::new();
        render(&sdi, &mut backend);
        assert!(backend.fill_rect_count() > 0);
        assert_eq!(backend.stroke_rect_count(), 1);
        assert!(backend.has_text("Roll Dice"));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn outside_points_never_click(
                x in -100.0f64..100.0,
                y in -100.0f64..100.0,
                active in any::<bool>(),
            ) {
                let mut sdi = SdiRegistry::new();
                let mut b = make(&mut sdi);
                if active {
                    b.activate(&mut sdi);
                }
                let p = Point::new(x, y);
                if !b.bounds().contains(p) {
                    prop_assert!(!b.clicked(p));
                }
            }

            #[test]
            fn inside_points_click_iff_active(
                fx in 0.0f64..=1.0,
                fy in 0.0f64..=1.0,
                active in any::<bool>(),
            ) {
                let mut sdi = SdiRegistry::new();
                let mut b = make(&mut sdi);
                if active {
                    b.activate(&mut sdi);
                }
                let bounds = b.bounds();
                let p = Point::new(
                    bounds.xmin + fx * bounds.width(),
                    bounds.ymin + fy * bounds.height(),
                );
                prop_assert_eq!(b.clicked(p), active);
            }
        }
    }
}
