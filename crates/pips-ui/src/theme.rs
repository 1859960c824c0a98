//! Theme system for consistent widget styling.
//!
//! One set of widgets serves every look; a [`Theme`] value is handed to each
//! widget when it is built and the widget keeps the parts it needs.

use pips_sdi::TextStyle;
use pips_types::backend::Color;
use pips_types::color::darken;

/// Colors and outline for one button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetStyle {
    pub fill: Color,
    pub outline: Color,
    pub outline_width: u16,
    pub text: Color,
    pub text_style: TextStyle,
}

/// Paired styles for clickable widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonTheme {
    pub active: WidgetStyle,
    pub inactive: WidgetStyle,
    pub font_size: u16,
}

/// Die face styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieTheme {
    /// Face color; unlit pips are painted with it too.
    pub face: Color,
    /// Lit pip color.
    pub pip: Color,
    pub border: Color,
    pub border_width: u16,
    /// Color of the numeric overlay for values above six.
    pub text: Color,
    pub font_size: u16,
}

/// Complete visual theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Window background color.
    pub background: Color,
    pub button: ButtonTheme,
    pub die: DieTheme,
    /// Plain text such as the running total.
    pub text: Color,
    /// Large font size for headline text.
    pub font_size_lg: u16,
}

impl Theme {
    /// Light grey buttons on a bright green table.
    pub fn classic() -> Self {
        let button_fill = Color::LIGHT_GREY;
        Self {
            background: Color::GREEN2,
            button: ButtonTheme {
                active: WidgetStyle {
                    fill: button_fill,
                    outline: Color::BLACK,
                    outline_width: 2,
                    text: Color::BLACK,
                    text_style: TextStyle::Normal,
                },
                inactive: WidgetStyle {
                    fill: button_fill,
                    outline: Color::BLACK,
                    outline_width: 1,
                    text: Color::DARK_GREY,
                    text_style: TextStyle::Normal,
                },
                font_size: 12,
            },
            die: DieTheme {
                face: Color::WHITE,
                pip: Color::BLACK,
                border: Color::BLACK,
                border_width: 1,
                text: Color::BLACK,
                font_size: 24,
            },
            text: Color::BLACK,
            font_size_lg: 16,
        }
    }

    /// Dark felt with accent-colored active controls.
    pub fn dark() -> Self {
        let accent = Color::rgb(80, 160, 255);
        let surface = Color::rgb(50, 50, 70);
        Self {
            background: Color::rgb(18, 18, 24),
            button: ButtonTheme {
                active: WidgetStyle {
                    fill: surface,
                    outline: accent,
                    outline_width: 2,
                    text: Color::rgb(230, 230, 240),
                    text_style: TextStyle::Bold,
                },
                inactive: WidgetStyle {
                    fill: darken(surface, 0.3),
                    outline: Color::rgb(60, 60, 80),
                    outline_width: 1,
                    text: Color::rgb(100, 100, 120),
                    text_style: TextStyle::Normal,
                },
                font_size: 12,
            },
            die: DieTheme {
                face: Color::rgb(230, 230, 240),
                pip: Color::rgb(20, 20, 30),
                border: accent,
                border_width: 2,
                text: Color::rgb(20, 20, 30),
                font_size: 24,
            },
            text: Color::rgb(230, 230, 240),
            font_size_lg: 16,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states_differ(b: &ButtonTheme) -> bool {
        b.active != b.inactive
    }

    #[test]
    fn classic_matches_table_colors() {
        let t = Theme::classic();
        assert_eq!(t.background, Color::GREEN2);
        assert_eq!(t.die.face, Color::WHITE);
        assert_eq!(t.die.pip, Color::BLACK);
        assert_eq!(t.button.active.text, Color::BLACK);
        assert_eq!(t.button.inactive.text, Color::DARK_GREY);
    }

    #[test]
    fn active_and_inactive_are_distinct() {
        assert!(states_differ(&Theme::classic().button));
        assert!(states_differ(&Theme::dark().button));
    }

    #[test]
    fn active_outline_is_heavier() {
        for t in [Theme::classic(), Theme::dark()] {
            assert!(t.button.active.outline_width > t.button.inactive.outline_width);
        }
    }

    #[test]
    fn pips_contrast_with_face() {
        for t in [Theme::classic(), Theme::dark()] {
            assert_ne!(t.die.face, t.die.pip);
        }
    }

    #[test]
    fn default_is_classic() {
        assert_eq!(Theme::default(), Theme::classic());
    }
}
