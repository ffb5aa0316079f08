//! Ratatui styling for draw commands.
//!
//! Colours in the adventure data are 24-bit; terminals without true colour
//! support fall back to the nearest palette entry on their own.

use adventure_core::{ButtonStyle, ButtonVisual, Rgb, TextAlign, TextStyle};
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};

/// Consistent colour scheme for the terminal renderer.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    const ART: Rgb = Rgb(0xC8, 0xC8, 0xC8);
    const PROP: Rgb = Rgb(0xE8, 0xB0, 0x4C);
    const PLAYER: Rgb = Rgb(0xFF, 0xE0, 0x66);
    const DIALOGUE_BG: Rgb = Rgb(0xF4, 0xE4, 0xBC);

    pub fn color(&self, rgb: Rgb) -> Color {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }

    /// Background art, darkened when the room applies a tint.
    pub fn background(&self, tint: Option<u8>) -> Style {
        let rgb = match tint {
            Some(level) => Self::ART.tinted(level),
            None => Self::ART,
        };
        Style::default().fg(self.color(rgb))
    }

    pub fn text(&self, style: &TextStyle) -> Style {
        Style::default().fg(self.color(style.color))
    }

    pub fn alignment(&self, align: TextAlign) -> Alignment {
        match align {
            TextAlign::Left => Alignment::Left,
            TextAlign::Center => Alignment::Center,
            TextAlign::Right => Alignment::Right,
        }
    }

    pub fn prop(&self) -> Style {
        Style::default().fg(self.color(Self::PROP))
    }

    pub fn player(&self) -> Style {
        Style::default()
            .fg(self.color(Self::PLAYER))
            .add_modifier(Modifier::BOLD)
    }

    pub fn button(&self, style: &ButtonStyle, visual: ButtonVisual) -> Style {
        match visual {
            ButtonVisual::Default => Style::default()
                .bg(self.color(style.fill))
                .fg(self.color(style.text)),
            ButtonVisual::Hovered => Style::default()
                .bg(self.color(style.hover_fill))
                .fg(self.color(style.hover_tint))
                .add_modifier(Modifier::BOLD),
            ButtonVisual::Pressed => Style::default()
                .bg(self.color(style.pressed_fill))
                .fg(self.color(style.text))
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn dialogue_box(&self) -> Style {
        Style::default().bg(self.color(Self::DIALOGUE_BG))
    }

    pub fn dialogue_label(&self, style: &TextStyle) -> Style {
        self.text(style).add_modifier(Modifier::BOLD)
    }

    pub fn status_bar(&self) -> Style {
        Style::default().fg(Color::Gray).bg(Color::Black)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tint_darkens_the_background() {
        let theme = RatatuiTheme;
        assert_eq!(theme.background(None).fg, Some(Color::Rgb(0xC8, 0xC8, 0xC8)));
        assert_eq!(theme.background(Some(0)).fg, Some(Color::Rgb(0, 0, 0)));

        let Some(Color::Rgb(r, _, _)) = theme.background(Some(125)).fg else {
            panic!("expected an rgb colour");
        };
        assert!(r < 0xC8);
    }

    #[test]
    fn button_visuals_use_their_fills() {
        let theme = RatatuiTheme;
        let style = ButtonStyle::default();

        let normal = theme.button(&style, ButtonVisual::Default);
        let hovered = theme.button(&style, ButtonVisual::Hovered);
        let pressed = theme.button(&style, ButtonVisual::Pressed);

        assert_eq!(normal.bg, Some(Color::Rgb(0xAA, 0xAA, 0xAA)));
        assert_eq!(hovered.bg, Some(Color::Rgb(0xAA, 0x33, 0xAA)));
        assert_eq!(hovered.fg, Some(Color::Rgb(0xFF, 0x00, 0x00)));
        assert_eq!(pressed.bg, Some(Color::Rgb(0x66, 0x11, 0x66)));
    }

    #[test]
    fn text_alignment_maps_directly() {
        let theme = RatatuiTheme;
        assert_eq!(theme.alignment(TextAlign::Center), Alignment::Center);
        assert_eq!(theme.alignment(TextAlign::Right), Alignment::Right);
    }
}
