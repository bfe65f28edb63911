// SPDX-License-Identifier: GPL-3.0-only

//! Design tokens of the application, resolved once at startup.

use iced::theme::Palette;
use iced::{Color, Font, Theme};

pub const BACKGROUND: Color = iced::color!(0x0D, 0x11, 0x17);
pub const SURFACE: Color = iced::color!(0x16, 0x1B, 0x22);
pub const PRIMARY: Color = iced::color!(0x58, 0xA6, 0xFF);
pub const SECONDARY: Color = iced::color!(0x8B, 0x5C, 0xF6);
pub const BORDER: Color = iced::color!(0x30, 0x36, 0x3D);
pub const FOREGROUND: Color = iced::color!(0xC9, 0xD1, 0xD9);
pub const FOREGROUND_MUTED: Color = iced::color!(0x8B, 0x94, 0x9E);

// `SURFACE` with a faint white overlay, used for hovered controls.
pub const SURFACE_HOVERED: Color = iced::color!(0x22, 0x27, 0x2D);

pub const FONT_SANS: Font = Font::with_name("Inter");

/// Builds the application [`Theme`] from the design tokens.
pub fn app_theme() -> Theme {
    Theme::custom(
        String::from("Listado"),
        Palette {
            background: BACKGROUND,
            text: FOREGROUND,
            primary: PRIMARY,
            success: SECONDARY,
            // The token set declares no dedicated danger tone.
            danger: Color::from_rgb8(0xF8, 0x51, 0x49),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(color: Color) -> String {
        let [r, g, b, _] = color.into_rgba8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    #[test]
    fn color_tokens_are_stable() {
        assert_eq!(hex(BACKGROUND), "#0D1117");
        assert_eq!(hex(SURFACE), "#161B22");
        assert_eq!(hex(PRIMARY), "#58A6FF");
        assert_eq!(hex(SECONDARY), "#8B5CF6");
        assert_eq!(hex(BORDER), "#30363D");
        assert_eq!(hex(FOREGROUND), "#C9D1D9");
        assert_eq!(hex(FOREGROUND_MUTED), "#8B949E");
    }

    #[test]
    fn color_tokens_are_opaque() {
        for color in [
            BACKGROUND,
            SURFACE,
            PRIMARY,
            SECONDARY,
            BORDER,
            FOREGROUND,
            FOREGROUND_MUTED,
            SURFACE_HOVERED,
        ] {
            assert_eq!(color.into_rgba8()[3], 0xFF);
        }
    }

    #[test]
    fn app_theme_uses_the_tokens() {
        let palette = app_theme().palette();

        assert_eq!(hex(palette.background), "#0D1117");
        assert_eq!(hex(palette.text), "#C9D1D9");
        assert_eq!(hex(palette.primary), "#58A6FF");
    }
}
