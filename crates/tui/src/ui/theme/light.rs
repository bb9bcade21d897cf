//! Light palette: white surfaces with the brand blue as the primary accent.

use ratatui::style::Color;

use super::{
    roles::{Theme, ThemeRoles},
    theme_helpers::darken_rgb,
};

pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
pub const GRAY_50: Color = Color::Rgb(0xF8, 0xFA, 0xFC); // #F8FAFC
pub const GRAY_100: Color = Color::Rgb(0xF1, 0xF5, 0xF9); // #F1F5F9
pub const GRAY_300: Color = Color::Rgb(0xCB, 0xD5, 0xE1); // #CBD5E1
pub const GRAY_500: Color = Color::Rgb(0x64, 0x74, 0x8B); // #64748B
pub const GRAY_700: Color = Color::Rgb(0x33, 0x41, 0x55); // #334155
pub const GRAY_900: Color = Color::Rgb(0x0F, 0x17, 0x2A); // #0F172A

pub const BRAND_BLUE: Color = Color::Rgb(0x25, 0x63, 0xEB); // #2563EB
pub const BRAND_SKY: Color = Color::Rgb(0x0E, 0xA5, 0xE9); // #0EA5E9
pub const SELECTION_BLUE: Color = Color::Rgb(0xDB, 0xEA, 0xFE); // #DBEAFE

pub const STATUS_OK: Color = Color::Rgb(0x16, 0xA3, 0x4A); // #16A34A
pub const STATUS_ERROR: Color = Color::Rgb(0xDC, 0x26, 0x26); // #DC2626
pub const STAR_AMBER: Color = Color::Rgb(0xD9, 0x77, 0x06); // #D97706

fn build_light_roles() -> ThemeRoles {
    ThemeRoles {
        background: GRAY_50,
        surface: WHITE,
        surface_muted: GRAY_100,
        border: GRAY_300,

        text: GRAY_900,
        text_secondary: GRAY_700,
        text_muted: GRAY_500,

        accent_primary: BRAND_BLUE,
        accent_secondary: BRAND_SKY,
        on_accent: WHITE,

        info: BRAND_SKY,
        success: STATUS_OK,
        error: STATUS_ERROR,
        highlight: STAR_AMBER,

        selection_bg: SELECTION_BLUE,
        selection_fg: GRAY_900,
        focus: BRAND_BLUE,

        modal_bg: darken_rgb(GRAY_300, 0.85),
    }
}

#[derive(Debug, Clone)]
pub struct LightTheme {
    roles: ThemeRoles,
}

impl LightTheme {
    pub fn new() -> Self {
        Self { roles: build_light_roles() }
    }
}

impl Default for LightTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for LightTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
