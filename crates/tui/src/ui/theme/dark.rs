//! Dark palette: slate surfaces with a lighter brand blue so accents keep
//! their contrast.

use ratatui::style::Color;

use super::{
    roles::{Theme, ThemeRoles},
    theme_helpers::lighten_rgb,
};

pub const SLATE_950: Color = Color::Rgb(0x02, 0x06, 0x17); // #020617
pub const SLATE_900: Color = Color::Rgb(0x0F, 0x17, 0x2A); // #0F172A
pub const SLATE_800: Color = Color::Rgb(0x1E, 0x29, 0x3B); // #1E293B
pub const SLATE_700: Color = Color::Rgb(0x33, 0x41, 0x55); // #334155
pub const SLATE_400: Color = Color::Rgb(0x94, 0xA3, 0xB8); // #94A3B8
pub const SLATE_200: Color = Color::Rgb(0xE2, 0xE8, 0xF0); // #E2E8F0
pub const SLATE_50: Color = Color::Rgb(0xF8, 0xFA, 0xFC); // #F8FAFC

pub const BLUE_400: Color = Color::Rgb(0x60, 0xA5, 0xFA); // #60A5FA
pub const SKY_400: Color = Color::Rgb(0x38, 0xBD, 0xF8); // #38BDF8

pub const STATUS_OK: Color = Color::Rgb(0x4A, 0xDE, 0x80); // #4ADE80
pub const STATUS_ERROR: Color = Color::Rgb(0xF8, 0x71, 0x71); // #F87171
pub const STAR_AMBER: Color = Color::Rgb(0xFB, 0xBF, 0x24); // #FBBF24

fn build_dark_roles() -> ThemeRoles {
    ThemeRoles {
        background: SLATE_900,
        surface: SLATE_800,
        surface_muted: SLATE_700,
        border: SLATE_700,

        text: SLATE_50,
        text_secondary: SLATE_200,
        text_muted: SLATE_400,

        accent_primary: BLUE_400,
        accent_secondary: SKY_400,
        on_accent: SLATE_950,

        info: SKY_400,
        success: STATUS_OK,
        error: STATUS_ERROR,
        highlight: STAR_AMBER,

        selection_bg: lighten_rgb(SLATE_700, 0.15),
        selection_fg: SLATE_50,
        focus: BLUE_400,

        modal_bg: SLATE_950,
    }
}

#[derive(Debug, Clone)]
pub struct DarkTheme {
    roles: ThemeRoles,
}

impl DarkTheme {
    pub fn new() -> Self {
        Self { roles: build_dark_roles() }
    }
}

impl Default for DarkTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DarkTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
