use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_debug: ColorSpec,
    pub footer_restart: ColorSpec,
    pub footer_normal: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Theme {
    /// Get the default theme (Deep Sea).
    ///
    pub fn default() -> Self {
        Self::deep_sea()
    }

    /// Deep Sea theme.
    ///
    pub fn deep_sea() -> Self {
        Theme {
            name: "deep-sea".to_string(),
            primary: ColorSpec {
                r: 86,
                g: 182,
                b: 255,
            }, // Light blue
            secondary: ColorSpec {
                r: 64,
                g: 224,
                b: 208,
            }, // Turquoise
            accent: ColorSpec {
                r: 255,
                g: 184,
                b: 108,
            }, // Sand
            banner: ColorSpec {
                r: 86,
                g: 182,
                b: 255,
            }, // Light blue
            text: ColorSpec {
                r: 205,
                g: 214,
                b: 244,
            }, // Foam
            text_secondary: ColorSpec {
                r: 148,
                g: 163,
                b: 184,
            }, // Mist
            text_muted: ColorSpec {
                r: 100,
                g: 116,
                b: 139,
            }, // Slate
            background: ColorSpec {
                r: 13,
                g: 27,
                b: 42,
            }, // Abyss
            surface: ColorSpec {
                r: 27,
                g: 38,
                b: 59,
            }, // Depth
            success: ColorSpec {
                r: 80,
                g: 250,
                b: 123,
            }, // Green
            warning: ColorSpec {
                r: 241,
                g: 250,
                b: 140,
            }, // Yellow
            error: ColorSpec {
                r: 255,
                g: 85,
                b: 85,
            }, // Red
            info: ColorSpec {
                r: 139,
                g: 233,
                b: 253,
            }, // Cyan
            border_active: ColorSpec {
                r: 86,
                g: 182,
                b: 255,
            }, // Light blue
            border_normal: ColorSpec {
                r: 65,
                g: 90,
                b: 119,
            }, // Shoal
            highlight_bg: ColorSpec {
                r: 86,
                g: 182,
                b: 255,
            }, // Light blue
            highlight_fg: ColorSpec {
                r: 13,
                g: 27,
                b: 42,
            }, // Abyss
            footer_debug: ColorSpec {
                r: 80,
                g: 250,
                b: 123,
            }, // Green
            footer_restart: ColorSpec {
                r: 255,
                g: 85,
                b: 85,
            }, // Red
            footer_normal: ColorSpec {
                r: 148,
                g: 163,
                b: 184,
            }, // Mist
        }
    }

    /// Arctic theme.
    ///
    pub fn arctic() -> Self {
        Theme {
            name: "arctic".to_string(),
            primary: ColorSpec {
                r: 46,
                g: 117,
                b: 182,
            }, // Blue
            secondary: ColorSpec {
                r: 0,
                g: 150,
                b: 136,
            }, // Teal
            accent: ColorSpec {
                r: 216,
                g: 27,
                b: 96,
            }, // Berry
            banner: ColorSpec {
                r: 46,
                g: 117,
                b: 182,
            }, // Blue
            text: ColorSpec {
                r: 46,
                g: 52,
                b: 64,
            }, // Polar night
            text_secondary: ColorSpec {
                r: 76,
                g: 86,
                b: 106,
            }, // Slate
            text_muted: ColorSpec {
                r: 144,
                g: 153,
                b: 170,
            }, // Muted
            background: ColorSpec {
                r: 236,
                g: 239,
                b: 244,
            }, // Snow
            surface: ColorSpec {
                r: 229,
                g: 233,
                b: 240,
            }, // Frost
            success: ColorSpec {
                r: 56,
                g: 142,
                b: 60,
            }, // Green
            warning: ColorSpec {
                r: 235,
                g: 203,
                b: 139,
            }, // Amber
            error: ColorSpec {
                r: 191,
                g: 97,
                b: 106,
            }, // Red
            info: ColorSpec {
                r: 94,
                g: 129,
                b: 172,
            }, // Blue grey
            border_active: ColorSpec {
                r: 46,
                g: 117,
                b: 182,
            }, // Blue
            border_normal: ColorSpec {
                r: 129,
                g: 161,
                b: 193,
            }, // Glacier
            highlight_bg: ColorSpec {
                r: 136,
                g: 192,
                b: 208,
            }, // Ice
            highlight_fg: ColorSpec {
                r: 46,
                g: 52,
                b: 64,
            }, // Polar night
            footer_debug: ColorSpec {
                r: 56,
                g: 142,
                b: 60,
            }, // Green
            footer_restart: ColorSpec {
                r: 191,
                g: 97,
                b: 106,
            }, // Red
            footer_normal: ColorSpec {
                r: 76,
                g: 86,
                b: 106,
            }, // Slate
        }
    }

    /// Lagoon theme.
    ///
    pub fn lagoon() -> Self {
        Theme {
            name: "lagoon".to_string(),
            primary: ColorSpec {
                r: 38,
                g: 166,
                b: 154,
            }, // Teal
            secondary: ColorSpec {
                r: 129,
                g: 199,
                b: 132,
            }, // Green
            accent: ColorSpec {
                r: 255,
                g: 138,
                b: 101,
            }, // Coral
            banner: ColorSpec {
                r: 38,
                g: 166,
                b: 154,
            }, // Teal
            text: ColorSpec {
                r: 224,
                g: 242,
                b: 241,
            }, // Sea foam
            text_secondary: ColorSpec {
                r: 178,
                g: 223,
                b: 219,
            }, // Shallows
            text_muted: ColorSpec {
                r: 96,
                g: 125,
                b: 139,
            }, // Stone
            background: ColorSpec {
                r: 0,
                g: 43,
                b: 54,
            }, // Deep water
            surface: ColorSpec {
                r: 7,
                g: 54,
                b: 66,
            }, // Reef
            success: ColorSpec {
                r: 129,
                g: 199,
                b: 132,
            }, // Green
            warning: ColorSpec {
                r: 255,
                g: 213,
                b: 79,
            }, // Yellow
            error: ColorSpec {
                r: 239,
                g: 83,
                b: 80,
            }, // Red
            info: ColorSpec {
                r: 79,
                g: 195,
                b: 247,
            }, // Sky
            border_active: ColorSpec {
                r: 38,
                g: 166,
                b: 154,
            }, // Teal
            border_normal: ColorSpec {
                r: 88,
                g: 110,
                b: 117,
            }, // Stone
            highlight_bg: ColorSpec {
                r: 38,
                g: 166,
                b: 154,
            }, // Teal
            highlight_fg: ColorSpec {
                r: 0,
                g: 43,
                b: 54,
            }, // Deep water
            footer_debug: ColorSpec {
                r: 129,
                g: 199,
                b: 132,
            }, // Green
            footer_restart: ColorSpec {
                r: 239,
                g: 83,
                b: 80,
            }, // Red
            footer_normal: ColorSpec {
                r: 178,
                g: 223,
                b: 219,
            }, // Shallows
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "deep-sea" => Some(Self::deep_sea()),
            "arctic" => Some(Self::arctic()),
            "lagoon" => Some(Self::lagoon()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "deep-sea".to_string(),
            "arctic".to_string(),
            "lagoon".to_string(),
        ]
    }
}
