// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

use crate::config::{Config, ConfigError, PALETTE_ENV};

/// Palette slots in `NAIAD_PALETTE` order: foreground, background, then the 16 ANSI colors.
const SLOTS: [&str; 18] = [
    "fg", "bg", "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
    "bright_black", "bright_red", "bright_green", "bright_yellow", "bright_blue",
    "bright_magenta", "bright_cyan", "bright_white",
];

const BLACK: usize = 0;
const RED: usize = 1;
const GREEN: usize = 2;
const YELLOW: usize = 3;
const BRIGHT_BLACK: usize = 8;

/// Terminal defaults used when no palette is configured.
const DEFAULT_ANSI: [Color; 16] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::Gray,
    Color::DarkGray,
    Color::LightRed,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightBlue,
    Color::LightMagenta,
    Color::LightCyan,
    Color::White,
];

#[derive(Debug, Clone, Default)]
pub struct TuiTheme {
    palette: Option<Palette>,
}

impl TuiTheme {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let palette = config
            .palette()
            .map(|value| {
                value.parse::<Palette>().map_err(|error| ConfigError::InvalidEnv {
                    name: PALETTE_ENV.to_owned(),
                    value: format!("{value} ({error})"),
                })
            })
            .transpose()?;
        Ok(Self { palette })
    }

    pub(crate) fn base_style(&self) -> Style {
        match &self.palette {
            Some(palette) => Style::default().fg(palette.fg).bg(palette.bg),
            None => Style::default(),
        }
    }

    fn ansi(&self, idx: usize) -> Color {
        self.palette.as_ref().map_or(DEFAULT_ANSI[idx], |palette| palette.ansi[idx])
    }

    pub(crate) fn prompt_style(&self) -> Style {
        self.base_style().fg(self.ansi(GREEN)).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn selection_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    /// The document the user is currently looking at.
    pub(crate) fn current_style(&self) -> Style {
        self.base_style().fg(self.ansi(YELLOW)).add_modifier(Modifier::UNDERLINED)
    }

    /// `-- NO MATCHES --` / `-- TRUNCATED --` rows.
    pub(crate) fn marker_style(&self) -> Style {
        self.base_style().fg(self.ansi(BRIGHT_BLACK)).add_modifier(Modifier::ITALIC)
    }

    pub(crate) fn highlight_style(&self) -> Style {
        self.base_style()
            .fg(self.ansi(BLACK))
            .bg(self.ansi(YELLOW))
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn error_style(&self) -> Style {
        self.base_style().fg(self.ansi(RED))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PaletteError {
    SlotCount { found: usize },
    Color { slot: &'static str, value: String },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SlotCount { found } => {
                let slots = SLOTS.join(",");
                write!(f, "expected {} comma-separated colors ({slots}), got {found}", SLOTS.len())
            }
            Self::Color { slot, value } => {
                write!(f, "invalid {slot} color {value:?} (expected #RRGGBB or rgb:R/G/B)")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Palette {
    fg: Color,
    bg: Color,
    ansi: [Color; 16],
}

impl FromStr for Palette {
    type Err = PaletteError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parts = value.split(',').collect::<Vec<_>>();
        if parts.len() != SLOTS.len() {
            return Err(PaletteError::SlotCount { found: parts.len() });
        }

        let mut colors = [Color::Reset; 18];
        for ((color, part), slot) in colors.iter_mut().zip(&parts).zip(SLOTS) {
            *color = parse_color(part)
                .ok_or_else(|| PaletteError::Color { slot, value: part.trim().to_owned() })?;
        }

        let [fg, bg, ansi @ ..] = colors;
        Ok(Self { fg, bg, ansi })
    }
}

/// `#RRGGBB`, bare `RRGGBB`, or xterm `rgb:R/G/B` with 1 to 4 hex digits per channel.
fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Some(channels) = value.strip_prefix("rgb:").or_else(|| value.strip_prefix("RGB:")) {
        let mut channels = channels.split('/').map(scale_channel);
        let color = Color::Rgb(channels.next()??, channels.next()??, channels.next()??);
        return channels.next().is_none().then_some(color);
    }

    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }
    let [_, r, g, b] = u32::from_str_radix(hex, 16).ok()?.to_be_bytes();
    Some(Color::Rgb(r, g, b))
}

/// Scales an xterm channel of 1 to 4 hex digits to 8 bits.
fn scale_channel(digits: &str) -> Option<u8> {
    if !(1..=4).contains(&digits.len()) || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    let max = (1u32 << (4 * digits.len())) - 1;
    u8::try_from((value * 255 + max / 2) / max).ok()
}

#[cfg(test)]
mod tests {
    use std::env::VarError;

    use ratatui::style::Color;
    use rstest::rstest;

    use super::{parse_color, Palette, PaletteError, TuiTheme};
    use crate::config::Config;

    const PALETTE: &str = "#111111,#222222,#000000,#ff0000,#00ff00,#ffff00,#0000ff,#ff00ff,#00ffff,#ffffff,#1a1a1a,#ff1111,#11ff11,#ffff11,#1111ff,#ff11ff,#11ffff,#fefefe";

    fn config_with_palette(value: &str) -> Config {
        Config::from_lookup(|name| match name {
            "NAIAD_PALETTE" => Ok(value.to_owned()),
            _ => Err(VarError::NotPresent),
        })
        .expect("config")
    }

    #[test]
    fn palette_parses_all_slots() {
        let palette: Palette = PALETTE.parse().expect("palette");
        assert_eq!(palette.fg, Color::Rgb(0x11, 0x11, 0x11));
        assert_eq!(palette.bg, Color::Rgb(0x22, 0x22, 0x22));
        assert_eq!(palette.ansi[1], Color::Rgb(0xff, 0, 0));
        assert_eq!(palette.ansi[15], Color::Rgb(0xfe, 0xfe, 0xfe));
    }

    #[rstest]
    #[case("#FF8000", Some(Color::Rgb(0xff, 0x80, 0x00)))]
    #[case(" 0a0b0c ", Some(Color::Rgb(0x0a, 0x0b, 0x0c)))]
    #[case("rgb:ffff/80/00", Some(Color::Rgb(0xff, 0x80, 0x00)))]
    #[case("rgb:f/8/0", Some(Color::Rgb(0xff, 0x88, 0x00)))]
    #[case("rgb:ff/ff", None)]
    #[case("rgb:ff/ff/ff/ff", None)]
    #[case("rgb:fffff/0/0", None)]
    #[case("rgb:+f/0/0", None)]
    #[case("#12345", None)]
    #[case("#zzzzzz", None)]
    #[case("", None)]
    fn colors_accept_hex_and_xterm_forms(#[case] value: &str, #[case] expected: Option<Color>) {
        assert_eq!(parse_color(value), expected);
    }

    #[test]
    fn palette_errors_name_the_problem() {
        assert_eq!("nope".parse::<Palette>(), Err(PaletteError::SlotCount { found: 1 }));

        let csv = PALETTE.replacen("#ff0000", "crimson", 1);
        let err = csv.parse::<Palette>().unwrap_err();
        assert_eq!(err, PaletteError::Color { slot: "red", value: "crimson".to_owned() });
        assert!(err.to_string().starts_with("invalid red color"));
    }

    #[test]
    fn theme_reports_invalid_palette_env() {
        let err = TuiTheme::from_config(&config_with_palette("#zzzzzz")).unwrap_err();
        assert!(err.to_string().starts_with("invalid env NAIAD_PALETTE=#zzzzzz"));
    }

    #[test]
    fn palette_colors_flow_into_styles() {
        let theme = TuiTheme::from_config(&config_with_palette(PALETTE)).expect("theme");
        assert_eq!(theme.error_style().fg, Some(Color::Rgb(0xff, 0, 0)));
        assert_eq!(theme.highlight_style().bg, Some(Color::Rgb(0xff, 0xff, 0)));
        assert_eq!(theme.base_style().bg, Some(Color::Rgb(0x22, 0x22, 0x22)));
        assert_eq!(TuiTheme::default().prompt_style().fg, Some(Color::Green));
    }
}
