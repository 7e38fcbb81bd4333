// ============================================================
// THEME PALETTES
// ============================================================
// Named HSL palettes plus the hex conversions the color pickers need

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HEX_COLOR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^#?([a-f\d]{2})([a-f\d]{2})([a-f\d]{2})$").unwrap());

/// One color palette. Every slot is an HSL triplet string, e.g. `"240 21% 15%"`,
/// matching the CSS custom properties the frontend injects.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeColors {
    pub background: String,
    pub foreground: String,
    pub card: String,
    #[serde(rename = "card-foreground")]
    pub card_foreground: String,
    pub primary: String,
    #[serde(rename = "primary-foreground")]
    pub primary_foreground: String,
    pub secondary: String,
    #[serde(rename = "secondary-foreground")]
    pub secondary_foreground: String,
    pub muted: String,
    #[serde(rename = "muted-foreground")]
    pub muted_foreground: String,
    pub accent: String,
    #[serde(rename = "accent-foreground")]
    pub accent_foreground: String,
    pub border: String,
    pub input: String,
    pub ring: String,
    #[serde(rename = "result-bg")]
    pub result_bg: String,
    #[serde(rename = "result-hover")]
    pub result_hover: String,
    #[serde(rename = "result-foreground")]
    pub result_foreground: String,
}

/// The persisted theme is simply the active palette.
pub type ThemeSettings = ThemeColors;

impl Default for ThemeColors {
    fn default() -> Self {
        ThemeColors::preset("Catppuccin Mocha").expect("built-in preset")
    }
}

impl ThemeColors {
    pub fn preset_names() -> &'static [&'static str] {
        &[
            "Catppuccin Mocha",
            "Gruvbox Dark",
            "Dracula+",
            "Neon Hacker",
        ]
    }

    pub fn preset(name: &str) -> Option<ThemeColors> {
        let palette = |slots: [&str; 18]| ThemeColors {
            background: slots[0].to_string(),
            foreground: slots[1].to_string(),
            card: slots[2].to_string(),
            card_foreground: slots[3].to_string(),
            primary: slots[4].to_string(),
            primary_foreground: slots[5].to_string(),
            secondary: slots[6].to_string(),
            secondary_foreground: slots[7].to_string(),
            muted: slots[8].to_string(),
            muted_foreground: slots[9].to_string(),
            accent: slots[10].to_string(),
            accent_foreground: slots[11].to_string(),
            border: slots[12].to_string(),
            input: slots[13].to_string(),
            ring: slots[14].to_string(),
            result_bg: slots[15].to_string(),
            result_hover: slots[16].to_string(),
            result_foreground: slots[17].to_string(),
        };

        match name {
            "Catppuccin Mocha" => Some(palette([
                "240 21% 15%",
                "227 68% 88%",
                "240 21% 18%",
                "227 68% 88%",
                "197 97% 75%",
                "240 21% 15%",
                "249 15% 28%",
                "227 68% 88%",
                "240 21% 22%",
                "228 17% 64%",
                "115 54% 76%",
                "240 21% 15%",
                "249 15% 28%",
                "249 15% 28%",
                "197 97% 75%",
                "197 97% 75%",
                "115 54% 76%",
                "240 21% 15%",
            ])),
            "Gruvbox Dark" => Some(palette([
                "0 0% 16%",
                "35 26% 91%",
                "0 0% 20%",
                "35 26% 91%",
                "39 67% 69%",
                "0 0% 16%",
                "0 0% 27%",
                "35 26% 91%",
                "0 0% 24%",
                "35 16% 65%",
                "142 45% 58%",
                "0 0% 16%",
                "0 0% 27%",
                "0 0% 27%",
                "39 67% 69%",
                "39 67% 69%",
                "142 45% 58%",
                "0 0% 16%",
            ])),
            "Dracula+" => Some(palette([
                "231 15% 18%",
                "60 30% 96%",
                "232 14% 22%",
                "60 30% 96%",
                "265 89% 78%",
                "231 15% 18%",
                "232 14% 31%",
                "60 30% 96%",
                "231 15% 26%",
                "233 15% 59%",
                "326 100% 74%",
                "231 15% 18%",
                "232 14% 31%",
                "232 14% 31%",
                "265 89% 78%",
                "265 89% 78%",
                "326 100% 74%",
                "231 15% 18%",
            ])),
            "Neon Hacker" => Some(palette([
                "0 0% 5%",
                "120 100% 75%",
                "0 0% 8%",
                "120 100% 75%",
                "120 100% 50%",
                "0 0% 5%",
                "0 0% 15%",
                "120 100% 75%",
                "0 0% 12%",
                "120 50% 50%",
                "180 100% 50%",
                "0 0% 5%",
                "120 100% 30%",
                "0 0% 15%",
                "120 100% 50%",
                "120 100% 85%",
                "180 100% 85%",
                "0 0% 5%",
            ])),
            _ => None,
        }
    }
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Convert an HSL triplet string (`"h s% l%"`) to a `#rrggbb` hex color.
///
/// Malformed triplets fall back to black rather than erroring; palettes are
/// user-editable text.
pub fn hsl_to_hex(hsl: &str) -> String {
    let mut parts = hsl.split_whitespace().map(|part| {
        part.trim_end_matches('%')
            .parse::<f64>()
            .unwrap_or_default()
    });
    let h = parts.next().unwrap_or_default() / 360.0;
    let s = parts.next().unwrap_or_default() / 100.0;
    let l = parts.next().unwrap_or_default() / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    let channel = |x: f64| (x * 255.0).round() as u8;
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}

/// Convert a `#rrggbb` hex color to an HSL triplet string (`"h s% l%"`).
///
/// Invalid input yields `"0 0% 0%"`.
pub fn hex_to_hsl(hex: &str) -> String {
    let captures = match HEX_COLOR_PATTERN.captures(hex.trim()) {
        Some(captures) => captures,
        None => return "0 0% 0%".to_string(),
    };
    let channel = |idx: usize| {
        u8::from_str_radix(&captures[idx], 16).unwrap_or_default() as f64 / 255.0
    };
    let r = channel(1);
    let g = channel(2);
    let b = channel(3);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };
        (h, s)
    };

    format!(
        "{} {}% {}%",
        (h * 360.0).round() as i64,
        (s * 100.0).round() as i64,
        (l * 100.0).round() as i64
    )
}
