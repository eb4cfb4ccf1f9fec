//! Style model - colors, visibility flags and the paint state derived from them

use std::str::FromStr;

use thiserror::Error;

use crate::geometry::HandSelection;

/// Blur radius of the face shadow, in density-independent pixels
pub const SHADOW_RADIUS_DP: f32 = 15.0;
/// Width of the optional border rectangle, in density-independent pixels
pub const BORDER_STROKE_DP: f32 = 1.0;
/// Default label text size in pixels
pub const DEFAULT_LABEL_TEXT_SIZE: f32 = 25.0;

/// An sRGB color with straight alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const DARK_GRAY: Color = Color::rgb(0x44, 0x44, 0x44);
    pub const SHADOW: Color = Color::argb(0x20, 0, 0, 0);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::argb(255, red, green, blue)
    }

    pub const fn argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Pack as 0xAARRGGBB
    pub fn to_argb_u32(self) -> u32 {
        u32::from_be_bytes([self.alpha, self.red, self.green, self.blue])
    }

    pub fn from_argb_u32(value: u32) -> Self {
        let [alpha, red, green, blue] = value.to_be_bytes();
        Self::argb(alpha, red, green, blue)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color {0:?}: expected #RRGGBB or #AARRGGBB")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse "#RRGGBB" (opaque) or "#AARRGGBB"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| err())?;
        match hex.len() {
            6 => Ok(Self::from_argb_u32(0xFF00_0000 | value)),
            8 => Ok(Self::from_argb_u32(value)),
            _ => Err(err()),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08X}", self.to_argb_u32())
    }
}

/// Display density used to convert density-independent pixels to pixels
///
/// `Density::UNKNOWN` converts every length to zero pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density(Option<f32>);

impl Density {
    pub const UNKNOWN: Density = Density(None);

    pub fn new(scale: f32) -> Self {
        Self(Some(scale))
    }

    pub fn scale(self) -> Option<f32> {
        self.0.filter(|s| s.is_finite() && *s > 0.0)
    }

    /// Round `dp` to whole device pixels
    pub fn dp_to_px(self, dp: f32) -> f32 {
        match self.scale() {
            Some(scale) => (dp * scale + 0.5).trunc(),
            None => 0.0,
        }
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Colors, visibility flags and text size for one draw pass
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    pub background_color: Color,
    pub circles_color: Color,
    pub arrows_color: Color,
    pub hour_labels_color: Color,
    pub shadow_color: Color,
    pub show_hour_arrow: bool,
    pub show_minute_arrow: bool,
    pub show_second_arrow: bool,
    pub show_hour_labels: bool,
    pub show_circles: bool,
    pub show_shadow: bool,
    pub show_rectangle: bool,
    /// Label text size in pixels
    pub label_text_size: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            circles_color: Color::DARK_GRAY,
            arrows_color: Color::DARK_GRAY,
            hour_labels_color: Color::DARK_GRAY,
            shadow_color: Color::SHADOW,
            show_hour_arrow: true,
            show_minute_arrow: true,
            show_second_arrow: false,
            show_hour_labels: true,
            show_circles: true,
            show_shadow: true,
            show_rectangle: false,
            label_text_size: DEFAULT_LABEL_TEXT_SIZE,
        }
    }
}

impl StyleConfig {
    /// Hands whose visibility flag is on
    pub fn visible_hands(&self) -> HandSelection {
        HandSelection {
            hour: self.show_hour_arrow,
            minute: self.show_minute_arrow,
            second: self.show_second_arrow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePaint {
    pub color: Color,
    /// Stroke width in pixels; 0 draws a hairline
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowPaint {
    pub color: Color,
    /// Outer blur radius in pixels
    pub blur_radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPaint {
    pub color: Color,
    /// Text size in pixels
    pub size: f32,
}

/// Paint state derived from a [`StyleConfig`] and display density
///
/// Cached by the view and rebuilt whenever the style or density changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Paints {
    pub background: Color,
    pub shadow: ShadowPaint,
    pub circles: StrokePaint,
    pub border: StrokePaint,
    pub arrows: Color,
    pub labels: TextPaint,
}

impl Paints {
    pub fn from_style(style: &StyleConfig, density: Density) -> Self {
        Self {
            background: style.background_color,
            shadow: ShadowPaint {
                color: style.shadow_color,
                blur_radius: density.dp_to_px(SHADOW_RADIUS_DP),
            },
            circles: StrokePaint {
                color: style.circles_color,
                width: 0.0,
            },
            border: StrokePaint {
                color: style.circles_color,
                width: density.dp_to_px(BORDER_STROKE_DP),
            },
            arrows: style.arrows_color,
            labels: TextPaint {
                color: style.hour_labels_color,
                size: style.label_text_size,
            },
        }
    }
}
