//! Strongly-typed numeric and colour primitives for radar layout.
//!
//! Design goals:
//! - Angles carry their unit (degrees) in the type
//! - Opacity is validated once at construction
//! - Colours are parsed up front so the renderer never sees garbage

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
    /// Value is above the allowed maximum
    TooLarge,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
            NumericError::TooLarge => write!(f, "value is too large"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Angle in degrees, measured clockwise from straight up.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    /// Angle of axis `index` when `count` axes share the full turn.
    ///
    /// Computed as one division so that e.g. index 7 of 14 is exactly 180.
    #[inline]
    pub fn of_axis(index: usize, count: usize) -> Angle {
        Angle(360.0 * index as f64 / count as f64)
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Horizontal component of the unit vector pointing along this angle.
    #[inline]
    pub fn sin(self) -> f64 {
        self.to_radians().sin()
    }

    /// Vertical component (Y-up) of the unit vector pointing along this angle.
    #[inline]
    pub fn cos(self) -> f64 {
        self.to_radians().cos()
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle { Angle(self.0 + rhs.0) }
}
impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle { Angle(self.0 - rhs.0) }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Fill opacity in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Opacity(f64);

impl Opacity {
    pub const OPAQUE: Opacity = Opacity(1.0);

    /// Create an Opacity with validation
    pub fn try_new(val: f64) -> Result<Opacity, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else if val > 1.0 {
            Err(NumericError::TooLarge)
        } else {
            Ok(Opacity(val))
        }
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Opacity::OPAQUE
    }
}

impl fmt::Display for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A paint colour as written into SVG attributes.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    /// No paint
    None,
    /// `#rrggbb`
    Rgb(u8, u8, u8),
    /// A CSS colour keyword, passed through lowercased
    Named(String),
}

impl Color {
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    /// Neutral grey used for outlines, axes and grid rings
    pub const GRID: Color = Color::Rgb(0x66, 0x66, 0x66);
}

/// Returned when a colour string is not `none`, hex, `rgb(...)` or a keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError(pub String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid colour: {:?}", self.0)
    }
}

impl std::error::Error for ColorParseError {}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("none") {
            return Ok(Color::None);
        }

        if let Some(hex) = s.strip_prefix('#') {
            let digit = |i: usize, len: usize| u8::from_str_radix(&hex[i..i + len], 16).ok();
            let parsed = if !hex.is_ascii() {
                None
            } else if hex.len() == 6 {
                Some((digit(0, 2), digit(2, 2), digit(4, 2)))
            } else if hex.len() == 3 {
                // Expand 3-digit hex: #abc -> #aabbcc
                Some((
                    digit(0, 1).map(|v| v * 17),
                    digit(1, 1).map(|v| v * 17),
                    digit(2, 1).map(|v| v * 17),
                ))
            } else {
                None
            };
            return match parsed {
                Some((Some(r), Some(g), Some(b))) => Ok(Color::Rgb(r, g, b)),
                _ => Err(ColorParseError(s.to_string())),
            };
        }

        if let Some(inner) = s.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
            let parts: Vec<&str> = inner.split(',').collect();
            if let [r, g, b] = parts.as_slice() {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    r.trim().parse::<u8>(),
                    g.trim().parse::<u8>(),
                    b.trim().parse::<u8>(),
                ) {
                    return Ok(Color::Rgb(r, g, b));
                }
            }
            return Err(ColorParseError(s.to_string()));
        }

        if !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Ok(Color::Named(s.to_ascii_lowercase()));
        }

        Err(ColorParseError(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => write!(f, "none"),
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Color::Named(s) => write!(f, "{}", s),
        }
    }
}
