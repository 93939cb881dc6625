//! Color values for `<color=...>` tags.
//!
//! The parser never interprets a color attribute itself. It hands the raw
//! value to a [`ColorResolver`], and the resolved [`Color`] goes on to the
//! style factory. [`DefaultColorResolver`] understands the same syntax as
//! Unity rich text:
//!
//! - Hex: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! - Named: `red`, `teal`, `lightblue`, ... (case-insensitive)

use std::fmt;
use std::str::FromStr;

use nom::{
    IResult,
    bytes::complete::take_while1,
    character::complete::char,
    combinator::all_consuming,
    sequence::preceded,
};
use phf::phf_map;

use crate::error::ColorParseError;

/// An RGBA color with 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
    /// Alpha component (255 = opaque).
    pub a: u8,
}

/// Named colors accepted by rich text markup.
static NAMED_COLORS: phf::Map<&'static str, Color> = phf_map! {
    "aqua" => Color::rgb(0x00, 0xff, 0xff),
    "black" => Color::rgb(0x00, 0x00, 0x00),
    "blue" => Color::rgb(0x00, 0x00, 0xff),
    "brown" => Color::rgb(0xa5, 0x2a, 0x2a),
    "cyan" => Color::rgb(0x00, 0xff, 0xff),
    "darkblue" => Color::rgb(0x00, 0x00, 0xa0),
    "fuchsia" => Color::rgb(0xff, 0x00, 0xff),
    "green" => Color::rgb(0x00, 0x80, 0x00),
    "grey" => Color::rgb(0x80, 0x80, 0x80),
    "gray" => Color::rgb(0x80, 0x80, 0x80),
    "lightblue" => Color::rgb(0xad, 0xd8, 0xe6),
    "lime" => Color::rgb(0x00, 0xff, 0x00),
    "magenta" => Color::rgb(0xff, 0x00, 0xff),
    "maroon" => Color::rgb(0x80, 0x00, 0x00),
    "navy" => Color::rgb(0x00, 0x00, 0x80),
    "olive" => Color::rgb(0x80, 0x80, 0x00),
    "orange" => Color::rgb(0xff, 0xa5, 0x00),
    "purple" => Color::rgb(0x80, 0x00, 0x80),
    "red" => Color::rgb(0xff, 0x00, 0x00),
    "silver" => Color::rgb(0xc0, 0xc0, 0xc0),
    "teal" => Color::rgb(0x00, 0x80, 0x80),
    "white" => Color::rgb(0xff, 0xff, 0xff),
    "yellow" => Color::rgb(0xff, 0xff, 0x00),
};

impl Color {
    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }

    /// Create a color with an explicit alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a color from a markup attribute value.
    ///
    /// # Examples
    ///
    /// ```
    /// use richtext::Color;
    ///
    /// assert_eq!(Color::parse("#ff0000").unwrap(), Color::rgb(255, 0, 0));
    /// assert_eq!(Color::parse("#0f08").unwrap(), Color::rgba(0, 255, 0, 0x88));
    /// assert_eq!(Color::parse("Teal").unwrap(), Color::rgb(0, 128, 128));
    /// assert!(Color::parse("#12345").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();

        if input.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if input.starts_with('#') {
            return Self::parse_hex(input);
        }

        Self::parse_named(input)
    }

    /// Parse a `#`-prefixed hex color.
    fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(input.to_string());

        let (_, digits) = all_consuming(hex_digits)(input).map_err(|_| invalid())?;

        // Short forms use one digit per channel, long forms two.
        let width = match digits.len() {
            3 | 4 => 1,
            6 | 8 => 2,
            _ => return Err(invalid()),
        };

        let mut channels = [u8::MAX; 4];
        for (slot, start) in (0..digits.len()).step_by(width).enumerate() {
            let value =
                u8::from_str_radix(&digits[start..start + width], 16).map_err(|_| invalid())?;
            channels[slot] = if width == 1 { value * 17 } else { value };
        }

        let [r, g, b, a] = channels;
        Ok(Color::rgba(r, g, b, a))
    }

    fn parse_named(name: &str) -> Result<Self, ColorParseError> {
        NAMED_COLORS
            .get(name.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| ColorParseError::UnknownName(name.to_string()))
    }

    /// Returns the RGB components, dropping alpha.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Pack the color as a `0xAARRGGBB` integer.
    pub fn to_argb_u32(&self) -> u32 {
        u32::from(self.a) << 24
            | u32::from(self.r) << 16
            | u32::from(self.g) << 8
            | u32::from(self.b)
    }
}

fn hex_digits(input: &str) -> IResult<&str, &str> {
    preceded(char('#'), take_while1(|c: char| c.is_ascii_hexdigit()))(input)
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// Turns the attribute of a `<color=...>` tag into a [`Color`].
///
/// Any `Fn(&str) -> Result<Color, ColorParseError>` is a resolver, so a
/// closure can wrap [`Color::parse`] with application-specific names.
pub trait ColorResolver {
    /// Resolve a raw attribute value.
    fn resolve(&self, value: &str) -> Result<Color, ColorParseError>;
}

impl<F> ColorResolver for F
where
    F: Fn(&str) -> Result<Color, ColorParseError>,
{
    fn resolve(&self, value: &str) -> Result<Color, ColorParseError> {
        self(value)
    }
}

/// Resolves hex and named colors with [`Color::parse`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultColorResolver;

impl ColorResolver for DefaultColorResolver {
    fn resolve(&self, value: &str) -> Result<Color, ColorParseError> {
        Color::parse(value)
    }
}
