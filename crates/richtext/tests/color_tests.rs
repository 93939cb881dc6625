//! Comprehensive tests for the Color type and the default resolver.

use richtext::{Color, ColorParseError, ColorResolver, DefaultColorResolver};

// ============================================================================
// Named Colors
// ============================================================================

#[test]
fn parse_named_colors() {
    let colors = [
        "aqua", "black", "blue", "brown", "cyan", "darkblue", "fuchsia", "green", "grey",
        "lightblue", "lime", "magenta", "maroon", "navy", "olive", "orange", "purple", "red",
        "silver", "teal", "white", "yellow",
    ];

    for color in colors {
        let parsed = Color::parse(color);
        assert!(parsed.is_ok(), "Failed to parse: {}", color);
        assert_eq!(parsed.unwrap().a, 255, "Named color should be opaque: {}", color);
    }
}

#[test]
fn parse_named_values() {
    assert_eq!(Color::parse("darkblue").unwrap(), Color::rgb(0, 0, 160));
    assert_eq!(Color::parse("lightblue").unwrap(), Color::rgb(173, 216, 230));
    assert_eq!(Color::parse("grey").unwrap(), Color::parse("gray").unwrap());
    assert_eq!(Color::parse("aqua").unwrap(), Color::parse("cyan").unwrap());
}

#[test]
fn parse_case_insensitive() {
    assert_eq!(Color::parse("RED").unwrap(), Color::rgb(255, 0, 0));
    assert_eq!(Color::parse("Red").unwrap(), Color::rgb(255, 0, 0));
    assert_eq!(Color::parse("rEd").unwrap(), Color::rgb(255, 0, 0));
}

#[test]
fn parse_with_whitespace() {
    assert_eq!(Color::parse("  red  ").unwrap(), Color::rgb(255, 0, 0));
    assert_eq!(Color::parse("\t#00f\t").unwrap(), Color::rgb(0, 0, 255));
}

#[test]
fn parse_unknown_name() {
    assert_eq!(
        Color::parse("chartreuse"),
        Err(ColorParseError::UnknownName("chartreuse".to_string()))
    );
}

// ============================================================================
// Hex Colors
// ============================================================================

#[test]
fn parse_hex_forms() {
    assert_eq!(Color::parse("#abc").unwrap(), Color::rgb(0xaa, 0xbb, 0xcc));
    assert_eq!(
        Color::parse("#abcd").unwrap(),
        Color::rgba(0xaa, 0xbb, 0xcc, 0xdd)
    );
    assert_eq!(Color::parse("#a1b2c3").unwrap(), Color::rgb(0xa1, 0xb2, 0xc3));
    assert_eq!(
        Color::parse("#A1B2C3D4").unwrap(),
        Color::rgba(0xa1, 0xb2, 0xc3, 0xd4)
    );
}

#[test]
fn parse_hex_bad_lengths() {
    for value in ["#", "#1", "#12", "#12345", "#1234567", "#123456789"] {
        assert!(
            matches!(Color::parse(value), Err(ColorParseError::InvalidHex(_))),
            "Should reject: {}",
            value
        );
    }
}

#[test]
fn parse_hex_bad_digits() {
    assert!(matches!(
        Color::parse("#12345g"),
        Err(ColorParseError::InvalidHex(_))
    ));
    assert!(matches!(
        Color::parse("# 123456"),
        Err(ColorParseError::InvalidHex(_))
    ));
}

#[test]
fn from_str() {
    let color: Color = "#102030".parse().unwrap();
    assert_eq!(color, Color::rgb(16, 32, 48));
    assert!("".parse::<Color>().is_err());
}

// ============================================================================
// Resolver
// ============================================================================

#[test]
fn default_resolver_matches_parse() {
    let resolver = DefaultColorResolver;
    assert_eq!(resolver.resolve("#ff0000"), Color::parse("#ff0000"));
    assert_eq!(resolver.resolve("bogus"), Color::parse("bogus"));
}

#[test]
fn error_messages() {
    assert_eq!(ColorParseError::Empty.to_string(), "empty color value");
    assert_eq!(
        Color::parse("#12").unwrap_err().to_string(),
        "invalid hex color: #12"
    );
    assert_eq!(
        Color::parse("bogus").unwrap_err().to_string(),
        "unknown color name: bogus"
    );
}
