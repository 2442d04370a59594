//! Utility functions for colors and geometry.

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "white", "black", "paper"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "paper" => Some(PAPER),
        _ => None,
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Euclidean distance between two points.
pub fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

/// Parses a `WIDTHxHEIGHT` viewport string such as `"1280x720"`.
pub fn parse_size(value: &str) -> Option<(u32, u32)> {
    let (w, h) = value.trim().split_once(['x', 'X'])?;
    let width = w.trim().parse::<u32>().ok()?;
    let height = h.trim().parse::<u32>().ok()?;
    if width == 0 || height == 0 {
        return None;
    }
    Some((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_color_mapping() {
        assert_eq!(name_to_color("White").unwrap(), WHITE);
        assert_eq!(name_to_color("black").unwrap(), BLACK);
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance((0.0, 0.0), (3.0, 4.0)), 5.0);
        assert_eq!(distance((2.0, 2.0), (2.0, 2.0)), 0.0);
    }

    #[test]
    fn parse_size_accepts_width_by_height() {
        assert_eq!(parse_size("800x600"), Some((800, 600)));
        assert_eq!(parse_size(" 1920X1080 "), Some((1920, 1080)));
        assert_eq!(parse_size("0x600"), None);
        assert_eq!(parse_size("800"), None);
        assert_eq!(parse_size("axb"), None);
    }
}
