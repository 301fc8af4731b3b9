// Fixed palette and category preferences for emissions series

use crate::color::Color;

/// Ten distinct colors available for automatic assignment, in scan order
pub const PALETTE: [&str; 10] = [
    "#E6194B", "#3CB44B", "#FFE119", "#4363D8", "#F58231",
    "#911EB4", "#46F0F0", "#F032E6", "#BCF60C", "#FABEBE",
];

/// Returned for empty or missing series names
pub const SENTINEL: &str = "#888888";

/// Category keys and the palette index each one prefers.
/// Scanned in this order; the first key found in the lowercased name wins.
pub const CATEGORY_RULES: [(&str, usize); 5] = [
    ("ecodesign", 4),
    ("fireplace", 0),
    ("gas", 3),
    ("power", 1),
    ("road", 6),
];

/// Get palette color for a specific index (wraps around if index > palette size)
pub fn palette_color(index: usize) -> Color {
    Color::new(PALETTE[index % PALETTE.len()])
}

/// Preferred color for a series name, if any category key occurs in it
pub fn category_color(name: &str) -> Option<Color> {
    let lowered = name.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(key, _)| lowered.contains(key))
        .map(|&(_, index)| palette_color(index))
}
