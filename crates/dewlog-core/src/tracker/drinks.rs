//! Hydration-equivalence factors per drink type.
//!
//! Negative factors model diuretic drinks: logging them reduces the day's
//! progress, with no floor. The table is fixed at build time and is not
//! part of the persisted state.

pub const DRINK_FACTORS: &[(&str, f64)] = &[
    ("Water", 1.0),
    ("Juice", 0.95),
    ("Coconut Water", 0.9),
    ("Smoothie", 0.7),
    ("Soda", 0.8),
    ("Milkshake", 0.8),
    ("Milk", 1.3),
    ("Skim/Almond/Oat/Soy Milk", 0.9),
    ("Yogurt", 0.7),
    ("Tea", 0.9),
    ("Decaf Coffee", 0.9),
    ("Coffee", 0.6),
    ("Hot Chocolate", 0.8),
    ("Beer", -0.4),
    ("Wine", -0.95),
    ("Shot", -1.59),
    ("Whiskey/Brandy/Tequila/Gin/Rum", -3.18),
];

/// Hydration factor for a drink label. Unknown types count as plain water.
pub fn factor(drink_type: &str) -> f64 {
    DRINK_FACTORS
        .iter()
        .find(|(name, _)| *name == drink_type)
        .map(|(_, f)| *f)
        .unwrap_or(1.0)
}
