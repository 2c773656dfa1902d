//! Unit conversion and trend-arrow lookup for glucose values.

/// mg/dL → mmol/L multiplier.
pub const MMOL_L_CONVERSION_FACTOR: f64 = 0.0555;

/// Trend code → arrow glyph.
pub(crate) static TREND_ARROWS: [(&str, &str); 9] = [
    ("DoubleUp", "↑↑"),
    ("SingleUp", "↑"),
    ("FortyFiveUp", "↗"),
    ("Flat", "→"),
    ("FortyFiveDown", "↘"),
    ("SingleDown", "↓"),
    ("DoubleDown", "↓↓"),
    ("NotComputable", "?"),
    ("RateOutOfRange", "-"),
];

/// Convert a mg/dL value to mmol/L, rounded half-up to one decimal place.
///
/// Glucose values are never negative; the result for negative input is not meaningful.
#[must_use]
pub fn convert_to_mmol(mg_dl: i32) -> f64 {
    let mmol = f64::from(mg_dl) * MMOL_L_CONVERSION_FACTOR;
    (mmol * 10.0 + 0.5).trunc() / 10.0
}

/// Look up the arrow glyph for a Dexcom trend code. Unknown codes yield `None`.
#[must_use]
pub fn trend_arrow(code: &str) -> Option<&'static str> {
    TREND_ARROWS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, arrow)| *arrow)
}
