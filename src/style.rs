use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// Threshold styling: numeric value → style tag → cell colors
// ---------------------------------------------------------------------------

/// Classification of a numeric cell against the gestiones threshold,
/// decoupled from its visual rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTag {
    Above,
    Below,
    Neutral,
}

/// Default threshold, overridable through the config file.
pub const DEFAULT_THRESHOLD: f64 = 130.0;

/// Classify `value` against `threshold`.
///
/// Equality is exact, so callers must pass real numbers, not formatted
/// strings. NaN compares neither above nor below and lands on `Neutral`.
pub fn style_threshold(value: f64, threshold: f64) -> StyleTag {
    if value > threshold {
        StyleTag::Above
    } else if value < threshold {
        StyleTag::Below
    } else {
        StyleTag::Neutral
    }
}

/// Cell paint for a style tag: `(background, text)`, or `None` for the
/// neutral case (keep the table's default colors).
pub fn cell_colors(tag: StyleTag) -> Option<(Color32, Color32)> {
    match tag {
        StyleTag::Above => Some((Color32::DARK_GREEN, Color32::WHITE)),
        StyleTag::Below => Some((Color32::YELLOW, Color32::BLACK)),
        StyleTag::Neutral => None,
    }
}
