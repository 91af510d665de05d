use super::tier::SizeTier;
use crate::label::LABEL_PREFIX;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

// Horizontal padding of the rendered label box, in percent units.
const LABEL_BOX_PAD: f64 = 3.0;
const LABEL_LINE_PAD: f64 = 1.0;

/// Estimated label rectangle, centered on `(x, y)`, in viewport percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Footprint {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Footprint {
    pub fn new(x: f64, y: f64, (width, height): (f64, f64)) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Axis-aligned test with every side inflated by `padding`.
    pub fn overlaps(&self, other: &Footprint, padding: f64) -> bool {
        let half_w = self.width / 2.0 + padding + other.width / 2.0 + padding;
        let half_h = self.height / 2.0 + padding + other.height / 2.0 + padding;
        (self.x - other.x).abs() < half_w && (self.y - other.y).abs() < half_h
    }
}

/// (character width, line height) per tier.
fn tier_metrics(tier: SizeTier) -> (f64, f64) {
    match tier {
        SizeTier::Xl4 => (2.5, 5.0),
        SizeTier::Xl3 => (2.0, 4.0),
        SizeTier::Xl2 => (1.6, 3.5),
        SizeTier::Xl => (1.3, 3.0),
        SizeTier::Base => (1.0, 2.5),
        SizeTier::Sm => (0.8, 2.0),
    }
}

/// Terminal-style column count of the displayed label (prefix included).
/// Wide glyphs such as CJK count as two columns.
pub fn display_columns(name: &str) -> usize {
    name.width() + LABEL_PREFIX.len_utf8()
}

/// Approximate `(width, height)` of a rendered label in viewport percent.
pub fn estimate_footprint(name: &str, tier: SizeTier) -> (f64, f64) {
    let (char_width, line_height) = tier_metrics(tier);
    let width = display_columns(name) as f64 * char_width + LABEL_BOX_PAD;
    let height = line_height + LABEL_LINE_PAD;
    (width, height)
}
