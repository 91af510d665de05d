use serde::{Deserialize, Serialize};

// Ratio floors, largest tier first.
const TIER_THRESHOLDS: [(f64, SizeTier); 5] = [
    (0.8, SizeTier::Xl4),
    (0.6, SizeTier::Xl3),
    (0.4, SizeTier::Xl2),
    (0.2, SizeTier::Xl),
    (0.1, SizeTier::Base),
];

pub const LAYER_BASE: i32 = 10;
pub const LAYER_SPAN: i32 = 10;

/// Discrete label size, smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeTier {
    Sm,
    Base,
    Xl,
    Xl2,
    Xl3,
    Xl4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenClass {
    Mobile,
    Tablet,
    Desktop,
}

impl ScreenClass {
    pub fn from_viewport_width(width: f32) -> Self {
        if width < 640.0 {
            Self::Mobile
        } else if width < 768.0 {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }
}

impl SizeTier {
    pub const ALL: [SizeTier; 6] = [
        SizeTier::Sm,
        SizeTier::Base,
        SizeTier::Xl,
        SizeTier::Xl2,
        SizeTier::Xl3,
        SizeTier::Xl4,
    ];

    pub fn smallest() -> Self {
        Self::Sm
    }

    pub fn largest() -> Self {
        Self::Xl4
    }

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Sm => "text-sm",
            Self::Base => "text-base",
            Self::Xl => "text-xl",
            Self::Xl2 => "text-2xl",
            Self::Xl3 => "text-3xl",
            Self::Xl4 => "text-4xl",
        }
    }

    pub fn from_css_class(class: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.css_class() == class)
    }

    /// Rendered font size in rem. Small screens get a compressed scale so the
    /// largest labels still fit.
    pub fn font_size_rem(self, screen: ScreenClass) -> f32 {
        let (mobile, tablet, desktop) = match self {
            Self::Xl4 => (0.875, 1.25, 2.25),
            Self::Xl3 => (0.75, 1.0, 1.875),
            Self::Xl2 => (0.6875, 0.875, 1.5),
            Self::Xl => (0.625, 0.75, 1.25),
            Self::Base => (0.5625, 0.6875, 1.0),
            Self::Sm => (0.5, 0.625, 0.875),
        };
        match screen {
            ScreenClass::Mobile => mobile,
            ScreenClass::Tablet => tablet,
            ScreenClass::Desktop => desktop,
        }
    }
}

/// Maps a usage count to a size tier relative to the largest count in the set.
pub fn compute_size_tier(count: i64, max_count: i64) -> SizeTier {
    if max_count <= 0 || count < 0 {
        return SizeTier::smallest();
    }
    if count >= max_count {
        return SizeTier::largest();
    }
    let ratio = count as f64 / max_count as f64;
    TIER_THRESHOLDS
        .iter()
        .find(|(floor, _)| ratio >= *floor)
        .map(|(_, tier)| *tier)
        .unwrap_or(SizeTier::Sm)
}

/// Stacking hint in `[base, base + span]`; heavier tags stack higher.
pub fn compute_layer(count: i64, max_count: i64, base: i32, span: i32) -> i32 {
    let span = span.max(0);
    if max_count <= 0 || count <= 0 {
        return base;
    }
    let ratio = (count as f64 / max_count as f64).min(1.0);
    let step = (ratio * span as f64).floor() as i32;
    base.saturating_add(step.clamp(0, span))
}
