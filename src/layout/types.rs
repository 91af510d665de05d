use serde::Serialize;

use super::footprint::Footprint;
use super::tier::SizeTier;

/// Final placement of one tag. `x` and `y` are percent of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub size_tier: SizeTier,
    pub layer: i32,
}

/// One tag's full placement record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TagLayout {
    pub position: Position,
    pub footprint: Footprint,
    /// True when no clean candidate was found and the last one was kept.
    pub degraded: bool,
}

/// Layout of a whole cloud, index-aligned with the input tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CloudLayout {
    pub tags: Vec<TagLayout>,
}

impl CloudLayout {
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn positions(&self) -> Vec<Position> {
        self.tags.iter().map(|tag| tag.position).collect()
    }

    pub fn footprints(&self) -> impl Iterator<Item = &Footprint> {
        self.tags.iter().map(|tag| &tag.footprint)
    }

    pub fn degraded(&self) -> usize {
        self.tags.iter().filter(|tag| tag.degraded).count()
    }

    /// Input indices ordered for painting: lower layers first, ties by input order.
    pub fn paint_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.tags.len()).collect();
        order.sort_by_key(|&idx| self.tags[idx].position.layer);
        order
    }
}
