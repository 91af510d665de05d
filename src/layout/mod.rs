mod footprint;
mod placement;
mod sampler;
mod tier;
pub(crate) mod types;

pub use footprint::{Footprint, display_columns, estimate_footprint};
pub use sampler::{Axis, PositionSampler, hash_name, sample_unit, seeded_unit};
pub use tier::{LAYER_BASE, LAYER_SPAN, ScreenClass, SizeTier, compute_layer, compute_size_tier};
pub use types::*;

use crate::config::LayoutConfig;
use crate::ir::Tag;

/// Lays out `tags` with the default geometry. One position per tag, in input
/// order.
pub fn layout_tags(tags: &[Tag]) -> Vec<Position> {
    layout_tags_with_config(tags, &LayoutConfig::default())
}

pub fn layout_tags_with_config(tags: &[Tag], config: &LayoutConfig) -> Vec<Position> {
    compute_layout(tags, config).positions()
}

/// Full placement pass: tier, footprint estimate, collision-avoiding
/// placement, then reassembly into input order. Never fails; tags that find
/// no clear spot keep their last candidate and are flagged `degraded`.
pub fn compute_layout(tags: &[Tag], config: &LayoutConfig) -> CloudLayout {
    let config = config.sanitized();
    let _span = tracing::debug_span!("layout_tags", tags = tags.len()).entered();
    let layout = CloudLayout {
        tags: placement::place_tags(tags, &config),
    };
    let degraded = layout.degraded();
    if degraded > 0 {
        tracing::debug!(degraded, total = layout.len(), "layout finished with overlaps");
    }
    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tags() -> Vec<Tag> {
        vec![
            Tag::new("react", 10),
            Tag::new("css", 2),
            Tag::new("go", 0),
        ]
    }

    #[test]
    fn end_to_end_example() {
        let positions = layout_tags(&sample_tags());
        assert_eq!(positions.len(), 3);
        assert_eq!(positions[0].size_tier, SizeTier::largest());
        assert_eq!(positions[0].layer, 20);
        assert_eq!(positions[2].size_tier, SizeTier::smallest());
        for pos in &positions {
            assert!((8.0..=92.0).contains(&pos.x), "x={}", pos.x);
            assert!((8.0..=92.0).contains(&pos.y), "y={}", pos.y);
        }

        let layout = compute_layout(&sample_tags(), &LayoutConfig::default());
        if layout.degraded() == 0 {
            let footprints: Vec<&Footprint> = layout.footprints().collect();
            for i in 0..footprints.len() {
                for j in (i + 1)..footprints.len() {
                    assert!(!footprints[i].overlaps(footprints[j], 2.0));
                }
            }
        }
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let a = layout_tags(&sample_tags());
        let b = layout_tags(&sample_tags());
        for (pa, pb) in a.iter().zip(&b) {
            assert_eq!(pa.x.to_bits(), pb.x.to_bits());
            assert_eq!(pa.y.to_bits(), pb.y.to_bits());
            assert_eq!(pa.size_tier, pb.size_tier);
            assert_eq!(pa.layer, pb.layer);
        }
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(layout_tags(&[]).is_empty());
        assert!(compute_layout(&[], &LayoutConfig::default()).is_empty());
    }

    #[test]
    fn paint_order_puts_heavy_tags_last() {
        let layout = compute_layout(&sample_tags(), &LayoutConfig::default());
        assert_eq!(layout.paint_order().last(), Some(&0));
    }

    #[test]
    fn unsanitized_config_keeps_bounds() {
        let config = LayoutConfig {
            margin: -20.0,
            max_attempts: 0,
            ..LayoutConfig::default()
        };
        let positions = layout_tags_with_config(&sample_tags(), &config);
        assert_eq!(positions.len(), 3);
        for pos in positions {
            assert!((0.0..=100.0).contains(&pos.x));
            assert!((0.0..=100.0).contains(&pos.y));
        }
    }
}
