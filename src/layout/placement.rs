// Collision-avoiding placement for tag labels. Pure geometry in viewport
// percent; every call owns its own obstacle list.

use super::footprint::{Footprint, estimate_footprint};
use super::sampler::PositionSampler;
use super::tier::{compute_layer, compute_size_tier};
use super::types::{Position, TagLayout};
use crate::config::LayoutConfig;
use crate::ir::{Tag, max_count};

/// A tag paired with its input index so results can be scattered back
/// without matching on names.
#[derive(Debug, Clone, Copy)]
struct Indexed<'a> {
    index: usize,
    tag: &'a Tag,
}

/// Heaviest first; the stable sort keeps input order among equal counts.
fn placement_order(tags: &[Tag]) -> Vec<Indexed<'_>> {
    let mut order: Vec<Indexed<'_>> = tags
        .iter()
        .enumerate()
        .map(|(index, tag)| Indexed { index, tag })
        .collect();
    order.sort_by(|a, b| b.tag.count.cmp(&a.tag.count));
    order
}

/// Pushes a point inside the exclusion circle out to `radius + push`.
pub(crate) fn project_out_of_exclusion(x: f64, y: f64, config: &LayoutConfig) -> (f64, f64) {
    let dx = x - config.center_x;
    let dy = y - config.center_y;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist >= config.exclusion_radius {
        return (x, y);
    }
    let angle = dy.atan2(dx);
    let reach = config.exclusion_radius + config.exclusion_push;
    (
        config.center_x + angle.cos() * reach,
        config.center_y + angle.sin() * reach,
    )
}

pub(crate) fn in_exclusion_zone(x: f64, y: f64, config: &LayoutConfig) -> bool {
    let dx = x - config.center_x;
    let dy = y - config.center_y;
    (dx * dx + dy * dy).sqrt() < config.exclusion_radius
}

/// Keeps the label box inside the safe area. A box wider than the safe area
/// is centered on the viewport instead.
fn clamp_axis(value: f64, half_extent: f64, config: &LayoutConfig) -> f64 {
    let lo = config.safe_min() + half_extent;
    let hi = config.safe_max() - half_extent;
    if lo > hi {
        return 50.0_f64.clamp(config.safe_min(), config.safe_max());
    }
    value.clamp(lo, hi)
}

fn candidate_at(
    sampler: &PositionSampler,
    attempt: u32,
    size: (f64, f64),
    config: &LayoutConfig,
) -> Footprint {
    let (u, v) = sampler.candidate(attempt);
    let span = config.safe_max() - config.safe_min();
    let x = config.safe_min() + u * span;
    let y = config.safe_min() + v * span;
    let (x, y) = project_out_of_exclusion(x, y, config);
    let x = clamp_axis(x, size.0 / 2.0, config);
    let y = clamp_axis(y, size.1 / 2.0, config);
    Footprint::new(x, y, size)
}

fn place_one(
    tag: &Tag,
    size: (f64, f64),
    placed: &[Footprint],
    config: &LayoutConfig,
) -> (Footprint, bool) {
    let sampler = PositionSampler::new(&tag.name);
    let mut last = None;
    for attempt in 0..config.max_attempts {
        let candidate = candidate_at(&sampler, attempt, size, config);
        let blocked = in_exclusion_zone(candidate.x, candidate.y, config)
            || placed
                .iter()
                .any(|other| candidate.overlaps(other, config.collision_padding));
        if !blocked {
            return (candidate, false);
        }
        tracing::trace!(
            tag = %tag.name,
            attempt,
            x = candidate.x,
            y = candidate.y,
            "candidate rejected"
        );
        last = Some(candidate);
    }
    // `max_attempts` is at least one after sanitizing, so `last` is set.
    let fallback = last.unwrap_or_else(|| candidate_at(&sampler, 0, size, config));
    tracing::debug!(
        tag = %tag.name,
        attempts = config.max_attempts,
        x = fallback.x,
        y = fallback.y,
        "no clear spot; keeping last candidate"
    );
    (fallback, true)
}

/// Places every tag and returns results in input order.
pub(crate) fn place_tags(tags: &[Tag], config: &LayoutConfig) -> Vec<TagLayout> {
    if tags.is_empty() {
        return Vec::new();
    }
    let max = max_count(tags);
    let mut placed: Vec<Footprint> = Vec::with_capacity(tags.len());
    let mut results: Vec<Option<TagLayout>> = vec![None; tags.len()];

    for Indexed { index, tag } in placement_order(tags) {
        let size_tier = compute_size_tier(tag.count, max);
        let size = estimate_footprint(&tag.name, size_tier);
        let (footprint, degraded) = place_one(tag, size, &placed, config);
        placed.push(footprint);
        results[index] = Some(TagLayout {
            position: Position {
                x: footprint.x,
                y: footprint.y,
                size_tier,
                layer: compute_layer(tag.count, max, config.layer_base, config.layer_span),
            },
            footprint,
            degraded,
        });
    }

    reassemble(results)
}

/// Scatters placement results back into input order.
fn reassemble(results: Vec<Option<TagLayout>>) -> Vec<TagLayout> {
    let expected = results.len();
    let out: Vec<TagLayout> = results.into_iter().flatten().collect();
    debug_assert_eq!(out.len(), expected);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SizeTier;

    fn config() -> LayoutConfig {
        LayoutConfig::default()
    }

    #[test]
    fn order_is_heaviest_first_and_stable() {
        let tags = vec![
            Tag::new("a", 1),
            Tag::new("b", 5),
            Tag::new("c", 1),
            Tag::new("d", 5),
        ];
        let order: Vec<usize> = placement_order(&tags).iter().map(|e| e.index).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn projection_lands_past_exclusion_boundary() {
        let config = config();
        let (x, y) = project_out_of_exclusion(55.0, 50.0, &config);
        assert!((x - 73.0).abs() < 1e-9);
        assert!((y - 50.0).abs() < 1e-9);

        let (x, y) = project_out_of_exclusion(50.0, 40.0, &config);
        assert!((x - 50.0).abs() < 1e-9);
        assert!((y - 27.0).abs() < 1e-9);

        // Dead center has no direction; it goes right.
        let (x, y) = project_out_of_exclusion(50.0, 50.0, &config);
        assert!((x - 73.0).abs() < 1e-9);
        assert!((y - 50.0).abs() < 1e-9);

        // Outside points are untouched.
        assert_eq!(project_out_of_exclusion(10.0, 10.0, &config), (10.0, 10.0));
    }

    #[test]
    fn clamp_keeps_box_inside_safe_area() {
        let config = config();
        assert_eq!(clamp_axis(2.0, 5.0, &config), 13.0);
        assert_eq!(clamp_axis(99.0, 5.0, &config), 87.0);
        assert_eq!(clamp_axis(40.0, 5.0, &config), 40.0);
        // Wider than the safe area: centered.
        assert_eq!(clamp_axis(12.0, 60.0, &config), 50.0);
    }

    #[test]
    fn empty_input_places_nothing() {
        assert!(place_tags(&[], &config()).is_empty());
    }

    #[test]
    fn results_follow_input_order() {
        let tags = vec![Tag::new("go", 0), Tag::new("css", 2), Tag::new("react", 10)];
        let placed = place_tags(&tags, &config());
        assert_eq!(placed.len(), 3);
        assert_eq!(placed[0].position.size_tier, SizeTier::Sm);
        assert_eq!(placed[1].position.size_tier, SizeTier::Xl);
        assert_eq!(placed[2].position.size_tier, SizeTier::Xl4);
        assert_eq!(placed[2].position.layer, 20);
        assert_eq!(placed[0].position.layer, 10);
    }

    #[test]
    fn duplicate_names_still_get_their_own_slot() {
        let tags = vec![Tag::new("dup", 1), Tag::new("dup", 9)];
        let placed = place_tags(&tags, &config());
        assert_eq!(placed[0].position.size_tier, SizeTier::Base);
        assert_eq!(placed[1].position.size_tier, SizeTier::Xl4);
    }

    #[test]
    fn single_attempt_still_places_everything() {
        let config = LayoutConfig {
            max_attempts: 1,
            ..LayoutConfig::default()
        };
        let tags: Vec<Tag> = (0..40).map(|i| Tag::new(format!("tag-{i}"), i)).collect();
        let placed = place_tags(&tags, &config);
        assert_eq!(placed.len(), 40);
        for entry in &placed {
            assert!((8.0..=92.0).contains(&entry.position.x));
            assert!((8.0..=92.0).contains(&entry.position.y));
        }
    }

    #[test]
    fn blocked_tag_keeps_its_last_candidate() {
        let config = LayoutConfig {
            max_attempts: 4,
            ..LayoutConfig::default()
        };
        let tag = Tag::new("react", 10);
        let size = estimate_footprint(&tag.name, SizeTier::Xl4);
        let wall = [Footprint::new(50.0, 50.0, (200.0, 200.0))];

        let (footprint, degraded) = place_one(&tag, size, &wall, &config);
        assert!(degraded);
        let sampler = PositionSampler::new(&tag.name);
        assert_eq!(footprint, candidate_at(&sampler, 3, size, &config));
    }

    #[test]
    fn clear_viewport_accepts_without_degrading() {
        let config = config();
        let tag = Tag::new("react", 10);
        let size = estimate_footprint(&tag.name, SizeTier::Xl4);
        let (footprint, degraded) = place_one(&tag, size, &[], &config);
        assert!(!degraded);
        assert!(!in_exclusion_zone(footprint.x, footprint.y, &config));
    }

    #[test]
    fn exclusion_covering_viewport_degrades_every_tag() {
        let config = LayoutConfig {
            exclusion_radius: 200.0,
            max_attempts: 5,
            ..LayoutConfig::default()
        };
        let tags = vec![Tag::new("rust", 7), Tag::new("go", 3), Tag::new("zig", 1)];
        let placed = place_tags(&tags, &config);
        assert_eq!(placed.len(), 3);
        for (tag, entry) in tags.iter().zip(&placed) {
            assert!(entry.degraded, "{} was placed cleanly", tag.name);
            let sampler = PositionSampler::new(&tag.name);
            let size = (entry.footprint.width, entry.footprint.height);
            assert_eq!(entry.footprint, candidate_at(&sampler, 4, size, &config));
            assert!((8.0..=92.0).contains(&entry.position.x));
            assert!((8.0..=92.0).contains(&entry.position.y));
        }
    }

    #[test]
    fn accepted_clean_placements_do_not_overlap() {
        let tags: Vec<Tag> = ["rust", "go", "zig", "c", "ocaml", "elixir"]
            .iter()
            .enumerate()
            .map(|(i, name)| Tag::new(*name, (i as i64 + 1) * 3))
            .collect();
        let config = config();
        let placed = place_tags(&tags, &config);
        for (i, a) in placed.iter().enumerate() {
            if a.degraded {
                continue;
            }
            for (j, b) in placed.iter().enumerate() {
                if i == j || b.degraded {
                    continue;
                }
                assert!(
                    !a.footprint.overlaps(&b.footprint, config.collision_padding),
                    "{} overlaps {}",
                    tags[i].name,
                    tags[j].name
                );
            }
            assert!(!in_exclusion_zone(a.position.x, a.position.y, &config));
        }
    }
}
