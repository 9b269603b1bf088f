//! Candidate scoring.
//!
//! Lower scores are closer. Only the relative order of scores matters;
//! they may go negative when overlap dominates.

use spatnav_types::{Direction, Rect};

use crate::config::NavConfig;
use crate::geometry::{entry_exit_points, is_aligned};

/// The tunable constants of [`distance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub orthogonal_horizontal: f64,
    pub orthogonal_vertical: f64,
    pub align: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self::from(&NavConfig::default())
    }
}

impl From<&NavConfig> for Weights {
    fn from(config: &NavConfig) -> Self {
        Self {
            orthogonal_horizontal: config.orthogonal_weight_horizontal,
            orthogonal_vertical: config.orthogonal_weight_vertical,
            align: config.align_weight,
        }
    }
}

/// Directional distance from `origin` to `candidate`.
///
/// `A + B + C - D - E` where, between the projected exit and entry
/// points, `A` is the straight-line distance, `B` the distance along
/// `dir` and `C` the weighted orthogonal distance (biased by half the
/// origin's cross extent when the boxes are not aligned). `D` is the
/// square root of the overlap area and `E` the alignment bonus: the
/// fraction of the origin's cross extent the candidate overlaps, times
/// the align weight.
pub fn distance(origin: &Rect, candidate: &Rect, dir: Direction, weights: &Weights) -> f64 {
    let points = entry_exit_points(dir, origin, candidate);
    let p1 = (points.entry.x - points.exit.x).abs();
    let p2 = (points.entry.y - points.exit.y).abs();

    let a = p1.hypot(p2);
    let aligned = is_aligned(origin, candidate, dir);

    let (b, c) = if dir.is_horizontal() {
        let bias = if aligned { 0.0 } else { origin.height / 2.0 };
        (p1, (p2 + bias) * weights.orthogonal_horizontal)
    } else {
        let bias = if aligned { 0.0 } else { origin.width / 2.0 };
        (p2, (p1 + bias) * weights.orthogonal_vertical)
    };

    let d = origin.intersection_area(candidate).sqrt();
    let e = alignment_bonus(origin, candidate, dir) * weights.align;

    a + b + c - d - e
}

/// Overlap on the axis orthogonal to `dir` as a fraction of the origin's
/// extent on that axis, in `[0, 1]`. Zero for a degenerate origin.
pub fn alignment_bonus(origin: &Rect, candidate: &Rect, dir: Direction) -> f64 {
    let (overlap, extent) = if dir.is_horizontal() {
        (
            origin.bottom.min(candidate.bottom) - origin.top.max(candidate.top),
            origin.height,
        )
    } else {
        (
            origin.right.min(candidate.right) - origin.left.max(candidate.left),
            origin.width,
        )
    };
    if extent <= 0.0 || overlap <= 0.0 {
        return 0.0;
    }
    (overlap / extent).min(1.0)
}

/// Edge-to-edge distance used when entering a container: how far the
/// candidate's leading edge is from the container's matching edge.
pub fn inner_distance(origin: &Rect, candidate: &Rect, dir: Direction) -> f64 {
    match dir {
        Direction::Left => (origin.right - candidate.right).abs(),
        Direction::Right => (origin.left - candidate.left).abs(),
        Direction::Up => (origin.bottom - candidate.bottom).abs(),
        Direction::Down => (origin.top - candidate.top).abs(),
    }
}

/// The candidate with the lowest score. Ties go to the earliest
/// candidate, so callers pass candidates in tree order.
pub fn nearest<N: Copy>(
    candidates: impl IntoIterator<Item = (N, Rect)>,
    mut score: impl FnMut(&Rect) -> f64,
) -> Option<N> {
    let mut best: Option<(N, f64)> = None;
    for (node, rect) in candidates {
        let s = score(&rect);
        if best.is_none_or(|(_, min)| s < min) {
            best = Some((node, s));
        }
    }
    best.map(|(node, _)| node)
}
