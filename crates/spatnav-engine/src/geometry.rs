//! Directional predicates over rectangles and entry/exit point projection.
//!
//! All functions here are pure. Rectangles are expected to be rounded
//! already (see [`crate::cache::RectCache`]).

use spatnav_types::{Direction, Point, Rect};

/// `r1` is to the right of `r2`: either wholly past its right edge, or
/// starting inside it, extending past its right edge and overlapping it
/// vertically.
pub fn is_right_side(r1: &Rect, r2: &Rect) -> bool {
    r1.left >= r2.right
        || (r1.left >= r2.left
            && r1.right > r2.right
            && r1.bottom > r2.top
            && r1.top < r2.bottom)
}

/// `r1` is below `r2`. Vertical analogue of [`is_right_side`].
pub fn is_below(r1: &Rect, r2: &Rect) -> bool {
    r1.top >= r2.bottom
        || (r1.top >= r2.top
            && r1.bottom > r2.bottom
            && r1.left < r2.right
            && r1.right > r2.left)
}

/// `candidate` lies in direction `dir` from `origin`.
pub fn is_outside(candidate: &Rect, origin: &Rect, dir: Direction) -> bool {
    match dir {
        Direction::Left => is_right_side(origin, candidate),
        Direction::Right => is_right_side(candidate, origin),
        Direction::Up => is_below(origin, candidate),
        Direction::Down => is_below(candidate, origin),
    }
}

/// The two rectangles overlap on the axis orthogonal to `dir`.
pub fn is_aligned(r1: &Rect, r2: &Rect, dir: Direction) -> bool {
    if dir.is_horizontal() {
        r1.bottom > r2.top && r1.top < r2.bottom
    } else {
        r1.right > r2.left && r1.left < r2.right
    }
}

/// Partial or total containment: one of `child`'s vertical edges falls
/// within `container`'s horizontal span and one of its horizontal edges
/// within the vertical span.
pub fn is_inside(container: &Rect, child: &Rect) -> bool {
    let within_x = |x: f64| x >= container.left && x <= container.right;
    let within_y = |y: f64| y >= container.top && y <= container.bottom;
    (within_x(child.left) || within_x(child.right)) && (within_y(child.top) || within_y(child.bottom))
}

/// `inner` lies entirely within `outer`.
pub fn is_entirely_within(outer: &Rect, inner: &Rect) -> bool {
    inner.left >= outer.left
        && inner.right <= outer.right
        && inner.top >= outer.top
        && inner.bottom <= outer.bottom
}

/// Projected points used by the distance scorer: `exit` on the origin's
/// boundary facing the direction, `entry` on the candidate's near
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryExit {
    pub exit: Point,
    pub entry: Point,
}

/// Project the closest points on the facing edges of `origin` and
/// `candidate`.
///
/// Along `dir` the entry coordinate is the candidate's near edge when the
/// candidate lies wholly past the origin's edge, otherwise the origin's
/// edge itself. On the orthogonal axis both points are pinned to the
/// nearer edges when one rectangle is wholly offset from the other, and
/// to the larger of the two leading edges when they overlap.
pub fn entry_exit_points(dir: Direction, origin: &Rect, candidate: &Rect) -> EntryExit {
    let mut exit = Point::default();
    let mut entry = Point::default();

    match dir {
        Direction::Left => {
            exit.x = origin.left;
            entry.x = if candidate.right < origin.left {
                candidate.right
            } else {
                origin.left
            };
        },
        Direction::Right => {
            exit.x = origin.right;
            entry.x = if candidate.left > origin.right {
                candidate.left
            } else {
                origin.right
            };
        },
        Direction::Up => {
            exit.y = origin.top;
            entry.y = if candidate.bottom < origin.top {
                candidate.bottom
            } else {
                origin.top
            };
        },
        Direction::Down => {
            exit.y = origin.bottom;
            entry.y = if candidate.top > origin.bottom {
                candidate.top
            } else {
                origin.bottom
            };
        },
    }

    if dir.is_horizontal() {
        if is_below(origin, candidate) {
            exit.y = origin.top;
            entry.y = if candidate.bottom < origin.top {
                candidate.bottom
            } else {
                origin.top
            };
        } else if is_below(candidate, origin) {
            exit.y = origin.bottom;
            entry.y = if candidate.top > origin.bottom {
                candidate.top
            } else {
                origin.bottom
            };
        } else {
            exit.y = origin.top.max(candidate.top);
            entry.y = exit.y;
        }
    } else if is_right_side(origin, candidate) {
        exit.x = origin.left;
        entry.x = if candidate.right < origin.left {
            candidate.right
        } else {
            origin.left
        };
    } else if is_right_side(candidate, origin) {
        exit.x = origin.right;
        entry.x = if candidate.left > origin.right {
            candidate.left
        } else {
            origin.right
        };
    } else {
        exit.x = origin.left.max(candidate.left);
        entry.x = exit.x;
    }

    EntryExit { exit, entry }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::new(x, y, w, h)
    }

    #[test]
    fn right_side_disjoint_and_overlapping() {
        let origin = r(0.0, 0.0, 100.0, 50.0);
        assert!(is_right_side(&r(100.0, 0.0, 50.0, 50.0), &origin));
        // Starts inside, sticks out to the right, overlaps vertically.
        assert!(is_right_side(&r(50.0, 10.0, 100.0, 20.0), &origin));
        // Starts inside but ends inside.
        assert!(!is_right_side(&r(50.0, 10.0, 20.0, 20.0), &origin));
        // Sticks out but no vertical overlap.
        assert!(!is_right_side(&r(50.0, 60.0, 100.0, 20.0), &origin));
    }

    #[test]
    fn outside_per_direction() {
        let origin = r(100.0, 100.0, 50.0, 50.0);
        let left = r(0.0, 100.0, 50.0, 50.0);
        let right = r(200.0, 100.0, 50.0, 50.0);
        let up = r(100.0, 0.0, 50.0, 50.0);
        let down = r(100.0, 200.0, 50.0, 50.0);
        assert!(is_outside(&left, &origin, Direction::Left));
        assert!(is_outside(&right, &origin, Direction::Right));
        assert!(is_outside(&up, &origin, Direction::Up));
        assert!(is_outside(&down, &origin, Direction::Down));
        assert!(!is_outside(&left, &origin, Direction::Right));
        assert!(!is_outside(&up, &origin, Direction::Down));
        assert!(!is_outside(&origin, &origin, Direction::Right));
    }

    #[test]
    fn aligned_by_axis() {
        let a = r(0.0, 0.0, 50.0, 50.0);
        let b = r(200.0, 40.0, 50.0, 50.0);
        assert!(is_aligned(&a, &b, Direction::Right));
        assert!(!is_aligned(&a, &b, Direction::Down));
        let touching = r(200.0, 50.0, 50.0, 50.0);
        assert!(!is_aligned(&a, &touching, Direction::Right));
    }

    #[test]
    fn inside_partial_and_total() {
        let c = r(0.0, 0.0, 100.0, 100.0);
        assert!(is_inside(&c, &r(10.0, 10.0, 20.0, 20.0)));
        assert!(is_inside(&c, &r(90.0, 90.0, 50.0, 50.0)));
        assert!(!is_inside(&c, &r(110.0, 10.0, 20.0, 20.0)));
        assert!(is_entirely_within(&c, &r(10.0, 10.0, 20.0, 20.0)));
        assert!(!is_entirely_within(&c, &r(90.0, 90.0, 50.0, 50.0)));
    }

    #[test]
    fn entry_exit_aligned_right() {
        let origin = r(0.0, 0.0, 100.0, 50.0);
        let cand = r(150.0, 20.0, 100.0, 50.0);
        let p = entry_exit_points(Direction::Right, &origin, &cand);
        assert_eq!(p.exit, Point::new(100.0, 20.0));
        assert_eq!(p.entry, Point::new(150.0, 20.0));
    }

    #[test]
    fn entry_exit_offset_below() {
        let origin = r(0.0, 0.0, 100.0, 50.0);
        let cand = r(150.0, 80.0, 100.0, 50.0);
        let p = entry_exit_points(Direction::Right, &origin, &cand);
        assert_eq!(p.exit, Point::new(100.0, 50.0));
        assert_eq!(p.entry, Point::new(150.0, 80.0));
    }

    #[test]
    fn entry_clamped_when_overlapping() {
        let origin = r(0.0, 0.0, 100.0, 100.0);
        let cand = r(50.0, 150.0, 100.0, 50.0);
        let p = entry_exit_points(Direction::Down, &origin, &cand);
        assert_eq!(p.exit.y, 100.0);
        assert_eq!(p.entry.y, 150.0);
        // Horizontal overlap: both pinned to the larger left edge.
        assert_eq!(p.exit.x, 50.0);
        assert_eq!(p.entry.x, 50.0);

        let overlapping = r(20.0, 80.0, 20.0, 50.0);
        let p = entry_exit_points(Direction::Down, &origin, &overlapping);
        assert_eq!(p.entry.y, 100.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_rect() -> impl Strategy<Value = Rect> {
            (0.0..1000.0f64, 0.0..1000.0f64, 1.0..200.0f64, 1.0..200.0f64)
                .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
        }

        fn arb_dir() -> impl Strategy<Value = Direction> {
            prop_oneof![
                Just(Direction::Left),
                Just(Direction::Up),
                Just(Direction::Right),
                Just(Direction::Down),
            ]
        }

        proptest! {
            #[test]
            fn nothing_is_outside_itself(a in arb_rect(), dir in arb_dir()) {
                prop_assert!(!is_outside(&a, &a, dir));
            }

            #[test]
            fn disjoint_is_outside_one_way(a in arb_rect(), b in arb_rect(), dir in arb_dir()) {
                // Never outside in both a direction and its opposite.
                prop_assert!(!(is_outside(&b, &a, dir) && is_outside(&b, &a, dir.opposite())));
            }

            #[test]
            fn entry_not_behind_exit(a in arb_rect(), b in arb_rect(), dir in arb_dir()) {
                let p = entry_exit_points(dir, &a, &b);
                match dir {
                    Direction::Left => prop_assert!(p.entry.x <= p.exit.x),
                    Direction::Right => prop_assert!(p.entry.x >= p.exit.x),
                    Direction::Up => prop_assert!(p.entry.y <= p.exit.y),
                    Direction::Down => prop_assert!(p.entry.y >= p.exit.y),
                }
            }
        }
    }
}
