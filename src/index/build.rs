use super::Node;
use crate::coordinate::{Axis, Coordinate};

/// Recursively median-split `points` into a subtree rooted at `depth`.
///
/// The slice is stable-sorted along the depth's axis; the element at
/// `len / 2` becomes the root, the prefix goes left and the suffix right.
pub(super) fn build_subtree(points: &mut [Coordinate], depth: usize) -> Option<Box<Node>> {
    match points.len() {
        0 => None,
        1 => Some(Box::new(Node::leaf(points[0]))),
        len => {
            let axis = Axis::for_depth(depth);
            points.sort_by(|a, b| a.axis_value(axis).total_cmp(&b.axis_value(axis)));

            let mid = len / 2;
            let location = points[mid];
            let (left, rest) = points.split_at_mut(mid);
            let right = &mut rest[1..];

            Some(Box::new(Node {
                location,
                left: build_subtree(left, depth + 1),
                right: build_subtree(right, depth + 1),
            }))
        }
    }
}
