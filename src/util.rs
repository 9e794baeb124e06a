use crate::{shapes::Rect, Point};

/// Index of the first quarter of `rect` containing `point`, in the order
/// produced by [`Rect::quarter`]
pub(crate) fn determine_quadrant(rect: &Rect, point: &Point) -> Option<usize> {
    rect.quarter().iter().position(|q| q.contains(point))
}
