use egui::{Pos2, Rect, pos2};

/// A box shape is kept on pointer-up only if it is larger than this in
/// at least one dimension.
pub const MIN_SHAPE_SIZE: f32 = 1.0;

/// Normalizes a drag from `anchor` to `current` into a top-left origin
/// and non-negative width/height.
pub(crate) fn normalized_box(anchor: Pos2, current: Pos2) -> (Pos2, f32, f32) {
    let origin = pos2(anchor.x.min(current.x), anchor.y.min(current.y));
    let width = (current.x - anchor.x).abs();
    let height = (current.y - anchor.y).abs();
    (origin, width, height)
}

/// Bounding rectangle of a point list.
pub(crate) fn calculate_bounds(points: &[Pos2]) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }
    Rect::from_points(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_left_drag_flips_origin() {
        let (origin, w, h) = normalized_box(pos2(50.0, 40.0), pos2(20.0, 10.0));
        assert_eq!(origin, pos2(20.0, 10.0));
        assert_eq!((w, h), (30.0, 30.0));
    }

    #[test]
    fn mixed_drag_direction() {
        let (origin, w, h) = normalized_box(pos2(50.0, 40.0), pos2(80.0, 5.0));
        assert_eq!(origin, pos2(50.0, 5.0));
        assert_eq!((w, h), (30.0, 35.0));
    }
}
