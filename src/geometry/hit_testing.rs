use egui::Pos2;

/// Distance from `point` to the closest point of the segment `start-end`.
pub fn distance_to_segment(point: Pos2, start: Pos2, end: Pos2) -> f32 {
    let segment = end - start;
    let to_point = point - start;

    let length = segment.length();
    if length == 0.0 {
        return to_point.length();
    }

    let t = ((to_point.x * segment.x + to_point.y * segment.y) / length).clamp(0.0, length);
    let projection = start + segment * (t / length);
    (point - projection).length()
}

/// Even-odd point-in-polygon test. The polygon may or may not repeat its
/// first point at the end.
pub fn point_in_polygon(point: Pos2, polygon: &[Pos2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
