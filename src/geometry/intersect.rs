use egui::Pos2;

/// Returns true if segment `a1-a2` crosses segment `b1-b2`.
///
/// Both parametric coordinates of the crossing point must lie in `[0, 1]`,
/// so segments that merely touch at an endpoint count as intersecting.
/// Parallel and collinear segments (zero determinant) are reported as
/// non-intersecting, even when they overlap.
pub fn segments_intersect(a1: Pos2, a2: Pos2, b1: Pos2, b2: Pos2) -> bool {
    // Widen to f64 so that the determinant of near-parallel segments is stable.
    let (x1, y1) = (a1.x as f64, a1.y as f64);
    let (x2, y2) = (a2.x as f64, a2.y as f64);
    let (x3, y3) = (b1.x as f64, b1.y as f64);
    let (x4, y4) = (b2.x as f64, b2.y as f64);

    let det = (x2 - x1) * (y4 - y3) - (x4 - x3) * (y2 - y1);
    if det == 0.0 {
        return false;
    }

    let t = ((x3 - x1) * (y4 - y3) - (x4 - x3) * (y3 - y1)) / det;
    let u = ((x3 - x1) * (y2 - y1) - (x2 - x1) * (y3 - y1)) / det;

    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

/// Returns true if the segment from the last point of `path` to `candidate`
/// crosses an earlier segment of `path`.
///
/// The segment ending at the last point shares an endpoint with the
/// candidate and is never tested. Paths with fewer than two points have no
/// segment to cross.
pub fn crosses_path(path: &[Pos2], candidate: Pos2) -> bool {
    let Some(&last) = path.last() else {
        return false;
    };
    if path.len() < 2 {
        return false;
    }
    path[..path.len() - 1]
        .windows(2)
        .any(|segment| segments_intersect(segment[0], segment[1], last, candidate))
}
