//! Pure geometry helpers shared by the shape model and the polygon tool.

pub mod hit_testing;
mod intersect;

pub use hit_testing::{distance_to_segment, point_in_polygon};
pub use intersect::{crosses_path, segments_intersect};
