use egui::{Pos2, Rect};

use crate::error::FormatError;

/// Width of the outline drawn around dots and fills
pub const OUTLINE_WIDTH: f32 = 1.0;

/// Calculate the bounding box for a set of points
pub(crate) fn calculate_bounds(points: &[Pos2], padding: f32) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(
        Pos2::new(min_x - padding, min_y - padding),
        Pos2::new(max_x + padding, max_y + padding),
    )
}

/// Flatten points into `[x0, y0, x1, y1, ...]`
pub(crate) fn flatten(points: &[Pos2]) -> Vec<f32> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

/// Flatten a rectangle into its two corners
pub(crate) fn flatten_rect(rect: Rect) -> Vec<f32> {
    vec![rect.min.x, rect.min.y, rect.max.x, rect.max.y]
}

/// Pair up flattened coordinates, requiring an even count of at least `min_points * 2`
pub(crate) fn unflatten(
    kind: &'static str,
    coords: &[f32],
    min_points: usize,
) -> Result<Vec<Pos2>, FormatError> {
    if coords.len() % 2 != 0 || coords.len() < min_points * 2 {
        return Err(FormatError::CoordinateCount {
            kind,
            expected: format!("an even number of at least {}", min_points * 2),
            found: coords.len(),
        });
    }
    check_finite(kind, coords)?;

    Ok(coords.chunks_exact(2).map(|c| Pos2::new(c[0], c[1])).collect())
}

/// Read exactly two corners; the corners may come in any order
pub(crate) fn unflatten_rect(kind: &'static str, coords: &[f32]) -> Result<Rect, FormatError> {
    if coords.len() != 4 {
        return Err(FormatError::CoordinateCount {
            kind,
            expected: "exactly 4".to_owned(),
            found: coords.len(),
        });
    }
    check_finite(kind, coords)?;

    Ok(Rect::from_two_pos(
        Pos2::new(coords[0], coords[1]),
        Pos2::new(coords[2], coords[3]),
    ))
}

pub(crate) fn check_finite(kind: &'static str, values: &[f32]) -> Result<(), FormatError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(FormatError::NonFinite { kind })
    }
}
