use crate::error::{Error, PolygonDefect, Result};
use crate::types::Point;

/// Check that a ring is non-empty and explicitly closed
fn check_ring(ring: &[Point]) -> Result<()> {
    let (Some(&first), Some(&last)) = (ring.first(), ring.last()) else {
        log::debug!("rejected polygon without vertices");
        return Err(Error::MalformedPolygon(PolygonDefect::Empty));
    };

    if first != last {
        log::debug!("rejected unclosed polygon ring: {first:?} != {last:?}");
        return Err(Error::MalformedPolygon(PolygonDefect::NotClosed { first, last }));
    }

    Ok(())
}

/// Even-odd crossing count over the edges of an already checked ring
fn crossings_inside(x: f64, y: f64, ring: &[Point]) -> bool {
    let mut inside = false;

    for edge in ring.windows(2) {
        let (p1, p2) = (edge[0], edge[1]);

        // differing sides of the ray also rule out horizontal edges (p1.y == p2.y)
        if (p1.y > y) != (p2.y > y) {
            let x_intersect = (p2.x - p1.x) * (y - p1.y) / (p2.y - p1.y) + p1.x;
            if x < x_intersect {
                inside = !inside;
            }
        }
    }

    inside
}

/// Test whether `(x, y)` lies strictly inside a closed polygon ring
///
/// Uses the even-odd (crossing number) rule: a horizontal ray cast from the
/// point is intersected with every edge and an odd number of crossings means
/// the point is inside. The ring must repeat its first vertex at the end.
///
/// # Limitations
///
/// Results for points exactly on an edge or vertex are unreliable, and
/// self-intersecting rings give deterministic but meaningless answers.
///
/// # Errors
///
/// [`Error::MalformedPolygon`] if the ring is empty or not closed.
pub fn point_in_polygon(x: f64, y: f64, ring: &[Point]) -> Result<bool> {
    check_ring(ring)?;
    Ok(crossings_inside(x, y, ring))
}

/// Closed polygon ring, checked once on construction
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from a closed ring of vertices
    ///
    /// # Errors
    ///
    /// [`Error::MalformedPolygon`] if the ring is empty or not closed.
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        check_ring(&vertices)?;
        Ok(Self { vertices })
    }

    /// Vertices including the repeated closing vertex
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// See [`point_in_polygon`] for semantics and limitations
    pub fn contains(&self, point: Point) -> bool {
        crossings_inside(point.x, point.y, &self.vertices)
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = Error;

    fn try_from(vertices: Vec<Point>) -> Result<Self> {
        Self::new(vertices)
    }
}

impl TryFrom<&[(f64, f64)]> for Polygon {
    type Error = Error;

    fn try_from(vertices: &[(f64, f64)]) -> Result<Self> {
        Self::new(vertices.iter().copied().map(Point::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok, assert_ok_eq};
    use insta::assert_compact_debug_snapshot;

    fn ring(vertices: &[(f64, f64)]) -> Vec<Point> {
        vertices.iter().copied().map(Point::from).collect()
    }

    fn square() -> Vec<Point> {
        ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)])
    }

    #[test]
    fn square_inside_and_outside() {
        let square = square();
        assert_ok_eq!(point_in_polygon(1.0, 1.0, &square), true);
        assert_ok_eq!(point_in_polygon(3.0, 3.0, &square), false);
        assert_ok_eq!(point_in_polygon(-1.0, 1.0, &square), false);
        assert_ok_eq!(point_in_polygon(1.0, -0.5, &square), false);
        assert_ok_eq!(point_in_polygon(0.1, 1.9, &square), true);
    }

    #[test]
    fn winding_direction_does_not_matter() {
        let mut clockwise = square();
        clockwise.reverse();
        assert_ok_eq!(point_in_polygon(1.0, 1.0, &clockwise), true);
        assert_ok_eq!(point_in_polygon(3.0, 1.0, &clockwise), false);
    }

    #[test]
    fn concave_polygon() {
        // "U" shape, notch between x=1 and x=2 above y=1
        let shape = ring(&[
            (0.0, 0.0),
            (3.0, 0.0),
            (3.0, 3.0),
            (2.0, 3.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 3.0),
            (0.0, 3.0),
            (0.0, 0.0),
        ]);

        assert_ok_eq!(point_in_polygon(0.5, 2.5, &shape), true);
        assert_ok_eq!(point_in_polygon(2.5, 2.5, &shape), true);
        assert_ok_eq!(point_in_polygon(1.5, 0.5, &shape), true);
        assert_ok_eq!(point_in_polygon(1.5, 2.5, &shape), false);
    }

    #[test]
    fn triangle() {
        let triangle = ring(&[(0.0, 0.0), (4.0, 0.0), (2.0, 4.0), (0.0, 0.0)]);
        assert_ok_eq!(point_in_polygon(2.0, 1.0, &triangle), true);
        assert_ok_eq!(point_in_polygon(0.5, 3.0, &triangle), false);
        assert_ok_eq!(point_in_polygon(3.5, 3.0, &triangle), false);
    }

    #[test]
    fn geographic_coordinates() {
        // (lon, lat) box around Manhattan
        let area = ring(&[
            (-74.0, 40.7),
            (-73.9, 40.7),
            (-73.9, 40.8),
            (-74.0, 40.8),
            (-74.0, 40.7),
        ]);
        assert_ok_eq!(point_in_polygon(-73.95, 40.75, &area), true);
        assert_ok_eq!(point_in_polygon(-73.85, 40.75, &area), false);
    }

    #[test]
    fn degenerate_rings_contain_nothing() {
        let single = ring(&[(1.0, 1.0)]);
        assert_ok_eq!(point_in_polygon(1.0, 1.0, &single), false);

        let flat = ring(&[(0.0, 0.0), (2.0, 0.0), (0.0, 0.0)]);
        assert_ok_eq!(point_in_polygon(1.0, 0.0, &flat), false);
    }

    #[test]
    fn unclosed_ring_fails() {
        let open = ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        assert_compact_debug_snapshot!(
            point_in_polygon(1.0, 1.0, &open),
            @"Err(MalformedPolygon(NotClosed { first: Point { x: 0.0, y: 0.0 }, last: Point { x: 0.0, y: 2.0 } }))"
        );
    }

    #[test]
    fn empty_ring_fails() {
        assert_compact_debug_snapshot!(
            point_in_polygon(0.0, 0.0, &[]),
            @"Err(MalformedPolygon(Empty))"
        );
    }

    #[test]
    fn polygon_type() {
        let polygon = assert_ok!(Polygon::new(square()));
        assert_eq!(polygon.vertices().len(), 5);
        assert!(polygon.contains(Point::new(1.0, 1.0)));
        assert!(!polygon.contains(Point::new(3.0, 3.0)));
    }

    #[test]
    fn polygon_from_tuples() {
        let vertices: &[(f64, f64)] = &[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 0.0)];
        let polygon = assert_ok!(Polygon::try_from(vertices));
        assert!(polygon.contains(Point::new(1.5, 0.5)));

        let open: &[(f64, f64)] = &[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0)];
        assert_err!(Polygon::try_from(open));
    }
}
