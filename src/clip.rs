use crate::geometry::{EPSILON, Point, Polygon};

/// The closed half-plane `{ p : normal · p <= offset }`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfPlane {
    pub normal: Point,
    pub offset: f64,
}

impl HalfPlane {
    pub fn new(normal: Point, offset: f64) -> Self {
        Self { normal, offset }
    }

    /// Points at least as close to `site` as to `other`.
    ///
    /// The boundary is the perpendicular bisector of the two sites:
    /// `(other - site) · p <= (|other|² - |site|²) / 2`.
    pub fn bisector(site: &Point, other: &Point) -> Self {
        Self {
            normal: other.sub(site),
            offset: (other.norm_sq() - site.norm_sq()) * 0.5,
        }
    }

    /// Signed value of the half-plane inequality, positive outside.
    pub fn eval(&self, point: &Point) -> f64 {
        self.normal.dot(point) - self.offset
    }

    /// Inside test with an [`EPSILON`] allowance on the boundary.
    pub fn contains(&self, point: &Point) -> bool {
        self.eval(point) <= EPSILON
    }

    /// Where the edge `start -> end` crosses the boundary line.
    ///
    /// An edge running (nearly) parallel to the boundary has no well defined crossing;
    /// its start point is returned and the duplicate it creates is collapsed later.
    pub fn intersect(&self, start: &Point, end: &Point) -> Point {
        let denom = self.normal.dot(&end.sub(start));
        if denom.abs() <= EPSILON {
            return *start;
        }
        let t = (self.offset - self.normal.dot(start)) / denom;
        start.lerp(end, t)
    }
}

/// Sutherland-Hodgman clip of `polygon` against a single half-plane.
///
/// Consumes the input and returns the part inside `plane`, with consecutive
/// near-duplicate vertices collapsed. The result is empty when nothing is inside.
pub fn clip_polygon(polygon: Polygon, plane: &HalfPlane) -> Polygon {
    if polygon.is_empty() {
        return polygon;
    }

    let inside: Vec<bool> = polygon.vertices().iter().map(|v| plane.contains(v)).collect();

    if inside.iter().all(|&i| i) {
        return polygon;
    }
    if !inside.iter().any(|&i| i) {
        return Polygon::empty();
    }

    let vertices = polygon.vertices();
    let n = vertices.len();
    let mut result = Vec::with_capacity(n + 1);
    let mut prev = n - 1;

    for curr in 0..n {
        let (p, c) = (&vertices[prev], &vertices[curr]);
        match (inside[prev], inside[curr]) {
            // Both inside: keep the current vertex
            (true, true) => result.push(*c),
            // Entering: crossing point, then the current vertex
            (false, true) => {
                result.push(plane.intersect(p, c));
                result.push(*c);
            }
            // Leaving: crossing point only
            (true, false) => result.push(plane.intersect(p, c)),
            (false, false) => {}
        }
        prev = curr;
    }

    Polygon::new(remove_near_duplicates(result))
}

/// Collapses consecutive vertices closer than [`EPSILON`], including the wrap-around pair.
pub fn remove_near_duplicates(points: Vec<Point>) -> Vec<Point> {
    let mut cleaned: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        match cleaned.last() {
            Some(last) if last.nearly_equal(&p) => {}
            _ => cleaned.push(p),
        }
    }

    while cleaned.len() > 1 && cleaned[0].nearly_equal(&cleaned[cleaned.len() - 1]) {
        cleaned.pop();
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::BoundingBox;

    fn square() -> Polygon {
        BoundingBox::new(0.0, 0.0, 1.0, 1.0).to_polygon()
    }

    #[test]
    fn test_clip_half() {
        // Keeps x <= 0.5
        let plane = HalfPlane::new(Point::new(1.0, 0.0), 0.5);
        let clipped = clip_polygon(square(), &plane);

        assert_eq!(clipped.len(), 4);
        assert!((clipped.area() - 0.5).abs() < 1e-12);
        assert!(clipped.vertices().iter().all(|v| v.x <= 0.5 + 1e-12));
        let c = clipped.centroid().unwrap();
        assert!((c.x - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_clip_corner_adds_vertex() {
        // Cut off the (1, 1) corner: x + y <= 1.5
        let plane = HalfPlane::new(Point::new(1.0, 1.0), 1.5);
        let clipped = clip_polygon(square(), &plane);
        assert_eq!(clipped.len(), 5);
        assert!((clipped.area() - 0.875).abs() < 1e-12);
    }

    #[test]
    fn test_clip_keeps_everything() {
        let plane = HalfPlane::new(Point::new(1.0, 0.0), 2.0);
        assert_eq!(clip_polygon(square(), &plane), square());
    }

    #[test]
    fn test_clip_removes_everything() {
        let plane = HalfPlane::new(Point::new(1.0, 0.0), -1.0);
        assert!(clip_polygon(square(), &plane).is_empty());
        assert!(clip_polygon(Polygon::empty(), &plane).is_empty());
    }

    #[test]
    fn test_clip_along_existing_edge() {
        // Boundary coincides with the x = 1 edge, nothing may change.
        let plane = HalfPlane::new(Point::new(1.0, 0.0), 1.0);
        let clipped = clip_polygon(square(), &plane);
        assert_eq!(clipped.len(), 4);
        assert!((clipped.area() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_clip_through_vertices_has_no_duplicates() {
        // Diagonal through (1, 0) and (0, 1): x + y <= 1
        let plane = HalfPlane::new(Point::new(1.0, 1.0), 1.0);
        let clipped = clip_polygon(square(), &plane);
        assert_eq!(clipped.len(), 3);
        assert!((clipped.area() - 0.5).abs() < 1e-12);

        let v = clipped.vertices();
        for i in 0..v.len() {
            assert!(!v[i].nearly_equal(&v[(i + 1) % v.len()]));
        }
    }

    #[test]
    fn test_parallel_edge_intersection_returns_start() {
        let plane = HalfPlane::new(Point::new(0.0, 1.0), 0.5);
        let start = Point::new(0.0, 2.0);
        let end = Point::new(3.0, 2.0);
        assert_eq!(plane.intersect(&start, &end), start);
    }

    #[test]
    fn test_bisector_half_plane() {
        let site = Point::new(0.0, 0.0);
        let other = Point::new(10.0, 0.0);
        let plane = HalfPlane::bisector(&site, &other);

        assert!(plane.contains(&site));
        assert!(!plane.contains(&other));
        assert!(plane.eval(&Point::new(5.0, 7.0)).abs() < 1e-12);
    }

    #[test]
    fn test_remove_near_duplicates() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1e-12),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(1e-12, 0.0),
        ];
        let cleaned = remove_near_duplicates(points);
        assert_eq!(cleaned.len(), 3);
        assert_eq!(cleaned[0], Point::new(0.0, 0.0));
    }
}
