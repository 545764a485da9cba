use crate::clip::{HalfPlane, clip_polygon};
use crate::geometry::{Point, Polygon};

/// A Voronoi cell: the generating site and the polygon of points closest to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub site: Point,
    pub polygon: Polygon,
}

impl Cell {
    pub fn new(site: Point, polygon: Polygon) -> Self {
        Self { site, polygon }
    }

    /// Builds the cell of `site` against all `sites`, starting from `initial`.
    pub fn build(site: Point, sites: &[Point], initial: Polygon) -> Self {
        Self::new(site, build_cell(&site, sites, initial))
    }

    pub fn vertices(&self) -> &[Point] {
        self.polygon.vertices()
    }

    pub fn area(&self) -> f64 {
        self.polygon.area()
    }

    pub fn centroid(&self) -> Option<Point> {
        self.polygon.centroid()
    }

    /// Check if the cell is empty (clipped away).
    pub fn is_empty(&self) -> bool {
        self.polygon.is_empty()
    }

    /// Squared distance from the site to its furthest vertex.
    pub fn max_radius_sq(&self) -> f64 {
        self.polygon
            .vertices()
            .iter()
            .map(|v| v.distance_sq(&self.site))
            .fold(0.0, f64::max)
    }
}

/// Clips `initial` by the bisector half-plane of `site` and every other entry of `sites`.
///
/// Entries equal to `site` are skipped. Returns the empty polygon as soon as a clip
/// removes everything.
pub fn build_cell(site: &Point, sites: &[Point], initial: Polygon) -> Polygon {
    clip_by_neighbors(site, sites.iter(), initial)
}

/// Same as [`build_cell`] with an arbitrary neighbor order.
///
/// The intersection of half-planes does not depend on the order they are applied in,
/// so any permutation of `others` yields the same polygon up to rotation and rounding.
pub fn clip_by_neighbors<'a, I>(site: &Point, others: I, initial: Polygon) -> Polygon
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut polygon = initial;
    let mut clips = 0usize;

    for other in others {
        if other == site {
            continue;
        }

        polygon = clip_polygon(polygon, &HalfPlane::bisector(site, other));
        clips += 1;

        if polygon.is_empty() {
            tracing::debug!(x = site.x, y = site.y, clips, "cell clipped away");
            return polygon;
        }
    }

    tracing::trace!(x = site.x, y = site.y, clips, vertices = polygon.len(), "cell built");
    polygon
}
