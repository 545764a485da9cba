use std::collections::BTreeMap;

use crate::algorithm::{CellMap, HalfPlaneAlgorithm, VoronoiAlgorithm};
use crate::bounds::BoundingBox;
use crate::cell::Cell;
use crate::config::DiagramConfig;
use crate::error::Result;
use crate::geometry::{Point, Polygon, Segment};

/// A finished, immutable Voronoi diagram.
///
/// Holds the sites in input order, the polygon of each site and the unique
/// boundary segments of all cells. Rebuild from scratch to change anything.
#[derive(Clone, Debug, PartialEq)]
pub struct VoronoiDiagram {
    sites: Vec<Point>,
    cells: CellMap,
    segments: Vec<Segment>,
    bounds: BoundingBox,
}

impl VoronoiDiagram {
    /// Builds the diagram with the default [`HalfPlaneAlgorithm`].
    pub fn build(sites: &[Point]) -> Result<Self> {
        Self::build_with(&HalfPlaneAlgorithm::default(), sites)
    }

    pub fn build_with_config(sites: &[Point], config: DiagramConfig) -> Result<Self> {
        Self::build_with(&HalfPlaneAlgorithm::new(config), sites)
    }

    /// Builds the diagram with any cell construction strategy.
    pub fn build_with<A: VoronoiAlgorithm + ?Sized>(algorithm: &A, sites: &[Point]) -> Result<Self> {
        let cells = algorithm.compute_cells(sites)?;
        let segments = extract_segments(sites, &cells);

        let bounds = BoundingBox::enclosing(
            sites.iter().chain(cells.values().flat_map(|p| p.vertices().iter())),
        )
        .unwrap_or_else(|| BoundingBox::new(0.0, 0.0, 0.0, 0.0));

        tracing::debug!(
            sites = sites.len(),
            cells = cells.len(),
            segments = segments.len(),
            ?bounds,
            "voronoi diagram built"
        );

        Ok(Self {
            sites: sites.to_vec(),
            cells,
            segments,
            bounds,
        })
    }

    pub fn sites(&self) -> &[Point] {
        &self.sites
    }

    pub fn cells(&self) -> &CellMap {
        &self.cells
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Extent of all sites and cell vertices.
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn count_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, site: &Point) -> Option<&Polygon> {
        self.cells.get(site)
    }

    /// Cells in site order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (&Point, &Polygon)> + '_ {
        self.sites
            .iter()
            .filter_map(|site| self.cells.get(site).map(|polygon| (site, polygon)))
    }

    /// Owned cells in site order.
    pub fn to_cells(&self) -> Vec<Cell> {
        self.iter_cells()
            .map(|(site, polygon)| Cell::new(*site, polygon.clone()))
            .collect()
    }

    /// The site whose cell contains `point`, i.e. the nearest site.
    ///
    /// Returns `None` for points outside [`VoronoiDiagram::bounds`].
    pub fn site_at(&self, point: &Point) -> Option<Point> {
        if !self.bounds.contains(point) {
            return None;
        }
        self.sites
            .iter()
            .min_by(|a, b| a.distance_sq(point).total_cmp(&b.distance_sq(point)))
            .copied()
    }

    /// One step of Lloyd's relaxation.
    ///
    /// Returns the centroid of every cell in site order; sites whose cell is empty
    /// stay where they are. Feed the result to [`VoronoiDiagram::build`] for the next diagram.
    pub fn relaxed_sites(&self) -> Vec<Point> {
        self.sites
            .iter()
            .map(|site| {
                self.cells
                    .get(site)
                    .and_then(Polygon::centroid)
                    .unwrap_or(*site)
            })
            .collect()
    }
}

/// Collects the unique edges of all cell polygons.
///
/// An edge shared by two neighboring cells is traversed in opposite directions and
/// with slightly different rounding; both copies map to the same key of
/// [`Segment::key`] and are emitted once. Output is ordered by that key.
pub fn extract_segments(sites: &[Point], cells: &CellMap) -> Vec<Segment> {
    let mut unique: BTreeMap<((u64, u64), (u64, u64)), Segment> = BTreeMap::new();

    for polygon in sites.iter().filter_map(|site| cells.get(site)) {
        if polygon.len() < 2 {
            continue;
        }
        for edge in polygon.edges() {
            unique.entry(edge.key()).or_insert_with(|| edge.canonical());
        }
    }

    unique.into_values().collect()
}

/// Builds the full diagram of `sites` with default settings.
pub fn build_diagram(sites: &[Point]) -> Result<VoronoiDiagram> {
    VoronoiDiagram::build(sites)
}
