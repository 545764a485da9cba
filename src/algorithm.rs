use std::collections::HashMap;

use rayon::prelude::*;

use crate::bounds::BoundingBox;
use crate::cell::Cell;
use crate::config::DiagramConfig;
use crate::error::Result;
use crate::geometry::{Point, Polygon};
use crate::sites::validate_sites;

/// Polygon of every site, keyed by the site.
pub type CellMap = HashMap<Point, Polygon>;

/// Minimum number of distinct sites for any bisector to exist.
pub const MIN_SITES: usize = 2;

/// Trait defining a Voronoi construction strategy.
/// This allows swapping the half-plane construction for other algorithms.
pub trait VoronoiAlgorithm: Send + Sync {
    /// Computes one finite cell per site.
    ///
    /// Fails with [`crate::VoronoiError::InsufficientInput`] for fewer than two distinct sites.
    fn compute_cells(&self, sites: &[Point]) -> Result<CellMap>;
}

/// Builds every cell by intersecting the padded bounding box with the
/// bisector half-planes of all other sites.
///
/// Each cell costs at most `n - 1` clips, so the whole diagram is `O(n³)` in the
/// worst case. Cells are independent and are built on the rayon pool unless
/// [`DiagramConfig::parallel`] is off.
#[derive(Clone, Copy, Debug, Default)]
pub struct HalfPlaneAlgorithm {
    config: DiagramConfig,
}

impl HalfPlaneAlgorithm {
    pub fn new(config: DiagramConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// The padded box every cell starts from.
    pub fn bounds(&self, sites: &[Point]) -> Result<BoundingBox> {
        self.config.validate()?;
        BoundingBox::from_sites(sites, &self.config.bounds)
    }
}

impl VoronoiAlgorithm for HalfPlaneAlgorithm {
    fn compute_cells(&self, sites: &[Point]) -> Result<CellMap> {
        validate_sites(sites, MIN_SITES)?;
        let bounds = self.bounds(sites)?;
        let initial = bounds.to_polygon();

        let build = |site: &Point| {
            let cell = Cell::build(*site, sites, initial.clone());
            (cell.site, cell.polygon)
        };

        let cells: CellMap = if self.config.parallel {
            sites.par_iter().map(&build).collect()
        } else {
            sites.iter().map(&build).collect()
        };
        Ok(cells)
    }
}

/// Computes the cells of `sites` with the default half-plane construction.
pub fn compute_cells(sites: &[Point]) -> Result<CellMap> {
    HalfPlaneAlgorithm::default().compute_cells(sites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VoronoiError;

    #[test]
    fn test_compute_cells_requires_two_sites() {
        assert_eq!(
            compute_cells(&[]),
            Err(VoronoiError::InsufficientInput { required: 2, found: 0 })
        );
        assert_eq!(
            compute_cells(&[Point::new(1.0, 1.0)]),
            Err(VoronoiError::InsufficientInput { required: 2, found: 1 })
        );
    }

    #[test]
    fn test_compute_cells_rejects_bad_config() {
        let algo = HalfPlaneAlgorithm::new(DiagramConfig::default().with_min_size(-1.0));
        let sites = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        assert!(matches!(algo.compute_cells(&sites), Err(VoronoiError::InvalidConfig(_))));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sites: Vec<Point> = (0..40)
            .map(|i| {
                let t = i as f64;
                Point::new((t * 7.3) % 50.0, (t * 13.1) % 50.0 + t * 0.01)
            })
            .collect();

        let parallel = HalfPlaneAlgorithm::new(DiagramConfig::default().with_parallel(true))
            .compute_cells(&sites)
            .unwrap();
        let sequential = HalfPlaneAlgorithm::new(DiagramConfig::default().with_parallel(false))
            .compute_cells(&sites)
            .unwrap();

        assert_eq!(parallel.len(), sites.len());
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_cells_tile_the_bounding_box() {
        let sites = [
            Point::new(1.0, 1.0),
            Point::new(4.0, 2.0),
            Point::new(2.5, 6.0),
            Point::new(7.0, 7.0),
            Point::new(8.0, 1.5),
        ];
        let algo = HalfPlaneAlgorithm::default();
        let bounds = algo.bounds(&sites).unwrap();
        let cells = algo.compute_cells(&sites).unwrap();

        let total: f64 = cells.values().map(|p| p.area()).sum();
        let expected = bounds.width() * bounds.height();
        assert!((total - expected).abs() < 1e-6, "Expected area {}, got {}", expected, total);
    }
}
