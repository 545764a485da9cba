use wasm_bindgen::prelude::*;

use crate::bounds::BoundingBox;
use crate::config::DiagramConfig;
use crate::diagram::VoronoiDiagram;
use crate::geometry::Point;
use crate::sites::random_sites;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

/// Reads `[x, y, x, y, ...]` into points, ignoring a trailing odd value.
pub fn points_from_flat(coords: &[f64]) -> Vec<Point> {
    coords.chunks_exact(2).map(|c| Point::new(c[0], c[1])).collect()
}

/// Flattens points into `[x, y, x, y, ...]`.
pub fn points_to_flat(points: &[Point]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

// --- Bounding Box ---

#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct BoundingBox2D {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

#[wasm_bindgen]
impl BoundingBox2D {
    #[wasm_bindgen(constructor)]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BoundingBox2D {
        BoundingBox2D { min_x, min_y, max_x, max_y }
    }
}

impl From<BoundingBox2D> for BoundingBox {
    fn from(b: BoundingBox2D) -> Self {
        BoundingBox::new(b.min_x, b.min_y, b.max_x, b.max_y)
    }
}

impl From<BoundingBox> for BoundingBox2D {
    fn from(b: BoundingBox) -> Self {
        BoundingBox2D::new(b.min_x, b.min_y, b.max_x, b.max_y)
    }
}

/// Generates `count` distinct random sites inside `bounds` as a flat array.
#[wasm_bindgen(js_name = randomSites)]
pub fn random_sites_flat(count: usize, bounds: BoundingBox2D, seed: u64) -> Vec<f64> {
    points_to_flat(&random_sites(count, &bounds.into(), seed))
}

// --- Diagram ---

#[wasm_bindgen(js_name = Diagram2D)]
pub struct Diagram2D {
    inner: VoronoiDiagram,
}

#[wasm_bindgen(js_class = Diagram2D)]
impl Diagram2D {
    /// Builds the diagram of the flat `[x, y, ...]` sites.
    #[wasm_bindgen(constructor)]
    pub fn new(sites: &[f64], padding_factor: f64, min_size: f64) -> Result<Diagram2D, JsError> {
        let config = DiagramConfig::default()
            .with_padding_factor(padding_factor)
            .with_min_size(min_size);
        Ok(Diagram2D::build(sites, config)?)
    }

    #[wasm_bindgen(getter)]
    pub fn count_cells(&self) -> usize { self.inner.count_cells() }
    #[wasm_bindgen(getter)]
    pub fn count_segments(&self) -> usize { self.inner.segments().len() }
    #[wasm_bindgen(getter)]
    pub fn sites(&self) -> Vec<f64> { points_to_flat(self.inner.sites()) }
    #[wasm_bindgen(getter)]
    pub fn bounds(&self) -> BoundingBox2D { (*self.inner.bounds()).into() }

    /// Vertices of the cell of site `index` as `[x, y, ...]`, empty for an unknown index.
    pub fn cell(&self, index: usize) -> Vec<f64> {
        self.inner
            .sites()
            .get(index)
            .and_then(|site| self.inner.cell(site))
            .map(|polygon| points_to_flat(polygon.vertices()))
            .unwrap_or_default()
    }

    pub fn cell_area(&self, index: usize) -> f64 {
        self.inner
            .sites()
            .get(index)
            .and_then(|site| self.inner.cell(site))
            .map_or(0.0, |polygon| polygon.area())
    }

    /// All unique segments as `[x1, y1, x2, y2, ...]`.
    #[wasm_bindgen(getter)]
    pub fn segments(&self) -> Vec<f64> {
        self.inner
            .segments()
            .iter()
            .flat_map(|s| [s.start.x, s.start.y, s.end.x, s.end.y])
            .collect()
    }

    /// Index of the site nearest to `(x, y)`, `undefined` outside the diagram bounds.
    pub fn site_at(&self, x: f64, y: f64) -> Option<usize> {
        let site = self.inner.site_at(&Point::new(x, y))?;
        self.inner.sites().iter().position(|s| *s == site)
    }

    /// Centroids of all cells, the input of the next Lloyd iteration.
    pub fn relaxed_sites(&self) -> Vec<f64> { points_to_flat(&self.inner.relaxed_sites()) }
}

impl Diagram2D {
    pub fn build(sites: &[f64], config: DiagramConfig) -> crate::Result<Diagram2D> {
        let points = points_from_flat(sites);
        Ok(Diagram2D { inner: VoronoiDiagram::build_with_config(&points, config)? })
    }
}
