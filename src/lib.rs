//! # voroplane
//!
//! `voroplane` computes bounded planar Voronoi diagrams by direct geometric construction,
//! designed to be used in Rust as well as compiled to WebAssembly (WASM). Every cell is the
//! padded bounding box of all sites clipped by the perpendicular bisector half-plane of
//! each other site.
//!
//! ## Features
//!
//! - **Simple and verifiable**: Sutherland-Hodgman clipping against half-planes, no sweep line.
//! - **Parallel**: cells are independent and are built on the `rayon` thread pool.
//! - **Render ready**: the unique cell boundary segments are extracted once, shared edges included once.
//! - **WASM-first**: Built with `wasm-bindgen` for seamless integration with JavaScript and TypeScript.
//!
//! ## Example
//!
//! ```
//! use voroplane::{Point, build_diagram};
//!
//! let sites = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 8.0)];
//! let diagram = build_diagram(&sites).unwrap();
//! assert_eq!(diagram.count_cells(), 3);
//! ```
//!
//! See `demos/diagram_svg.rs` for SVG plotting.
//!
//! ## Main Interface
//!
//! The primary entry points are [`compute_cells`] and [`build_diagram`]; the latter returns a
//! [`VoronoiDiagram`]. Construction strategies plug in through [`VoronoiAlgorithm`].

mod algorithm;
mod bounds;
mod cell;
pub mod clip;
mod config;
mod diagram;
mod error;
mod geometry;
pub mod sites;
pub mod wasm;

pub use algorithm::compute_cells;
pub use algorithm::CellMap;
pub use algorithm::HalfPlaneAlgorithm;
pub use algorithm::VoronoiAlgorithm;
pub use algorithm::MIN_SITES;
pub use bounds::BoundingBox;
pub use cell::build_cell;
pub use cell::clip_by_neighbors;
pub use cell::Cell;
pub use config::BoundsConfig;
pub use config::DiagramConfig;
pub use config::DEFAULT_MIN_SIZE;
pub use config::DEFAULT_PADDING_FACTOR;
pub use diagram::build_diagram;
pub use diagram::extract_segments;
pub use diagram::VoronoiDiagram;
pub use error::Result;
pub use error::VoronoiError;
pub use geometry::canonical_key;
pub use geometry::Point;
pub use geometry::Polygon;
pub use geometry::Segment;
pub use geometry::EPSILON;
pub use geometry::PRECISION_DIGITS;
