//! Planar primitives shared by every stage of the diagram construction.
//!
//! All tolerance handling lives here: [`EPSILON`] drives both the inside/outside
//! classification of the clipper and the collapsing of near-duplicate vertices,
//! and [`canonical_key`] rounds to the same precision for segment deduplication.

use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of decimal digits kept by [`canonical_key`].
pub const PRECISION_DIGITS: i32 = 9;

/// Geometric tolerance, `10^-PRECISION_DIGITS`.
pub const EPSILON: f64 = 1e-9;

const KEY_SCALE: f64 = 1e9;

/// A 2D point (or vector) with finite coordinates.
///
/// Equality and hashing use the exact coordinate pair, which is what site lookup
/// needs. Vertices produced by clipping should be compared with [`Point::nearly_equal`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn norm_sq(&self) -> f64 {
        self.dot(self)
    }

    pub fn sub(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn distance_sq(&self, other: &Point) -> f64 {
        self.sub(other).norm_sq()
    }

    /// Whether two points lie within [`EPSILON`] of each other.
    pub fn nearly_equal(&self, other: &Point) -> bool {
        self.distance_sq(other) <= EPSILON * EPSILON
    }

    /// Linear interpolation, `self + t * (other - self)`.
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new(
            self.x + t * (other.x - self.x),
            self.y + t * (other.y - self.y),
        )
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // -0.0 == 0.0, so both must hash alike.
        let x = if self.x == 0.0 { 0.0f64 } else { self.x };
        let y = if self.y == 0.0 { 0.0f64 } else { self.y };
        x.to_bits().hash(state);
        y.to_bits().hash(state);
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Rounded key of a point at [`PRECISION_DIGITS`] decimals.
///
/// Each coordinate is scaled, rounded and mapped to a `u64` that sorts like the
/// rounded value, so distinct rounded coordinates never share a key.
pub fn canonical_key(point: &Point) -> (u64, u64) {
    (ordered_bits(point.x), ordered_bits(point.y))
}

fn ordered_bits(value: f64) -> u64 {
    let rounded = (value * KEY_SCALE).round();
    // -0.0 and 0.0 share a key.
    let bits = if rounded == 0.0 { 0u64 } else { rounded.to_bits() };
    if bits >> 63 == 1 { !bits } else { bits | 1 << 63 }
}

/// An undirected diagram edge.
///
/// `Segment::new(a, b) == Segment::new(b, a)`; hashing agrees with that.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// The segment with its endpoints ordered by [`canonical_key`].
    pub fn canonical(&self) -> Segment {
        if canonical_key(&self.start) <= canonical_key(&self.end) {
            *self
        } else {
            Segment::new(self.end, self.start)
        }
    }

    /// Orientation independent key used to merge the two copies of a shared edge.
    pub fn key(&self) -> ((u64, u64), (u64, u64)) {
        let a = canonical_key(&self.start);
        let b = canonical_key(&self.end);
        if a <= b { (a, b) } else { (b, a) }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_sq(&self.end).sqrt()
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }
}

impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut a = self.start;
        let mut b = self.end;
        if (b.x, b.y) < (a.x, a.y) {
            std::mem::swap(&mut a, &mut b);
        }
        a.hash(state);
        b.hash(state);
    }
}

/// An implicitly closed polygon: edge `i` runs from vertex `i` to vertex `(i + 1) % n`.
///
/// An empty vertex list is the empty cell.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges in traversal order, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Shoelace area, positive for counter-clockwise winding (y up).
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }

        let mut area = 0.0;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            area += a.x * b.y - b.x * a.y;
        }
        area * 0.5
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Area centroid. Falls back to the vertex average for degenerate polygons.
    pub fn centroid(&self) -> Option<Point> {
        let n = self.vertices.len();
        if n == 0 {
            return None;
        }

        let mut cx = 0.0;
        let mut cy = 0.0;
        let mut area = 0.0;

        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let cross = a.x * b.y - b.x * a.y;
            area += cross;
            cx += (a.x + b.x) * cross;
            cy += (a.y + b.y) * cross;
        }

        if area.abs() < EPSILON {
            let sx: f64 = self.vertices.iter().map(|p| p.x).sum();
            let sy: f64 = self.vertices.iter().map(|p| p.y).sum();
            return Some(Point::new(sx / n as f64, sy / n as f64));
        }

        let factor = 1.0 / (3.0 * area);
        Some(Point::new(cx * factor, cy * factor))
    }

    /// Point-in-polygon by ray casting. Boundary points may land either way.
    pub fn contains(&self, point: &Point) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[j];
            if (a.y > point.y) != (b.y > point.y) {
                let x = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if point.x < x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Self {
        Polygon::new(vertices)
    }
}
