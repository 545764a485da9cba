use crate::config::BoundsConfig;
use crate::error::{Result, VoronoiError};
use crate::geometry::{Point, Polygon};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle that bounds every cell of a diagram.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Derives the padded box around `sites`.
    ///
    /// Each axis is padded by `max(extent, min_size) * padding_factor` on both sides,
    /// so the result has strictly positive width and height even for collinear or
    /// single-site input. Fails only on an empty slice.
    pub fn from_sites(sites: &[Point], config: &BoundsConfig) -> Result<Self> {
        let tight = Self::enclosing(sites)
            .ok_or(VoronoiError::InsufficientInput { required: 1, found: 0 })?;

        let pad_x = tight.width().max(config.min_size) * config.padding_factor;
        let pad_y = tight.height().max(config.min_size) * config.padding_factor;

        Ok(Self::new(
            tight.min_x - pad_x,
            tight.min_y - pad_y,
            tight.max_x + pad_x,
            tight.max_y + pad_y,
        ))
    }

    /// Smallest box containing all `points`, `None` if there are none.
    pub fn enclosing<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let init = Self::new(first.x, first.y, first.x, first.y);
        Some(iter.fold(init, |b, p| {
            Self::new(b.min_x.min(p.x), b.min_y.min(p.y), b.max_x.max(p.x), b.max_y.max(p.y))
        }))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new((self.min_x + self.max_x) * 0.5, (self.min_y + self.max_y) * 0.5)
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min_x && point.x <= self.max_x && point.y >= self.min_y && point.y <= self.max_y
    }

    /// The four corners, starting at `(min_x, min_y)` and walking along +x first.
    ///
    /// This is clockwise in screen coordinates (y down) and counter-clockwise with y up.
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(vec![
            Point::new(self.min_x, self.min_y), // 0: Bottom-Left
            Point::new(self.max_x, self.min_y), // 1: Bottom-Right
            Point::new(self.max_x, self.max_y), // 2: Top-Right
            Point::new(self.min_x, self.max_y), // 3: Top-Left
        ])
    }
}
