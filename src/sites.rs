use std::collections::HashMap;
use std::collections::HashSet;

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::bounds::BoundingBox;
use crate::error::{Result, VoronoiError};
use crate::geometry::Point;

const ATTEMPTS_PER_SITE: usize = 1000;

/// Draws allowed before [`random_sites`] stops looking for new distinct sites.
fn attempt_limit(count: usize) -> usize {
    count.saturating_mul(ATTEMPTS_PER_SITE)
}

/// Checks that `sites` are finite, that at least `required` of them are distinct,
/// and that none repeats.
///
/// The distinct count is checked before duplicates, so `[a, a]` with `required = 2`
/// reports [`VoronoiError::InsufficientInput`] and `[a, a, b]` reports
/// [`VoronoiError::DuplicateSite`].
pub fn validate_sites(sites: &[Point], required: usize) -> Result<()> {
    if let Some(index) = sites.iter().position(|p| !p.is_finite()) {
        return Err(VoronoiError::NonFiniteSite { index });
    }

    let mut first_seen: HashMap<Point, usize> = HashMap::with_capacity(sites.len());
    let mut duplicate = None;
    for (index, site) in sites.iter().enumerate() {
        if let Some(&first) = first_seen.get(site) {
            duplicate.get_or_insert(VoronoiError::DuplicateSite { index, first });
        } else {
            first_seen.insert(*site, index);
        }
    }

    if first_seen.len() < required {
        return Err(VoronoiError::InsufficientInput { required, found: first_seen.len() });
    }
    match duplicate {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Generates up to `count` distinct sites uniformly inside `bounds`.
///
/// The same seed always yields the same sites.
pub fn random_sites(count: usize, bounds: &BoundingBox, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let capacity = count.min(1 << 16);
    let mut seen = HashSet::with_capacity(capacity);
    let mut sites = Vec::with_capacity(capacity);

    let w = bounds.width();
    let h = bounds.height();
    let max_attempts = attempt_limit(count);
    let mut attempts = 0;

    while sites.len() < count && attempts < max_attempts {
        attempts += 1;
        let p = Point::new(
            bounds.min_x + rng.r#gen::<f64>() * w,
            bounds.min_y + rng.r#gen::<f64>() * h,
        );
        if seen.insert(p) {
            sites.push(p);
        }
    }

    if sites.len() < count {
        tracing::warn!(requested = count, generated = sites.len(), "random site generation gave up");
    }
    sites
}
