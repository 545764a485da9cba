/// Errors reported by diagram construction.
///
/// Numerical degeneracies (near-parallel clip edges, cells that clip away) are
/// resolved geometrically and never show up here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VoronoiError {
    /// Fewer distinct sites than the operation needs.
    #[error("at least {required} distinct site(s) required, got {found}")]
    InsufficientInput { required: usize, found: usize },

    /// The site at `index` has a NaN or infinite coordinate.
    #[error("site {index} has a non-finite coordinate")]
    NonFiniteSite { index: usize },

    /// The site at `index` repeats the site at `first`.
    #[error("site {index} duplicates site {first}")]
    DuplicateSite { index: usize, first: usize },

    /// A [`crate::DiagramConfig`] value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, VoronoiError>;
