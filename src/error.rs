use crate::GeometryType;
use thiserror::Error;

/// Errors returned from conversions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The profile's geometry type has no import path.
    #[error("cannot import geometry of type {0:?}")]
    UnsupportedKind(GeometryType),

    /// The external geometry variant has no export path. Holds the variant name.
    #[error("export of {0} geometry is not yet implemented")]
    UnsupportedExport(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
