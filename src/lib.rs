//! Conversion between feature geometry (parts of 3D points) and the `geo-types` object graph.
//!
//! Host geometry is imported into `geo-types` with [`import_geometry`], handed to whatever
//! algorithm needs it, and brought back with [`export_geometry`]. [`apply`] does all three in
//! one call.
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod batch;
mod error;
mod export;
pub mod factory;
mod feature;
mod import;
mod point;
mod profile;
mod seq;

pub use batch::*;
pub use error::*;
pub use export::*;
pub use factory::{GeoFactory, GeometryFactory};
pub use feature::*;
pub use import::*;
pub use point::*;
pub use profile::*;
pub use seq::*;

/// The external geometry type this crate converts to and from.
pub type Geometry = geo_types::Geometry<f64>;

/// Import `input`, run `op` on the external geometry, and export the result into a new
/// [`FeatureGeometry`].
///
/// # Example
/// ```rust
/// use geom_bridge::*;
///
/// let input = FeatureGeometry::from_iter([vec![[0.0, 0.0, 5.0], [1.0, 1.0, 5.0]]]);
/// let profile = FeatureProfile::new(GeometryType::Point);
///
/// let output = apply(&input, &profile, |g| g).unwrap();
/// assert_eq!(output.parts(), &[vec![[0.0, 0.0, 0.0], [1.0, 1.0, 0.0]]]);
/// ```
pub fn apply<F>(input: &FeatureGeometry, profile: &FeatureProfile, op: F) -> Result<FeatureGeometry>
where
    F: FnOnce(Geometry) -> Geometry,
{
    let geometry = op(import_geometry(input, profile)?);
    let mut output = FeatureGeometry::new();
    export_geometry(&geometry, &mut output)?;
    Ok(output)
}

#[cfg(test)]
#[derive(Clone, Debug)]
struct PartGen {
    pub points: Vec<Point3>,
}

#[cfg(test)]
impl quickcheck::Arbitrary for PartGen {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // keep the values finite and modest so equality comparisons stay exact
        let len = usize::arbitrary(g) % 8;
        let mut coord = || (i32::arbitrary(g) % 10_000) as f64 * 0.25;
        let points = std::iter::repeat_with(|| [coord(), coord(), coord()])
            .take(len)
            .collect();
        Self { points }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let points = self.points.clone();
        Box::new((0..points.len()).rev().map(move |n| Self {
            points: points[..n].to_vec(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_round_trips_a_polygon() {
        let input = FeatureGeometry::from_iter([
            vec![[0.0, 0.0, 1.0], [4.0, 0.0, 1.0], [4.0, 4.0, 1.0], [0.0, 4.0, 1.0]],
            vec![[1.0, 1.0, 1.0], [1.0, 2.0, 1.0], [2.0, 2.0, 1.0], [2.0, 1.0, 1.0]],
        ]);
        let profile = FeatureProfile::new(GeometryType::Polygon);

        // unwrap the multi polygon so the clearing polygon path is taken
        let output = apply(&input, &profile, |g| match g {
            Geometry::MultiPolygon(mut mp) => Geometry::Polygon(mp.0.remove(0)),
            g => g,
        })
        .unwrap();

        assert_eq!(output.len(), 2);
        assert_eq!(output.parts()[0].len(), 5);
        assert_eq!(output.parts()[1].len(), 5);
        assert_eq!(output.parts()[0][4], [0.0, 0.0, 0.0]);
        assert_eq!(output.parts()[1][0], [1.0, 1.0, 0.0]);
    }

    #[test]
    fn apply_propagates_import_errors() {
        let input = FeatureGeometry::from_iter([vec![[0.0; 3], [1.0; 3]]]);
        let profile = FeatureProfile::new(GeometryType::Unknown);
        let mut called = false;

        let r = apply(&input, &profile, |g| {
            called = true;
            g
        });

        assert_eq!(r, Err(Error::UnsupportedKind(GeometryType::Unknown)));
        assert!(!called);
    }

    #[test]
    fn apply_reports_unsupported_results() {
        let input = FeatureGeometry::from_iter([vec![[0.0; 3], [1.0; 3]]]);
        let profile = FeatureProfile::new(GeometryType::Line);

        let r = apply(&input, &profile, |g| g);

        assert_eq!(r, Err(Error::UnsupportedExport("MultiLineString")));
    }
}
