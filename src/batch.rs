use crate::*;
use rayon::prelude::*;

/// Import a layer of features in parallel. Results are in the same order as `features`.
pub fn import_all(features: &[FeatureGeometry], profile: &FeatureProfile) -> Vec<Result<Geometry>> {
    features
        .par_iter()
        .map(|f| import_geometry(f, profile))
        .collect()
}

/// Export many geometries in parallel, each into its own [`FeatureGeometry`].
/// Results are in the same order as `geometries`.
pub fn export_all(geometries: &[Geometry]) -> Vec<Result<FeatureGeometry>> {
    geometries
        .par_iter()
        .map(|g| {
            let mut f = FeatureGeometry::new();
            export_geometry(g, &mut f).map(|_| f)
        })
        .collect()
}
