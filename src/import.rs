use crate::*;

/// Parts shorter than this are skipped when importing points and lines.
///
/// Note that this also applies to point clusters, so a lone point is never imported.
pub const MIN_PART_LEN: usize = 2;

/// Import feature geometry into `geo-types`.
///
/// The result is always a _multi_ geometry matching the profile's [`GeometryType`]:
/// [`MultiPoint`](geo_types::MultiPoint), [`MultiLineString`](geo_types::MultiLineString) or
/// [`MultiPolygon`](geo_types::MultiPolygon). Coordinates are rounded by the profile's
/// [`PrecisionModel`].
///
/// See [`import_with`] for how parts are interpreted.
pub fn import_geometry(input: &FeatureGeometry, profile: &FeatureProfile) -> Result<Geometry> {
    let factory = GeoFactory::new(profile.precision);
    import_with(input, profile.geometry_type, &factory)
}

/// Import feature geometry using any [`GeometryFactory`].
///
/// - [`GeometryType::Point`]: every point of each part becomes a point of one multi-point.
/// - [`GeometryType::Line`]: each part becomes a line string of one multi-line-string.
/// - [`GeometryType::Polygon`]: each part is closed and classified by winding. A
///   counter-clockwise part starts a new polygon; a clockwise part becomes a hole of the current
///   polygon. Holes that arrive before any shell are dropped.
/// - [`GeometryType::Unknown`]: [`Error::UnsupportedKind`].
///
/// Point and line parts with fewer than [`MIN_PART_LEN`] points are skipped.
pub fn import_with<F: GeometryFactory>(
    input: &FeatureGeometry,
    geometry_type: GeometryType,
    factory: &F,
) -> Result<F::Geometry> {
    match geometry_type {
        GeometryType::Point => Ok(import_points(input, factory)),
        GeometryType::Line => Ok(import_lines(input, factory)),
        GeometryType::Polygon => Ok(import_polygons(input, factory)),
        GeometryType::Unknown => Err(Error::UnsupportedKind(geometry_type)),
    }
}

fn long_enough(part: &&[Point3]) -> bool {
    let ok = part.len() >= MIN_PART_LEN;
    if !ok {
        log::debug!("skipping part with {} point(s)", part.len());
    }
    ok
}

fn import_points<F: GeometryFactory>(input: &FeatureGeometry, factory: &F) -> F::Geometry {
    let points = input
        .iter()
        .filter(long_enough)
        .flat_map(|part| coord_seq(part, false))
        .map(|p| factory.create_point(p))
        .collect();

    factory.create_multi_point(points)
}

fn import_lines<F: GeometryFactory>(input: &FeatureGeometry, factory: &F) -> F::Geometry {
    let lines = input
        .iter()
        .filter(long_enough)
        .map(|part| factory.create_line_string(coord_seq(part, false)))
        .collect();

    factory.create_multi_line_string(lines)
}

fn import_polygons<F: GeometryFactory>(input: &FeatureGeometry, factory: &F) -> F::Geometry {
    let mut polygons = Vec::new();
    let mut shell = None;
    let mut holes = Vec::new();

    for part in input.iter() {
        let ring = factory.create_linear_ring(coord_seq(part, true));

        if is_ccw(part) {
            // a new shell finishes the last polygon
            if let Some(shell) = shell.take() {
                polygons.push(factory.create_polygon(shell, std::mem::take(&mut holes)));
            }
            shell = Some(ring);
        } else if shell.is_some() {
            holes.push(ring);
        } else {
            log::warn!(
                "dropping hole with {} point(s) which has no preceding shell",
                part.len()
            );
        }
    }

    if let Some(shell) = shell {
        polygons.push(factory.create_polygon(shell, holes));
    }

    factory.create_multi_polygon(polygons)
}
