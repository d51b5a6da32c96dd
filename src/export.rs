use crate::*;
use geo_types::{LineString, Polygon};

/// Export `geo-types` geometry into feature geometry.
///
/// Exported points lie on `Z = 0`.
///
/// | input              | effect on `output`                                             |
/// | ------------------ | -------------------------------------------------------------- |
/// | `MultiPoint`       | appends one part holding every point                           |
/// | `Polygon`          | **clears**, then exterior ring followed by interior rings      |
/// | `MultiPolygon`     | appends, for each polygon, exterior ring then interior rings   |
/// | anything else      | untouched, returns [`Error::UnsupportedExport`]                |
///
/// Note the asymmetry between `Polygon` and `MultiPolygon`: only the single polygon replaces
/// what is already in `output`.
pub fn export_geometry(input: &Geometry, output: &mut FeatureGeometry) -> Result<()> {
    let unsupported = |name: &'static str| {
        log::info!("{} export not yet implemented", name);
        Err(Error::UnsupportedExport(name))
    };

    match input {
        Geometry::MultiPoint(mp) => {
            output.push(mp.iter().map(flat).collect());
            Ok(())
        }
        Geometry::Polygon(poly) => {
            output.clear();
            push_polygon(poly, output);
            Ok(())
        }
        Geometry::MultiPolygon(mp) => {
            for poly in mp {
                push_polygon(poly, output);
            }
            Ok(())
        }
        Geometry::Point(_) => unsupported("Point"),
        Geometry::LineString(_) => unsupported("LineString"),
        Geometry::MultiLineString(_) => unsupported("MultiLineString"),
        Geometry::Line(_) => unsupported("Line"),
        Geometry::GeometryCollection(_) => unsupported("GeometryCollection"),
        Geometry::Rect(_) => unsupported("Rect"),
        Geometry::Triangle(_) => unsupported("Triangle"),
    }
}

fn push_polygon(poly: &Polygon<f64>, output: &mut FeatureGeometry) {
    output.push(ring(poly.exterior()));
    output.extend(poly.interiors().iter().map(ring));
}

fn ring(ls: &LineString<f64>) -> Part {
    ls.coords().map(flat).collect()
}
