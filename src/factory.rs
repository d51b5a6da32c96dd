//! Construction of external geometry.
//!
//! The importer only ever builds geometry through a [`GeometryFactory`], so anything that can
//! make points, lines, rings, polygons and their multi forms can be imported into.
//! [`GeoFactory`] does this for `geo-types`.
use crate::*;
use geo_types::{Coord, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};

/// Builds an external geometry graph from coordinate sequences.
pub trait GeometryFactory {
    type Point;
    type LineString;
    type LinearRing;
    type Polygon;
    /// The aggregate geometry returned from an import.
    type Geometry;

    fn create_point(&self, p: Point3) -> Self::Point;

    fn create_line_string(&self, seq: CoordSeq) -> Self::LineString;

    /// The sequence is expected to be closed already (see [`coord_seq`]).
    fn create_linear_ring(&self, seq: CoordSeq) -> Self::LinearRing;

    fn create_polygon(&self, shell: Self::LinearRing, holes: Vec<Self::LinearRing>)
        -> Self::Polygon;

    fn create_multi_point(&self, points: Vec<Self::Point>) -> Self::Geometry;

    fn create_multi_line_string(&self, lines: Vec<Self::LineString>) -> Self::Geometry;

    fn create_multi_polygon(&self, polygons: Vec<Self::Polygon>) -> Self::Geometry;
}

/// A [`GeometryFactory`] producing `geo-types` geometry.
///
/// `geo-types` is planar so Z is dropped; X and Y are passed through the factory's
/// [`PrecisionModel`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GeoFactory {
    precision: PrecisionModel,
}

impl GeoFactory {
    pub fn new(precision: PrecisionModel) -> Self {
        Self { precision }
    }

    fn coord(&self, p: Point3) -> Coord<f64> {
        let [x, y] = p.to_p2();
        Coord {
            x: self.precision.make_precise(x),
            y: self.precision.make_precise(y),
        }
    }

    fn line(&self, seq: CoordSeq) -> LineString<f64> {
        seq.into_iter().map(|p| self.coord(p)).collect()
    }
}

impl GeometryFactory for GeoFactory {
    type Point = Point<f64>;
    type LineString = LineString<f64>;
    type LinearRing = LineString<f64>;
    type Polygon = Polygon<f64>;
    type Geometry = Geometry;

    fn create_point(&self, p: Point3) -> Self::Point {
        Point(self.coord(p))
    }

    fn create_line_string(&self, seq: CoordSeq) -> Self::LineString {
        self.line(seq)
    }

    fn create_linear_ring(&self, seq: CoordSeq) -> Self::LinearRing {
        self.line(seq)
    }

    fn create_polygon(&self, shell: Self::LinearRing, holes: Vec<Self::LinearRing>) -> Polygon<f64> {
        Polygon::new(shell, holes)
    }

    fn create_multi_point(&self, points: Vec<Self::Point>) -> Self::Geometry {
        Geometry::MultiPoint(MultiPoint(points))
    }

    fn create_multi_line_string(&self, lines: Vec<Self::LineString>) -> Self::Geometry {
        Geometry::MultiLineString(MultiLineString(lines))
    }

    fn create_multi_polygon(&self, polygons: Vec<Self::Polygon>) -> Self::Geometry {
        Geometry::MultiPolygon(MultiPolygon(polygons))
    }
}
