use geo_types::{Coord, Point};

/// 2D Point (X,Y).
pub type Point2 = [f64; 2];

/// 3D Point (X,Y,Z).
pub type Point3 = [f64; 3];

pub trait ToPoint2 {
    fn to_p2(self) -> Point2;
}

impl ToPoint2 for Point2 {
    fn to_p2(self) -> Point2 {
        self
    }
}
impl ToPoint2 for Point3 {
    fn to_p2(self) -> Point2 {
        let [x, y, _] = self;
        [x, y]
    }
}
impl ToPoint2 for &Point3 {
    fn to_p2(self) -> Point2 {
        (*self).to_p2()
    }
}
impl ToPoint2 for Coord<f64> {
    fn to_p2(self) -> Point2 {
        [self.x, self.y]
    }
}
impl ToPoint2 for &Coord<f64> {
    fn to_p2(self) -> Point2 {
        (*self).to_p2()
    }
}
impl ToPoint2 for Point<f64> {
    fn to_p2(self) -> Point2 {
        self.0.to_p2()
    }
}
impl ToPoint2 for &Point<f64> {
    fn to_p2(self) -> Point2 {
        self.0.to_p2()
    }
}

pub trait WithZ: ToPoint2 + Sized {
    fn with_z(self, z: f64) -> Point3 {
        let [x, y] = self.to_p2();
        [x, y, z]
    }
}

impl WithZ for Point2 {}
impl WithZ for Point3 {}
impl WithZ for Coord<f64> {}
impl WithZ for &Coord<f64> {}
impl WithZ for &Point<f64> {}

/// Lift an external coordinate into a host point on the `Z = 0` plane.
pub fn flat(c: impl WithZ) -> Point3 {
    c.with_z(0.0)
}
