use crate::*;

/// An ordered sequence of coordinates ready to be handed to a [`GeometryFactory`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoordSeq(Vec<Point3>);

impl CoordSeq {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn points(&self) -> &[Point3] {
        &self.0
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Point3> + '_ {
        self.0.iter().copied()
    }

    /// First and last coordinates are equal in plan (and there are more than 2).
    pub fn is_closed(&self) -> bool {
        self.len() > 2 && ends_meet(&self.0)
    }

    pub fn into_inner(self) -> Vec<Point3> {
        self.0
    }
}

impl IntoIterator for CoordSeq {
    type Item = Point3;
    type IntoIter = std::vec::IntoIter<Self::Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Copy a part into a coordinate sequence, keeping order and Z.
///
/// With `close`, a part of 3 or more points whose first and last points differ in X or Y gets a
/// copy of the first point appended. Z is not compared. No other checks are made; degenerate
/// parts are passed through as is.
///
/// # Example
/// ```rust
/// # use geom_bridge::*;
/// let tri = [[0.0, 0.0, 1.0], [1.0, 0.0, 2.0], [0.0, 1.0, 3.0]];
///
/// assert_eq!(coord_seq(&tri, false).len(), 3);
///
/// let closed = coord_seq(&tri, true);
/// assert_eq!(closed.len(), 4);
/// assert_eq!(closed.points()[3], [0.0, 0.0, 1.0]);
/// ```
pub fn coord_seq(points: &[Point3], close: bool) -> CoordSeq {
    let mut coords = Vec::with_capacity(points.len() + usize::from(close));
    coords.extend_from_slice(points);

    if close && coords.len() > 2 && !ends_meet(&coords) {
        coords.push(coords[0]);
    }

    CoordSeq(coords)
}

fn ends_meet(points: &[Point3]) -> bool {
    match (points.first(), points.last()) {
        (Some(a), Some(b)) => a.to_p2() == b.to_p2(),
        _ => false,
    }
}
