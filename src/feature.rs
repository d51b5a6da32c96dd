use crate::*;

/// One ring, line, or point cluster of a feature.
pub type Part = Vec<Point3>;

/// A feature's geometry as an ordered sequence of [`Part`]s.
///
/// What the parts _mean_ is not stored here; it comes from the
/// [`FeatureProfile`] the geometry is paired with. For polygons a part is a shell when wound
/// counter-clockwise and a hole of the preceding shell when wound clockwise (see [`is_ccw`]).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FeatureGeometry(Vec<Part>);

impl FeatureGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn parts(&self) -> &[Part] {
        &self.0
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[Point3]> + '_ {
        self.0.iter().map(Vec::as_slice)
    }

    pub fn push(&mut self, part: Part) {
        self.0.push(part)
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }

    pub fn into_parts(self) -> Vec<Part> {
        self.0
    }
}

impl From<Vec<Part>> for FeatureGeometry {
    fn from(parts: Vec<Part>) -> Self {
        Self(parts)
    }
}

impl FromIterator<Part> for FeatureGeometry {
    fn from_iter<I: IntoIterator<Item = Part>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Part> for FeatureGeometry {
    fn extend<I: IntoIterator<Item = Part>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl IntoIterator for FeatureGeometry {
    type Item = Part;
    type IntoIter = std::vec::IntoIter<Self::Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FeatureGeometry {
    type Item = &'a Part;
    type IntoIter = std::slice::Iter<'a, Part>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Twice the signed plan area of a part, treating it as a closed ring.
///
/// Positive when the points wind counter-clockwise, negative when clockwise. A part that
/// already repeats its first point contributes a zero-length closing edge, so closed and open
/// rings give the same result.
///
/// # Example
/// ```rust
/// # use geom_bridge::*;
/// let ccw = [[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [2.0, 3.0, 0.0], [0.0, 3.0, 0.0]];
/// assert!((signed_area(&ccw) - 12.0).abs() < 1e-9);
/// ```
pub fn signed_area(part: &[Point3]) -> f64 {
    let Some(first) = part.first() else {
        return 0.0;
    };

    part.iter()
        .zip(part.iter().skip(1).chain(std::iter::once(first)))
        .map(|(a, b)| {
            let [ax, ay] = a.to_p2();
            let [bx, by] = b.to_p2();
            ax * by - ay * bx
        })
        .sum()
}

/// Is the part wound counter-clockwise?
///
/// Parts with no area (fewer than 3 distinct points, or collinear) are **not** counter-clockwise
/// and so are treated as holes on polygon import.
pub fn is_ccw(part: &[Point3]) -> bool {
    signed_area(part) > 0.0
}
