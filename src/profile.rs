use serde::{Deserialize, Serialize};

/// The declared kind of a feature's geometry.
///
/// This is supplied by the caller and is **not** checked against the data.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryType {
    #[default]
    Unknown,
    Point,
    Line,
    Polygon,
}

/// How coordinates are rounded when external geometry is built.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecisionModel {
    /// Full double precision.
    #[default]
    Floating,
    /// Single (`f32`) precision.
    FloatingSingle,
    /// Values are snapped to a grid of `1 / scale`.
    Fixed { scale: f64 },
}

impl PrecisionModel {
    /// Round a value to this model's precision.
    ///
    /// # Example
    /// ```rust
    /// # use geom_bridge::*;
    /// let pm = PrecisionModel::Fixed { scale: 100.0 };
    /// assert_eq!(pm.make_precise(1.23456), 1.23);
    /// assert_eq!(PrecisionModel::Floating.make_precise(1.23456), 1.23456);
    /// ```
    pub fn make_precise(&self, v: f64) -> f64 {
        match *self {
            PrecisionModel::Floating => v,
            PrecisionModel::FloatingSingle => v as f32 as f64,
            PrecisionModel::Fixed { scale } if scale.is_finite() && scale > 0.0 => {
                (v * scale + 0.5).floor() / scale
            }
            // a non-positive scale has no grid to snap to
            PrecisionModel::Fixed { .. } => v,
        }
    }
}

/// Describes the features of a layer: what kind of geometry they hold and how precise it is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureProfile {
    pub geometry_type: GeometryType,
    #[serde(default)]
    pub precision: PrecisionModel,
}

impl FeatureProfile {
    pub fn new(geometry_type: GeometryType) -> Self {
        Self {
            geometry_type,
            precision: PrecisionModel::default(),
        }
    }

    pub fn with_precision(self, precision: PrecisionModel) -> Self {
        Self { precision, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_precision_rounds_half_up() {
        let pm = PrecisionModel::Fixed { scale: 1.0 };
        assert_eq!(pm.make_precise(2.5), 3.0);
        assert_eq!(pm.make_precise(-2.5), -2.0);
        assert_eq!(pm.make_precise(-2.6), -3.0);

        // snap to even numbers
        let pm = PrecisionModel::Fixed { scale: 0.5 };
        assert_eq!(pm.make_precise(1235.0), 1236.0);
        assert_eq!(pm.make_precise(1234.9), 1234.0);
    }

    #[test]
    fn degenerate_scale_is_ignored() {
        assert_eq!(PrecisionModel::Fixed { scale: 0.0 }.make_precise(1.75), 1.75);
        assert_eq!(PrecisionModel::Fixed { scale: -4.0 }.make_precise(1.75), 1.75);
        assert_eq!(PrecisionModel::Fixed { scale: f64::NAN }.make_precise(1.75), 1.75);
    }

    #[test]
    fn single_precision() {
        let v = 0.1f64;
        assert_eq!(PrecisionModel::FloatingSingle.make_precise(v), 0.1f32 as f64);
        assert_ne!(PrecisionModel::FloatingSingle.make_precise(v), v);
    }

    #[test]
    fn profile_builders() {
        let p = FeatureProfile::new(GeometryType::Polygon)
            .with_precision(PrecisionModel::Fixed { scale: 10.0 });
        assert_eq!(p.geometry_type, GeometryType::Polygon);
        assert_eq!(p.precision, PrecisionModel::Fixed { scale: 10.0 });

        assert_eq!(FeatureProfile::default().geometry_type, GeometryType::Unknown);
    }

    #[test]
    fn profile_from_config() {
        let p: FeatureProfile = serde_json::from_str(r#"{ "geometry_type": "polygon" }"#).unwrap();
        assert_eq!(p, FeatureProfile::new(GeometryType::Polygon));

        let p: FeatureProfile = serde_json::from_str(
            r#"{ "geometry_type": "line", "precision": { "fixed": { "scale": 1000.0 } } }"#,
        )
        .unwrap();
        assert_eq!(p.geometry_type, GeometryType::Line);
        assert_eq!(p.precision, PrecisionModel::Fixed { scale: 1000.0 });

        let p: FeatureProfile = serde_json::from_str(
            r#"{ "geometry_type": "point", "precision": "floating_single" }"#,
        )
        .unwrap();
        assert_eq!(p.precision, PrecisionModel::FloatingSingle);

        assert!(serde_json::from_str::<FeatureProfile>(r#"{ "geometry_type": "POLYGON" }"#).is_err());
    }

    #[test]
    fn profile_round_trips() {
        let p = FeatureProfile::new(GeometryType::Point)
            .with_precision(PrecisionModel::Fixed { scale: 0.5 });
        let s = serde_json::to_string(&p).unwrap();
        assert!(s.contains(r#""geometry_type":"point""#));
        assert_eq!(serde_json::from_str::<FeatureProfile>(&s).unwrap(), p);
    }
}
