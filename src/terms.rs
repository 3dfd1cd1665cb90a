pub use fixed_map::Key;
pub use fixed_map::Key as Term;
use fixed_map::Map as FixedMap;

use crate::error::DefinitionError;
use crate::math::interp_at;

/// A piecewise-linear membership function: rises 0 → 1, optionally holds a
/// plateau, and falls 1 → 0. Control points must be finite and
/// non-decreasing; the resulting degree is in [0, 1] everywhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Triangle([f64; 3]),
    Trapezoid([f64; 4]),
}

impl Shape {
    /// A triangular shape peaking at `b`.
    pub fn triangle(a: f64, b: f64, c: f64) -> Result<Self, DefinitionError> {
        Self::check(&[a, b, c])?;

        Ok(Self::Triangle([a, b, c]))
    }

    /// A trapezoidal shape with plateau `[b, c]`.
    pub fn trapezoid(a: f64, b: f64, c: f64, d: f64) -> Result<Self, DefinitionError> {
        Self::check(&[a, b, c, d])?;

        Ok(Self::Trapezoid([a, b, c, d]))
    }

    fn check(points: &[f64]) -> Result<(), DefinitionError> {
        let ordered = points.windows(2).all(|pair| pair[0] <= pair[1]);

        if !ordered || points.iter().any(|p| !p.is_finite()) {
            return Err(DefinitionError::InvalidShape {
                points: points.to_vec(),
            });
        }

        Ok(())
    }

    /// Degree of membership of `x` under this shape. Points beyond the
    /// support saturate to the edge degree, so shoulder shapes such as
    /// `trapezoid(10, 10, 25, 50)` evaluate to 1 left of their plateau.
    pub fn membership(&self, x: f64) -> f64 {
        interp_at(&self.coords(), x)
    }

    /// Control points as (x, degree) pairs. Vertical edges (coincident x
    /// values) collapse to their saturated degree so interpolation stays
    /// defined.
    pub(crate) fn coords(&self) -> Vec<(f64, f64)> {
        let raw = match *self {
            Self::Triangle([a, b, c]) => vec![(a, 0.), (b, 1.), (c, 0.)],
            Self::Trapezoid([a, b, c, d]) => vec![(a, 0.), (b, 1.), (c, 1.), (d, 0.)],
        };
        let mut coords: Vec<(f64, f64)> = Vec::with_capacity(raw.len());

        for (x, y) in raw {
            match coords.last_mut() {
                Some(last) if last.0 == x => last.1 = last.1.max(y),
                _ => coords.push((x, y)),
            }
        }

        coords
    }
}

/// The named categories of one variable, keyed by a [`Key`] enum so that
/// category names are unique by construction.
#[derive(Default)]
pub struct Terms<K: Term>(pub(crate) FixedMap<K, Shape>);

impl<K: Term> Terms<K> {
    pub fn new() -> Self {
        Self(FixedMap::new())
    }

    pub fn insert(&mut self, key: K, shape: Shape) {
        self.0.insert(key, shape);
    }
}

#[cfg(test)]
mod tests {
    use super::Shape;
    use crate::error::DefinitionError;

    #[test]
    fn decreasing_control_points_are_rejected() {
        assert!(matches!(
            Shape::triangle(5., 2., 8.),
            Err(DefinitionError::InvalidShape { .. })
        ));
        assert!(matches!(
            Shape::trapezoid(0., 4., 3., 10.),
            Err(DefinitionError::InvalidShape { .. })
        ));
        assert!(matches!(
            Shape::triangle(0., f64::NAN, 1.),
            Err(DefinitionError::InvalidShape { .. })
        ));
    }

    #[test]
    fn vertical_edges_collapse_to_saturation() {
        let left = Shape::trapezoid(0., 0., 2., 10.).unwrap();
        let right = Shape::trapezoid(50., 70., 100., 100.).unwrap();

        assert_eq!(left.coords(), vec![(0., 1.), (2., 1.), (10., 0.)]);
        assert_eq!(right.coords(), vec![(50., 0.), (70., 1.), (100., 1.)]);
        assert_eq!(left.membership(0.), 1.);
        assert_eq!(right.membership(100.), 1.);
    }

    #[test]
    fn triangle_peaks_at_one_and_dies_outside_support() {
        let tri = Shape::triangle(2., 10., 18.).unwrap();

        assert_eq!(tri.membership(10.), 1.);
        assert_eq!(tri.membership(6.), 0.5);
        assert_eq!(tri.membership(1.), 0.);
        assert_eq!(tri.membership(19.), 0.);
    }

    #[test]
    fn degrees_stay_within_unit_interval() {
        let trap = Shape::trapezoid(10., 18., 60., 60.).unwrap();
        let mut x = -5.;

        while x <= 70. {
            let degree = trap.membership(x);

            assert!((0. ..=1.).contains(&degree), "degree {degree} at {x}");
            x += 0.25;
        }
        assert_eq!(trap.membership(18.), 1.);
        assert_eq!(trap.membership(40.), 1.);
    }
}
