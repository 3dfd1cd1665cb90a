use std::iter::Sum;

use num::Float;

/// Centroid of area over a discretized membership function:
/// `Σ(y_i · μ_i) / Σ(μ_i)`.
///
/// Returns `None` when the membership is zero everywhere, which the engine
/// surfaces as `NoRuleFired` instead of dividing by zero.
pub(crate) fn centroid<F: Float + Sum>(universe: &[F], membership: &[F]) -> Option<F> {
    let den: F = membership.iter().copied().sum();

    if den == F::zero() {
        return None;
    }

    let num: F = universe
        .iter()
        .copied()
        .zip(membership.iter().copied())
        .map(|(y, m)| y * m)
        .sum();

    Some(num / den)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::centroid;
    use crate::linspace::Linspace;
    use crate::math::sample;
    use crate::terms::Shape;

    #[test]
    fn uniform_membership_centers_on_the_domain() {
        let universe = [0., 1., 2., 3., 4.];
        let membership = [1., 1., 1., 1., 1.];

        assert_eq!(centroid(&universe, &membership), Some(2.));
    }

    #[test]
    fn zero_membership_has_no_centroid() {
        let universe = [0., 1., 2.];
        let membership = [0., 0., 0.];

        assert_eq!(centroid::<f64>(&universe, &membership), None);
    }

    #[test]
    fn symmetric_triangle_centers_on_its_peak() {
        let universe: Vec<f64> = Linspace::new(0., 100., 101).collect();
        let shape = Shape::triangle(20., 50., 80.).unwrap();
        let membership = sample(&shape.coords(), universe.iter().copied());
        let center = centroid(&universe, &membership).unwrap();

        assert_relative_eq!(center, 50., epsilon = 1e-9);
    }
}
