use num::Float;

/// Piecewise-linear evaluation of `coords` at `x`, with `numpy.interp`
/// semantics: values beyond either end saturate to the end degree.
///
/// `coords` must be non-empty with strictly increasing x values.
pub(crate) fn interp_at<F: Float>(coords: &[(F, F)], x: F) -> F {
    let (first_x, first_y) = coords[0];
    let (last_x, last_y) = coords[coords.len() - 1];

    if x <= first_x {
        return first_y;
    }
    if x >= last_x {
        return last_y;
    }

    for pair in coords.windows(2) {
        let (x1, y1) = pair[0];
        let (x2, y2) = pair[1];

        if x1 <= x && x <= x2 {
            return y1 + (x - x1) * (y2 - y1) / (x2 - x1);
        }
    }

    last_y
}

/// Samples `coords` at every point of `xs`.
pub(crate) fn sample<F: Float>(coords: &[(F, F)], xs: impl IntoIterator<Item = F>) -> Vec<F> {
    xs.into_iter().map(|x| interp_at(coords, x)).collect()
}

#[cfg(test)]
mod tests {
    use super::{interp_at, sample};

    #[test]
    fn test_interp_at() {
        let coords = [(1., 3.), (2., 2.), (3., 0.)];

        assert_eq!(interp_at(&coords, 0.), 3.);
        assert_eq!(interp_at(&coords, 1.), 3.);
        assert_eq!(interp_at(&coords, 1.5), 2.5);
        assert_eq!(interp_at(&coords, 2.72), 0.5599999999999996);
        assert_eq!(interp_at(&coords, 3.24), 0.);

        let coords = [(0., 0.), (1., 2.), (2., 5.), (3., 3.), (4.5, 2.)];

        assert_eq!(interp_at(&coords, 2.5), 4.);
        assert_eq!(interp_at(&coords, -1.), 0.);
        assert_eq!(interp_at(&coords, 7.5), 2.);
    }

    #[test]
    fn single_coord_saturates_everywhere() {
        let coords = [(2., 1.)];

        assert_eq!(interp_at(&coords, 1.), 1.);
        assert_eq!(interp_at(&coords, 2.), 1.);
        assert_eq!(interp_at(&coords, 3.), 1.);
    }

    #[test]
    fn test_sample() {
        let coords = [(0., 0.), (2., 1.), (4., 0.)];

        assert_eq!(sample(&coords, [0., 1., 2., 3., 4.]), vec![0., 0.5, 1., 0.5, 0.]);
    }
}
