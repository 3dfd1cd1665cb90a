use num::Float;

/// Evenly spaced samples over `[min, max]`, endpoints included, computed
/// the way `numpy.linspace` does.
pub(crate) struct Linspace<F> {
    start: F,
    step: F,
    index: usize,
    len: usize,
}

impl<F: Float> Linspace<F> {
    pub fn new(min: F, max: F, n: usize) -> Self {
        let step = if n > 1 {
            let num_steps = F::from(n - 1).expect("sample count to fit in a float");
            (max - min) / num_steps
        } else {
            F::zero()
        };
        Linspace {
            start: min,
            step,
            index: 0,
            len: n,
        }
    }
}

impl<F: Float> Iterator for Linspace<F> {
    type Item = F;

    #[inline]
    fn next(&mut self) -> Option<F> {
        if self.index >= self.len {
            None
        } else {
            let i = self.index;
            self.index += 1;
            Some(self.start + self.step * F::from(i).expect("sample index to fit in a float"))
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

#[cfg(test)]
mod tests {
    use super::Linspace;

    #[test]
    fn endpoints_are_exact() {
        let samples: Vec<f64> = Linspace::new(0., 100., 101).collect();

        assert_eq!(samples.len(), 101);
        assert_eq!(samples[0], 0.);
        assert_eq!(samples[50], 50.);
        assert_eq!(samples[100], 100.);
    }

    #[test]
    fn single_sample_is_the_start() {
        let samples: Vec<f64> = Linspace::new(3., 9., 1).collect();

        assert_eq!(samples, vec![3.]);
    }
}
