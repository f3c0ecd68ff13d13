use super::Objective;

/// Adapter that lets a plain `Fn(f64) -> f64` act as an [`Objective<1>`].
///
/// The one-dimensional searches are defined over `[f64; 1]` points like every
/// other solver; this wrapper saves callers from writing `|x| f(x[0])`.
#[derive(Debug, Clone, Copy)]
pub struct Scalar<F>(pub F);

impl<F> Objective<1> for Scalar<F>
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: &[f64; 1]) -> f64 {
        (self.0)(x[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn scalar_closure_reads_first_coordinate() {
        let shifted = Scalar(|x: f64| (x - 2.0).powi(2));

        assert_relative_eq!(shifted.value(&[2.0]), 0.0);
        assert_relative_eq!(shifted.value(&[5.0]), 9.0);
    }
}
