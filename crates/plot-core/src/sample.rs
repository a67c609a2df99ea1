// File: crates/plot-core/src/sample.rs
// Summary: Fixed-resolution sample of sin(x) over a closed interval.

use crate::grid::linspace;
use crate::series::Series;

/// Number of abscissas in the standard sample.
pub const SAMPLE_COUNT: usize = 100;
/// Closed domain of the standard sample.
pub const DOMAIN: (f64, f64) = (0.0, 10.0);

/// Evenly spaced abscissas paired with their sine values.
/// Built once and never mutated; convert into a [`Series`] to render it.
#[derive(Clone, Debug, PartialEq)]
pub struct SineSample {
    points: Vec<(f64, f64)>,
}

impl SineSample {
    pub fn new(start: f64, end: f64, count: usize) -> Self {
        let points = linspace(start, end, count)
            .into_iter()
            .map(|x| (x, x.sin()))
            .collect();
        Self { points }
    }

    /// 100 points over `[0, 10]`.
    pub fn standard() -> Self {
        Self::new(DOMAIN.0, DOMAIN.1, SAMPLE_COUNT)
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn points(&self) -> &[(f64, f64)] { &self.points }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ { self.points.iter().map(|p| p.0) }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ { self.points.iter().map(|p| p.1) }

    /// First and last abscissa, or `None` for an empty sample.
    pub fn domain(&self) -> Option<(f64, f64)> {
        Some((self.points.first()?.0, self.points.last()?.0))
    }

    pub fn into_series(self) -> Series {
        Series::line(self.points)
    }
}
