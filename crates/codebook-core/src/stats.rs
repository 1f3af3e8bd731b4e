//! Descriptive statistics over the finite values of a column.

/// Sorted finite sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
    sorted: Vec<f64>,
}

impl Distribution {
    /// Builds a distribution, dropping NaN and infinite values.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let mut sorted: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        sorted.sort_by(f64::total_cmp);
        Self { sorted }
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    pub fn min(&self) -> Option<f64> {
        self.sorted.first().copied()
    }

    pub fn max(&self) -> Option<f64> {
        self.sorted.last().copied()
    }

    pub fn mean(&self) -> Option<f64> {
        if self.sorted.is_empty() {
            return None;
        }
        Some(self.sorted.iter().sum::<f64>() / self.sorted.len() as f64)
    }

    pub fn median(&self) -> Option<f64> {
        self.quantile(0.5)
    }

    /// Sample standard deviation (n - 1 denominator); needs two values.
    pub fn std_dev(&self) -> Option<f64> {
        let n = self.sorted.len();
        if n < 2 {
            return None;
        }
        let mean = self.mean()?;
        let squares: f64 = self.sorted.iter().map(|v| (v - mean).powi(2)).sum();
        Some((squares / (n - 1) as f64).sqrt())
    }

    /// Quantile `q` in `[0, 1]` by linear interpolation between closest ranks.
    pub fn quantile(&self, q: f64) -> Option<f64> {
        let last = self.sorted.len().checked_sub(1)?;
        let position = q.clamp(0.0, 1.0) * last as f64;
        let lower_idx = position.floor() as usize;
        let upper_idx = position.ceil() as usize;
        let lower = self.sorted[lower_idx];
        let upper = self.sorted[upper_idx];
        let fraction = position - lower_idx as f64;
        Some((lower + (upper - lower) * fraction).clamp(lower, upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.unwrap();
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn five_values() {
        let dist = Distribution::new([50.0, 10.0, 30.0, 20.0, 40.0]);
        assert_eq!(dist.mean(), Some(30.0));
        assert_eq!(dist.median(), Some(30.0));
        assert_eq!(dist.min(), Some(10.0));
        assert_eq!(dist.max(), Some(50.0));
        assert_close(dist.quantile(0.1), 14.0);
        assert_close(dist.quantile(0.25), 20.0);
        assert_close(dist.quantile(0.9), 46.0);
        let sd = dist.std_dev().unwrap();
        assert!((sd - 250f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn empty_and_single() {
        let empty = Distribution::new([]);
        assert!(empty.is_empty());
        assert_eq!(empty.mean(), None);
        assert_eq!(empty.quantile(0.5), None);

        let single = Distribution::new([7.0]);
        assert_eq!(single.median(), Some(7.0));
        assert_eq!(single.std_dev(), None);
    }

    #[test]
    fn non_finite_values_are_dropped() {
        let dist = Distribution::new([1.0, f64::NAN, f64::INFINITY, 3.0]);
        assert_eq!(dist.len(), 2);
        assert_eq!(dist.median(), Some(2.0));
    }
}
