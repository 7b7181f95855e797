//! Evenly spaced sample grid shared by every Newton-Cotes rule.

/// The n+1 equally spaced abscissas `a = x_0 < x_1 < ... < x_n = b`.
///
/// The grid is a lightweight description; points are produced on demand and
/// nothing is cached between calls.
///
/// # Example
///
/// ```
/// use newton_cotes::integrate::SampleGrid;
///
/// let grid = SampleGrid::new(0.0, 1.0, 4);
/// assert_eq!(grid.step(), 0.25);
/// assert_eq!(grid.abscissas(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    a: f64,
    b: f64,
    n: usize,
}

impl SampleGrid {
    /// Grid over `[a, b]` split into `n` panels.
    pub fn new(a: f64, b: f64, n: usize) -> Self {
        Self { a, b, n }
    }

    /// Spacing h = (b - a) / n.
    pub fn step(&self) -> f64 {
        (self.b - self.a) / self.n as f64
    }

    /// The `i`-th abscissa. The last one is `b` itself, not `a + n * h`.
    pub fn abscissa(&self, i: usize) -> f64 {
        if i == self.n {
            self.b
        } else {
            self.a + i as f64 * self.step()
        }
    }

    /// All n+1 abscissas in increasing index order.
    pub fn abscissas(&self) -> Vec<f64> {
        (0..=self.n).map(|i| self.abscissa(i)).collect()
    }

    /// Evaluate `f` once at every abscissa.
    pub fn evaluate<F>(&self, f: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64,
    {
        (0..=self.n).map(|i| f(self.abscissa(i))).collect()
    }
}
