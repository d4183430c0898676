//! Cooling schedule and Metropolis acceptance.

/// Geometric (Kirkpatrick) cooling: yields `T0, alpha*T0, alpha^2*T0, ...`.
///
/// The sequence is infinite and cannot be rewound; build a new schedule
/// to start over. Every yielded temperature is strictly positive: once
/// the product would underflow it stays at [`f64::MIN_POSITIVE`].
///
/// # Examples
///
/// ```
/// use u_localsearch::sa::GeometricCooling;
///
/// let temps: Vec<f64> = GeometricCooling::new(100.0, 0.5).take(3).collect();
/// assert_eq!(temps, vec![100.0, 50.0, 25.0]);
/// ```
#[derive(Debug, Clone)]
pub struct GeometricCooling {
    next: f64,
    alpha: f64,
}

impl GeometricCooling {
    /// Creates a schedule. `start_temp` must be positive and `alpha` in (0, 1);
    /// [`SaConfig::validate`](super::SaConfig::validate) enforces both.
    pub fn new(start_temp: f64, alpha: f64) -> Self {
        Self {
            next: start_temp,
            alpha,
        }
    }
}

impl Iterator for GeometricCooling {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let t = self.next;
        self.next = (t * self.alpha).max(f64::MIN_POSITIVE);
        Some(t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Probability of moving from `current` to `candidate` at `temperature`.
///
/// Strict improvements are always accepted. Otherwise the probability is
/// `exp(-|current - candidate| / temperature)`, clamped to [0, 1]; a
/// result that underflows or is not a number means "reject".
pub fn acceptance_probability(current: f64, candidate: f64, temperature: f64) -> f64 {
    if candidate < current {
        return 1.0;
    }
    let p = (-(current - candidate).abs() / temperature).exp();
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}
