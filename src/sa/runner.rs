//! SA execution loop.

use super::config::SaConfig;
use super::cooling::{acceptance_probability, GeometricCooling};
use crate::core::driver::{drive, Limits, MovePolicy};
use crate::core::{
    Algorithm, LocalSearchProblem, SearchEvent, SearchMonitor, Termination, TracingMonitor,
};
use crate::error::SearchError;
use crate::random::rng_from;
use rand::rngs::StdRng;
use rand::Rng;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Objective evaluations performed, the initial one included.
    pub evaluations: usize,

    /// Temperature in effect when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of temperatures consumed from the schedule.
    pub temperature_steps: usize,

    /// Why the search stopped. Annealing only stalls when the move
    /// operator yields no valid neighbor at all.
    pub termination: Termination,
}

/// Metropolis acceptance over a geometric cooling schedule.
struct Metropolis {
    rng: StdRng,
    schedule: GeometricCooling,
    temperature: f64,
    steps: usize,
}

impl Metropolis {
    fn new(rng: StdRng, config: &SaConfig) -> Self {
        let mut schedule = GeometricCooling::new(config.start_temperature, config.alpha);
        // The schedule is infinite; the fallback is never taken.
        let temperature = schedule.next().unwrap_or(config.start_temperature);
        Self {
            rng,
            schedule,
            temperature,
            steps: 1,
        }
    }
}

impl<S> MovePolicy<S> for Metropolis {
    fn algorithm(&self) -> Algorithm {
        Algorithm::SimulatedAnnealing
    }

    fn accept(&mut self, current_score: f64, _candidate: &S, candidate_score: f64) -> bool {
        let p = acceptance_probability(current_score, candidate_score, self.temperature);
        self.rng.random_range(0.0..1.0) < p
    }

    fn end_pass<M: SearchMonitor>(&mut self, monitor: &mut M) {
        if let Some(t) = self.schedule.next() {
            self.temperature = t;
            self.steps += 1;
            monitor.record(&SearchEvent::Cooled { temperature: t });
        }
    }

    fn continue_after_rejection(&self, candidates: usize) -> bool {
        // Rejections only cool the system; an empty neighborhood never changes.
        candidates > 0
    }
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization, logging through `tracing`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localsearch::sa::{SaConfig, SaRunner};
    /// use u_localsearch::FnProblem;
    ///
    /// let problem = FnProblem::new(
    ///     || 40_i64,
    ///     |&x: &i64| [x - 1, x + 1],
    ///     |&x: &i64, _: &()| ((x - 7) * (x - 7)) as f64,
    /// );
    /// let config = SaConfig::default()
    ///     .with_max_evaluations(2_000)
    ///     .with_start_temperature(10.0)
    ///     .with_alpha(0.95)
    ///     .with_seed(42);
    /// let result = SaRunner::run(&problem, &config, &()).unwrap();
    /// assert!(result.evaluations <= 2_000);
    /// assert!(result.final_temperature > 0.0);
    /// ```
    pub fn run<P: LocalSearchProblem>(
        problem: &P,
        config: &SaConfig,
        params: &P::Params,
    ) -> Result<SaResult<P::Solution>, SearchError<P::Error>> {
        Self::run_with_monitor(problem, config, params, &mut TracingMonitor)
    }

    /// Runs SA optimization, reporting to `monitor`.
    ///
    /// The RNG seeded from `config.seed` produces the initial solution
    /// first and then every acceptance draw, so a fixed seed reproduces
    /// the whole run.
    pub fn run_with_monitor<P, M>(
        problem: &P,
        config: &SaConfig,
        params: &P::Params,
        monitor: &mut M,
    ) -> Result<SaResult<P::Solution>, SearchError<P::Error>>
    where
        P: LocalSearchProblem,
        M: SearchMonitor,
    {
        config.validate()?;
        let mut rng = rng_from(config.seed);

        let initial = problem
            .initial_solution(&mut rng)
            .map_err(SearchError::Problem)?;
        let mut policy = Metropolis::new(rng, config);
        let outcome = drive(
            problem,
            params,
            initial,
            Limits {
                max_evaluations: config.max_evaluations,
                delta_max: config.delta_max,
            },
            &mut policy,
            monitor,
        )
        .map_err(SearchError::Problem)?;

        tracing::debug!(final_temperature = policy.temperature, "anneal finished");

        Ok(SaResult {
            best: outcome.best,
            best_cost: outcome.best_score,
            evaluations: outcome.evaluations,
            final_temperature: policy.temperature,
            accepted_moves: outcome.moves,
            temperature_steps: policy.steps,
            termination: outcome.termination,
        })
    }
}
