//! Problem contract consumed by every local search runner.

use rand::Rng;
use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

/// Defines a problem for the local search runners.
///
/// The runners never look inside a solution. They only clone it, compare
/// it for equality (tabu membership) and hand it to the objective. The
/// trait bundles the four collaborators a search needs: an initial
/// solution, a lazy move operator, a neighbor validator and the objective.
///
/// # Minimization
///
/// All runners minimize [`cost`](LocalSearchProblem::cost). For
/// maximization, negate the cost.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use std::convert::Infallible;
/// use u_localsearch::LocalSearchProblem;
///
/// /// Minimize `(x - 7)^2` over the integers, stepping by one.
/// struct Parabola;
///
/// impl LocalSearchProblem for Parabola {
///     type Solution = i64;
///     type Params = ();
///     type Error = Infallible;
///     type Neighbors<'a> = std::array::IntoIter<i64, 2>;
///
///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<i64, Infallible> {
///         Ok(rng.random_range(-50..50))
///     }
///
///     fn neighbors<'a>(&'a self, &x: &'a i64) -> Result<Self::Neighbors<'a>, Infallible> {
///         Ok([x - 1, x + 1].into_iter())
///     }
///
///     fn cost(&self, &x: &i64, _: &()) -> Result<f64, Infallible> {
///         Ok(((x - 7) * (x - 7)) as f64)
///     }
/// }
/// ```
pub trait LocalSearchProblem {
    /// The solution representation.
    type Solution: Clone + PartialEq;

    /// Extra parameters forwarded to every objective evaluation.
    type Params: ?Sized;

    /// Failure raised by any collaborator. Propagated to the caller unchanged.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Lazy sequence of neighbors. May be infinite.
    type Neighbors<'a>: Iterator<Item = Self::Solution>
    where
        Self: 'a;

    /// Creates a starting solution. Called once per search (or restart round).
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<Self::Solution, Self::Error>;

    /// Produces the neighbors of `solution`.
    ///
    /// Runners pull candidates one at a time and drop the sequence as soon
    /// as they move or run out of budget, so the sequence is never forced.
    fn neighbors<'a>(
        &'a self,
        solution: &'a Self::Solution,
    ) -> Result<Self::Neighbors<'a>, Self::Error>;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution, params: &Self::Params) -> Result<f64, Self::Error>;

    /// Structural check applied to every neighbor before it is evaluated.
    ///
    /// Rejected neighbors never reach the objective and do not consume
    /// evaluation budget. The default accepts everything.
    fn is_valid(&self, _solution: &Self::Solution, _delta_max: u32) -> bool {
        true
    }
}

/// Neighbor validator used by [`FnProblem`] until one is supplied.
pub type AcceptAll<S> = fn(&S, u32) -> bool;

fn accept_all<S>(_: &S, _: u32) -> bool {
    true
}

/// Builds a [`LocalSearchProblem`] from plain closures.
///
/// - `init`: `Fn() -> S`
/// - `move_operator`: `Fn(&S) -> impl IntoIterator<Item = S>`
/// - `objective`: `Fn(&S, &P) -> f64`
/// - `validator` (optional): `Fn(&S, u32) -> bool`
///
/// # Examples
///
/// ```
/// use u_localsearch::hc::{HcConfig, HcRunner};
/// use u_localsearch::FnProblem;
///
/// // Climb towards 100 by minimizing the negated value.
/// let problem = FnProblem::new(
///     || 1_i64,
///     |&i: &i64| if i < 100 { Some(i + 1) } else { None },
///     |&i: &i64, _: &()| -(i as f64),
/// );
///
/// let result = HcRunner::run(&problem, &HcConfig::default().with_max_evaluations(500), &())
///     .unwrap();
/// assert_eq!(result.best, 100);
/// assert_eq!(result.evaluations, 100);
/// ```
pub struct FnProblem<S, P: ?Sized, I, M, O, V = AcceptAll<S>> {
    init: I,
    move_operator: M,
    objective: O,
    validator: V,
    _marker: PhantomData<fn(&S, &P)>,
}

impl<S, P: ?Sized, I, M, O> FnProblem<S, P, I, M, O> {
    /// Wraps the three mandatory collaborators. Every neighbor is valid.
    pub fn new<N>(init: I, move_operator: M, objective: O) -> Self
    where
        I: Fn() -> S,
        M: Fn(&S) -> N,
        N: IntoIterator<Item = S>,
        O: Fn(&S, &P) -> f64,
    {
        Self {
            init,
            move_operator,
            objective,
            validator: accept_all::<S>,
            _marker: PhantomData,
        }
    }
}

impl<S, P: ?Sized, I, M, O, V> FnProblem<S, P, I, M, O, V> {
    /// Replaces the neighbor validator.
    pub fn with_validator<V2>(self, validator: V2) -> FnProblem<S, P, I, M, O, V2>
    where
        V2: Fn(&S, u32) -> bool,
    {
        FnProblem {
            init: self.init,
            move_operator: self.move_operator,
            objective: self.objective,
            validator,
            _marker: PhantomData,
        }
    }
}

impl<S, P: ?Sized, I, M, O, V> fmt::Debug for FnProblem<S, P, I, M, O, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProblem").finish_non_exhaustive()
    }
}

impl<S, P, I, M, N, O, V> LocalSearchProblem for FnProblem<S, P, I, M, O, V>
where
    S: Clone + PartialEq,
    P: ?Sized,
    I: Fn() -> S,
    M: Fn(&S) -> N,
    N: IntoIterator<Item = S>,
    O: Fn(&S, &P) -> f64,
    V: Fn(&S, u32) -> bool,
{
    type Solution = S;
    type Params = P;
    type Error = Infallible;
    type Neighbors<'a>
        = N::IntoIter
    where
        Self: 'a;

    fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Result<S, Infallible> {
        Ok((self.init)())
    }

    fn neighbors<'a>(&'a self, solution: &'a S) -> Result<N::IntoIter, Infallible> {
        Ok((self.move_operator)(solution).into_iter())
    }

    fn cost(&self, solution: &S, params: &P) -> Result<f64, Infallible> {
        Ok((self.objective)(solution, params))
    }

    fn is_valid(&self, solution: &S, delta_max: u32) -> bool {
        (self.validator)(solution, delta_max)
    }
}

/// The search strategy that produced a result or event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// First-improvement hill climbing.
    HillClimbing,
    /// Hill climbing repeated from fresh starting solutions.
    HillClimbingRestart,
    /// Simulated annealing with geometric cooling.
    SimulatedAnnealing,
    /// Tabu search with an unbounded tabu list.
    TabuSearch,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::HillClimbing => "hill climbing",
            Algorithm::HillClimbingRestart => "hill climbing with restart",
            Algorithm::SimulatedAnnealing => "simulated annealing",
            Algorithm::TabuSearch => "tabu search",
        };
        f.write_str(name)
    }
}

/// Why a search stopped.
///
/// Only informative: the shape of the returned result is the same for
/// every reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The evaluation budget was spent.
    BudgetExhausted,
    /// A full neighbor pass produced no acceptable move (or no neighbor at all).
    Stalled,
    /// The restart budget was spent.
    RestartsExhausted,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Termination::BudgetExhausted => "evaluation budget exhausted",
            Termination::Stalled => "no acceptable move",
            Termination::RestartsExhausted => "restart budget exhausted",
        };
        f.write_str(reason)
    }
}
