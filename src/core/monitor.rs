//! Diagnostics sink injected into every search.
//!
//! Runners never log through global state. They report [`SearchEvent`]s to
//! a [`SearchMonitor`] owned by the caller, which can forward them to
//! `tracing`, record them, or drop them.

use super::types::{Algorithm, Termination};

/// Something observable that happened during a search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The initial solution was evaluated.
    Started { algorithm: Algorithm, score: f64 },
    /// A strictly better solution than any seen so far was evaluated.
    NewBest { evaluations: usize, score: f64 },
    /// The search adopted a neighbor as its current solution.
    Moved { evaluations: usize, score: f64 },
    /// The annealing temperature advanced to `temperature`.
    Cooled { temperature: f64 },
    /// A hill climbing restart round completed.
    RoundFinished {
        round: usize,
        evaluations: usize,
        best_score: f64,
    },
    /// The search stopped.
    Finished {
        algorithm: Algorithm,
        evaluations: usize,
        best_score: f64,
        termination: Termination,
    },
}

/// Receives search events.
pub trait SearchMonitor {
    fn record(&mut self, event: &SearchEvent);
}

impl<M: SearchMonitor + ?Sized> SearchMonitor for &mut M {
    fn record(&mut self, event: &SearchEvent) {
        (**self).record(event);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMonitor;

impl SearchMonitor for NoOpMonitor {
    fn record(&mut self, _event: &SearchEvent) {}
}

/// Emits events as structured `tracing` records.
///
/// Start and finish are logged at `info`, everything per-move at `debug`
/// and temperature steps at `trace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMonitor;

impl SearchMonitor for TracingMonitor {
    fn record(&mut self, event: &SearchEvent) {
        match *event {
            SearchEvent::Started { algorithm, score } => {
                tracing::info!(event = "search_start", %algorithm, score);
            }
            SearchEvent::NewBest { evaluations, score } => {
                tracing::debug!(event = "new_best", evaluations, score);
            }
            SearchEvent::Moved { evaluations, score } => {
                tracing::debug!(event = "move", evaluations, score);
            }
            SearchEvent::Cooled { temperature } => {
                tracing::trace!(event = "cool", temperature);
            }
            SearchEvent::RoundFinished {
                round,
                evaluations,
                best_score,
            } => {
                tracing::debug!(event = "round_end", round, evaluations, best_score);
            }
            SearchEvent::Finished {
                algorithm,
                evaluations,
                best_score,
                termination,
            } => {
                tracing::info!(
                    event = "search_end",
                    %algorithm,
                    evaluations,
                    best_score,
                    %termination
                );
            }
        }
    }
}

/// Keeps every event in memory, in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<SearchEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    /// Scores of the solutions adopted as current, in order.
    pub fn moves(&self) -> Vec<f64> {
        self.events
            .iter()
            .filter_map(|e| match *e {
                SearchEvent::Moved { score, .. } => Some(score),
                _ => None,
            })
            .collect()
    }

    /// Temperatures the annealing schedule advanced to, in order.
    pub fn temperatures(&self) -> Vec<f64> {
        self.events
            .iter()
            .filter_map(|e| match *e {
                SearchEvent::Cooled { temperature } => Some(temperature),
                _ => None,
            })
            .collect()
    }

    pub fn termination(&self) -> Option<Termination> {
        self.events.iter().rev().find_map(|e| match *e {
            SearchEvent::Finished { termination, .. } => Some(termination),
            _ => None,
        })
    }
}

impl SearchMonitor for EventLog {
    fn record(&mut self, event: &SearchEvent) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_accessors() {
        let mut log = EventLog::new();
        let mut sink: &mut EventLog = &mut log;
        sink.record(&SearchEvent::Started {
            algorithm: Algorithm::SimulatedAnnealing,
            score: 10.0,
        });
        sink.record(&SearchEvent::Moved {
            evaluations: 2,
            score: 8.0,
        });
        sink.record(&SearchEvent::Cooled { temperature: 0.5 });
        sink.record(&SearchEvent::Moved {
            evaluations: 3,
            score: 9.0,
        });
        sink.record(&SearchEvent::Finished {
            algorithm: Algorithm::SimulatedAnnealing,
            evaluations: 3,
            best_score: 8.0,
            termination: Termination::BudgetExhausted,
        });

        assert_eq!(log.events().len(), 5);
        assert_eq!(log.moves(), vec![8.0, 9.0]);
        assert_eq!(log.temperatures(), vec![0.5]);
        assert_eq!(log.termination(), Some(Termination::BudgetExhausted));
    }

    #[test]
    fn test_monitors_accept_every_event() {
        let event = SearchEvent::Finished {
            algorithm: Algorithm::TabuSearch,
            evaluations: 1,
            best_score: 0.0,
            termination: Termination::Stalled,
        };
        NoOpMonitor.record(&event);
        TracingMonitor.record(&event);
    }
}
