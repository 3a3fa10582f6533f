mod bcp;
mod trail;

use crate::formula::{Formula, Variable};
use crate::SatResult;
use bcp::{bcp, BcpResult};
use log::{debug, info, trace};
use std::time::{Duration, Instant};
use trail::Trail;

#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Give up with [`SatResult::Unknown`] once this much time has passed.
    pub time_limit: Option<Duration>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub decisions: usize,
    pub propagations: usize,
    pub conflicts: usize,
    pub backtracks: usize,
}

/// Everything a single solve mutates, alongside the formula it is solving.
#[derive(Debug)]
pub(crate) struct SolverState<'f> {
    formula: &'f Formula,
    trail: Trail,
    stats: Stats,
    deadline: Option<Instant>,
}

impl<'f> SolverState<'f> {
    fn new(formula: &'f Formula, config: &Config) -> Self {
        Self {
            formula,
            trail: Trail::new(formula.num_variables()),
            stats: Stats::default(),
            deadline: config
                .time_limit
                .and_then(|limit| Instant::now().checked_add(limit)),
        }
    }

    fn timed_out(&self) -> bool {
        match self.deadline {
            Some(deadline) => Instant::now() >= deadline,
            None => false,
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub(crate) enum Decision {
    Decided(Variable),
    Exhausted,
}

/// Assigns false to the lowest-numbered unassigned variable.
pub(crate) fn decide(state: &mut SolverState) -> Decision {
    if state.trail.len() == state.trail.num_variables() {
        return Decision::Exhausted;
    }
    let trail = &state.trail;
    let next = (1..=trail.num_variables())
        .map(Variable)
        .find(|&v| trail.value(v).is_none());
    match next {
        Some(variable) => {
            state.trail.push(variable, false, false);
            state.stats.decisions += 1;
            Decision::Decided(variable)
        }
        None => Decision::Exhausted,
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub(crate) enum Backtrack {
    Resumed,
    SearchExhausted,
}

/// Chronological backtracking: undo the trail back to the most recent assignment whose other
/// polarity is still untried, and try it.
pub(crate) fn backtrack(state: &mut SolverState) -> Backtrack {
    state.stats.backtracks += 1;
    let depth = state.trail.len();
    while let Some(assignment) = state.trail.pop() {
        if !assignment.flipped {
            trace!(
                "backtrack: flipping {} after dropping {} assignments",
                assignment.variable.0,
                depth - state.trail.len() - 1
            );
            state
                .trail
                .push(assignment.variable, !assignment.value, true);
            return Backtrack::Resumed;
        }
    }
    trace!("backtrack: trail exhausted");
    Backtrack::SearchExhausted
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum SearchState {
    Propagating,
    Deciding,
    Backtracking,
    Sat,
    Unsat,
}

fn search(state: &mut SolverState) -> SatResult {
    let mut next = match bcp(state) {
        BcpResult::Conflict(idx) => {
            debug!("conflict in clause {} before any decision", idx.0);
            state.stats.conflicts += 1;
            SearchState::Unsat
        }
        BcpResult::NoConflict => SearchState::Deciding,
    };
    loop {
        next = match next {
            SearchState::Deciding => {
                if state.timed_out() {
                    debug!("time limit reached after {} decisions", state.stats.decisions);
                    return SatResult::Unknown;
                }
                match decide(state) {
                    Decision::Decided(_) => SearchState::Propagating,
                    Decision::Exhausted => SearchState::Sat,
                }
            }
            SearchState::Propagating => match bcp(state) {
                BcpResult::NoConflict => SearchState::Deciding,
                BcpResult::Conflict(idx) => {
                    trace!("conflict in clause {}: {}", idx.0, state.formula.clause(idx));
                    state.stats.conflicts += 1;
                    SearchState::Backtracking
                }
            },
            SearchState::Backtracking => {
                if state.timed_out() {
                    debug!("time limit reached after {} conflicts", state.stats.conflicts);
                    return SatResult::Unknown;
                }
                match backtrack(state) {
                    Backtrack::Resumed => SearchState::Propagating,
                    Backtrack::SearchExhausted => SearchState::Unsat,
                }
            }
            SearchState::Sat => return SatResult::Satisfiable(state.trail.model()),
            SearchState::Unsat => return SatResult::Unsatisfiable,
        };
    }
}

pub struct Solver {
    formula: Formula,
    config: Config,
    stats: Stats,
}

impl Solver {
    pub fn new(formula: Formula) -> Self {
        Self::with_config(formula, Config::default())
    }

    pub fn with_config(formula: Formula, config: Config) -> Self {
        Self {
            formula,
            config,
            stats: Stats::default(),
        }
    }

    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// Counters from the most recent call to [`Solver::solve`].
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Runs the search from an empty trail. Calling this again repeats the same search.
    pub fn solve(&mut self) -> SatResult {
        let mut state = SolverState::new(&self.formula, &self.config);
        let result = search(&mut state);
        info!(
            "{} after {} decisions, {} propagations, {} conflicts, {} backtracks",
            match result {
                SatResult::Satisfiable(_) => "sat",
                SatResult::Unsatisfiable => "unsat",
                SatResult::Unknown => "unknown",
            },
            state.stats.decisions,
            state.stats.propagations,
            state.stats.conflicts,
            state.stats.backtracks
        );
        self.stats = state.stats;
        result
    }
}
