pub mod formula;
mod model;
mod solver;

#[cfg(test)]
mod brute_force;

#[derive(PartialEq, Clone, Debug)]
pub enum SatResult {
    Satisfiable(Model),
    Unsatisfiable,
    /// The time limit ran out before the search finished.
    Unknown,
}

impl SatResult {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SatResult::Satisfiable(_))
    }
}

pub use formula::{Clause, Formula, Literal, Variable};
pub use model::Model;
pub use solver::{Config, Solver, Stats};
