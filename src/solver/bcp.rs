use super::SolverState;
use crate::formula::{Clause, ClauseIdx, Literal};
use crate::solver::trail::Trail;

#[derive(PartialEq, Eq, Clone, Debug)]
pub(crate) enum BcpResult {
    Conflict(ClauseIdx),
    NoConflict,
}

/// One forward sweep of unit propagation over every clause, in order.
///
/// A unit found early in the sweep is visible to every clause after it, but nothing is revisited:
/// an implication that only becomes unit because of a later clause waits for the next call. After
/// the sweep the whole formula is checked for a falsified clause.
pub(crate) fn bcp(state: &mut SolverState) -> BcpResult {
    let formula = state.formula;
    for clause in formula.clauses() {
        if let Some(literal) = unit_literal(&state.trail, clause) {
            state.trail.push(literal.variable(), literal.is_positive(), true);
            state.stats.propagations += 1;
        }
    }

    match find_conflict(state) {
        Some(idx) => BcpResult::Conflict(idx),
        None => BcpResult::NoConflict,
    }
}

/// The only unassigned literal of `clause`, if every other literal is false.
fn unit_literal<'c>(trail: &Trail, clause: &'c Clause) -> Option<&'c Literal> {
    let mut last_literal = None;
    for literal in clause.literals() {
        match trail.value_of(literal) {
            // this clause is satisfied
            Some(true) => return None,
            Some(false) => continue,
            None => {
                if last_literal.is_some() {
                    // second unassigned literal, can't resolve this clause yet
                    return None;
                }
                last_literal = Some(literal);
            }
        }
    }
    // None here means every literal was false, which find_conflict will report
    last_literal
}

fn find_conflict(state: &SolverState) -> Option<ClauseIdx> {
    let trail = &state.trail;
    state
        .formula
        .clauses()
        .position(|clause| {
            clause
                .literals()
                .all(|literal| trail.value_of(literal) == Some(false))
        })
        .map(ClauseIdx)
}
