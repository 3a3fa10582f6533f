use crate::formula::{Literal, Variable};
use crate::model::Model;
use log::trace;

/// One entry on the trail.
///
/// `flipped` is set once the other polarity of `variable` no longer needs exploring: either this
/// is the second attempt after a backtrack, or the value was forced by unit propagation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Assignment {
    pub variable: Variable,
    pub value: bool,
    pub flipped: bool,
}

/// The chronological stack of assignments, plus a per-variable lookup of the current value.
///
/// Every push and pop updates both together, so `value` always reflects exactly the variables
/// on the trail.
#[derive(Debug)]
pub(crate) struct Trail {
    assignments: Vec<Assignment>,
    values: Vec<Option<bool>>,
}

impl Trail {
    pub fn new(num_variables: usize) -> Self {
        Self {
            assignments: Vec::new(),
            values: vec![None; num_variables + 1],
        }
    }

    pub fn push(&mut self, variable: Variable, value: bool, flipped: bool) {
        assert!(
            self.values[variable.0].is_none(),
            "variable {} is already on the trail",
            variable.0
        );
        trace!(
            "{} {}{} at depth {}",
            if flipped { "forced" } else { "decision" },
            if value { "" } else { "!" },
            variable.0,
            self.assignments.len()
        );

        self.assignments.push(Assignment {
            variable,
            value,
            flipped,
        });
        self.values[variable.0] = Some(value);
    }

    pub fn pop(&mut self) -> Option<Assignment> {
        let assignment = self.assignments.pop()?;
        self.values[assignment.variable.0] = None;
        Some(assignment)
    }

    pub fn value(&self, variable: Variable) -> Option<bool> {
        self.values[variable.0]
    }

    /// `Some(true)` if `literal` is satisfied, `Some(false)` if falsified, `None` if unassigned.
    pub fn value_of(&self, literal: &Literal) -> Option<bool> {
        self.value(literal.variable())
            .map(|value| value == literal.is_positive())
    }

    pub fn num_variables(&self) -> usize {
        self.values.len() - 1
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.iter()
    }

    /// Snapshot of the current values. Unassigned variables read as false.
    pub fn model(&self) -> Model {
        Model::new(self.values.iter().map(|v| v.unwrap_or(false)).collect())
    }
}
