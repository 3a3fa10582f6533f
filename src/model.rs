use crate::formula::{Formula, Literal, Variable};
use std::fmt::{self, Display, Formatter};

/// A total assignment to variables `1..=num_variables`, as found by the solver.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Model {
    // indexed by variable; slot 0 is unused
    values: Vec<bool>,
}

impl Model {
    pub(crate) fn new(values: Vec<bool>) -> Self {
        debug_assert!(!values.is_empty());
        Self { values }
    }

    pub fn num_variables(&self) -> usize {
        self.values.len() - 1
    }

    pub fn value(&self, variable: Variable) -> Option<bool> {
        if variable.0 == 0 {
            return None;
        }
        self.values.get(variable.0).copied()
    }

    pub fn satisfies_literal(&self, literal: &Literal) -> bool {
        self.value(literal.variable()) == Some(literal.is_positive())
    }

    /// Does every clause of `formula` have a literal this model makes true?
    pub fn satisfies(&self, formula: &Formula) -> bool {
        formula
            .clauses()
            .all(|clause| clause.literals().any(|literal| self.satisfies_literal(literal)))
    }

    /// The true literal of each variable, in variable order.
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.values.iter().enumerate().skip(1).map(|(x, &value)| {
            if value {
                Literal::Positive(Variable(x))
            } else {
                Literal::Negative(Variable(x))
            }
        })
    }
}

/// Renders as a DIMACS `v` line, terminated by `0`.
impl Display for Model {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("v")?;
        for literal in self.literals() {
            write!(f, " {}", literal.to_dimacs())?;
        }
        f.write_str(" 0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{n, p, Clause};

    #[test]
    fn lookup() {
        let model = Model::new(vec![false, true, false]);
        assert_eq!(model.num_variables(), 2);
        assert_eq!(model.value(Variable(1)), Some(true));
        assert_eq!(model.value(Variable(2)), Some(false));
        assert_eq!(model.value(Variable(0)), None);
        assert_eq!(model.value(Variable(3)), None);
    }

    #[test]
    fn satisfies() {
        let model = Model::new(vec![false, true, false]);
        let sat = Formula::new(vec![Clause::new(vec![p(1), p(2)]), Clause::new(vec![n(2)])]);
        let unsat = Formula::new(vec![Clause::new(vec![n(1), p(2)])]);
        let empty_clause = Formula::new(vec![Clause::new(vec![])]);
        assert!(model.satisfies(&sat));
        assert!(!model.satisfies(&unsat));
        assert!(!model.satisfies(&empty_clause));
    }

    #[test]
    fn display_as_dimacs() {
        let model = Model::new(vec![false, true, false, false]);
        assert_eq!(model.to_string(), "v 1 -2 -3 0");
        assert_eq!(Model::new(vec![false]).to_string(), "v 0");
    }
}
