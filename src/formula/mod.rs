pub mod dimacs;

use std::fmt::{self, Display, Formatter};

/// A propositional variable. Variables are numbered from 1, as in DIMACS.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, Debug)]
pub struct Variable(pub usize);

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Literal {
    Positive(Variable),
    Negative(Variable),
}

impl Literal {
    /// Converts a DIMACS literal. `0` is the clause terminator, not a literal, so it maps to `None`.
    pub fn from_dimacs(l: i32) -> Option<Self> {
        let variable = Variable(l.unsigned_abs() as usize);
        if l > 0 {
            Some(Literal::Positive(variable))
        } else if l < 0 {
            Some(Literal::Negative(variable))
        } else {
            None
        }
    }

    pub fn to_dimacs(&self) -> i64 {
        match self {
            Literal::Positive(v) => v.0 as i64,
            Literal::Negative(v) => -(v.0 as i64),
        }
    }

    pub fn variable(&self) -> Variable {
        match self {
            Literal::Positive(v) => *v,
            Literal::Negative(v) => *v,
        }
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Literal::Positive(_) => true,
            Literal::Negative(_) => false,
        }
    }

    pub fn idx(&self) -> usize {
        self.variable().0
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Literal::Positive(Variable(x)) => write!(f, "{}", x),
            Literal::Negative(Variable(x)) => write!(f, "!{}", x),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(disjuncts: impl IntoIterator<Item = Literal>) -> Self {
        Self {
            literals: disjuncts.into_iter().collect(),
        }
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// An empty clause can never be satisfied.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.literals.len() != 1 {
            f.write_str("(")?;
        }
        let mut first_literal = true;
        for literal in &self.literals {
            if first_literal {
                first_literal = false;
            } else {
                f.write_str(" | ")?;
            }
            write!(f, "{}", literal)?;
        }
        if self.literals.len() != 1 {
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// Index of a clause in its formula, in input order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ClauseIdx(pub usize);

/// An immutable CNF formula.
///
/// The number of variables is inferred from the largest variable mentioned by any literal, so a
/// formula over `{1, 5}` has five variables. It is computed once here and never changes.
/// Variable 0 does not exist; building a formula that mentions it panics.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Formula {
    clauses: Vec<Clause>,
    num_variables: usize,
}

impl Formula {
    pub fn new(conjuncts: impl IntoIterator<Item = Clause>) -> Self {
        let clauses: Vec<Clause> = conjuncts.into_iter().collect();
        assert!(
            clauses.iter().flat_map(|clause| clause.literals()).all(|literal| literal.idx() > 0),
            "variables are numbered from 1"
        );
        let num_variables = clauses
            .iter()
            .flat_map(|clause| clause.literals())
            .map(|literal| literal.idx())
            .max()
            .unwrap_or(0);
        Self { clauses, num_variables }
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    pub fn clause(&self, idx: ClauseIdx) -> &Clause {
        &self.clauses[idx.0]
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut first_clause = true;
        for clause in &self.clauses {
            if first_clause {
                first_clause = false;
            } else {
                f.write_str(" & ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn p(x: usize) -> Literal {
    Literal::Positive(Variable(x))
}

#[cfg(test)]
pub(crate) fn n(x: usize) -> Literal {
    Literal::Negative(Variable(x))
}

/// Random formulas of up to three literals per clause, small enough to check by brute force.
#[cfg(test)]
pub(crate) fn formula_3sat_strategy() -> impl proptest::strategy::Strategy<Value = Formula> {
    use proptest::prelude::*;

    const MAX_VARS: usize = 8;
    const MAX_CLAUSES: usize = 40;

    (1..=MAX_VARS).prop_flat_map(|num_vars| {
        let literal = (1..=num_vars, any::<bool>())
            .prop_map(|(x, positive)| if positive { p(x) } else { n(x) });
        let clause = proptest::collection::vec(literal, 1..=3).prop_map(Clause::new);
        proptest::collection::vec(clause, 1..MAX_CLAUSES).prop_map(Formula::new)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_variables_is_max_magnitude() {
        let c1 = Clause::new(vec![p(1), n(5)]);
        let c2 = Clause::new(vec![n(3)]);
        let f = Formula::new(vec![c1, c2]);
        assert_eq!(f.num_variables(), 5);
        assert_eq!(f.len(), 2);
    }

    #[test]
    fn num_variables_without_literals() {
        assert_eq!(Formula::new(vec![]).num_variables(), 0);
        assert_eq!(Formula::new(vec![Clause::new(vec![])]).num_variables(), 0);
    }

    #[test]
    fn clause_order_is_preserved() {
        let f = Formula::new(vec![Clause::new(vec![n(2), p(1)]), Clause::new(vec![p(3)])]);
        assert_eq!(
            f.clause(ClauseIdx(0)).literals().cloned().collect::<Vec<_>>(),
            vec![n(2), p(1)]
        );
        assert_eq!(f.clause(ClauseIdx(1)).literals().cloned().collect::<Vec<_>>(), vec![p(3)]);
    }

    #[test]
    #[should_panic(expected = "variables are numbered from 1")]
    fn variable_zero_is_rejected() {
        Formula::new(vec![Clause::new(vec![p(1)]), Clause::new(vec![Literal::Positive(Variable(0))])]);
    }

    #[test]
    fn dimacs_literals() {
        assert_eq!(Literal::from_dimacs(3), Some(p(3)));
        assert_eq!(Literal::from_dimacs(-7), Some(n(7)));
        assert_eq!(Literal::from_dimacs(0), None);
        assert_eq!(n(7).to_dimacs(), -7);
        assert_eq!(Literal::from_dimacs(i32::MAX), Some(p(i32::MAX as usize)));
    }

    #[test]
    fn display() {
        let f = Formula::new(vec![Clause::new(vec![p(1), n(2)]), Clause::new(vec![n(3)]), Clause::new(vec![])]);
        assert_eq!(f.to_string(), "(1 | !2) & !3 & ()");
    }
}
