use crate::formula::{Clause, Formula, Literal};
use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Parses a CNF formula in DIMACS format.
///
/// The `p cnf` header is skipped rather than trusted: the number of variables is whatever the
/// largest literal says it is. Each clause line ends at its terminating `0` (anything after it
/// is ignored) or at the end of the line. A line holding just `0` is an empty clause.
pub fn parse<R: Read>(reader: R) -> Result<Formula, DimacsParseError> {
    let reader = BufReader::new(reader);

    let mut clauses = vec![];

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('c') || line.starts_with('p') {
            continue;
        }
        // SATLIB benchmarks end with a "%" line followed by a stray "0"
        if line.starts_with('%') {
            break;
        }

        let mut clause = vec![];
        for x in line.split_whitespace() {
            match parse_literal(x, line_number + 1)? {
                Some(l) => clause.push(l),
                None => break,
            }
        }
        clauses.push(Clause::new(clause));
    }

    let formula = Formula::new(clauses);
    log::debug!(
        "parsed {} clauses over {} variables",
        formula.len(),
        formula.num_variables()
    );
    Ok(formula)
}

pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Formula, DimacsParseError> {
    let file = File::open(path)?;
    parse(file)
}

fn parse_literal(s: &str, line: usize) -> Result<Option<Literal>, DimacsParseError> {
    // i32::MIN has no positive counterpart, so it can't name a variable
    let l = s
        .parse::<i32>()
        .ok()
        .filter(|&l| l != i32::MIN)
        .ok_or_else(|| DimacsParseError::Format {
            line,
            token: s.to_string(),
        })?;
    Ok(Literal::from_dimacs(l))
}

#[derive(Debug)]
pub enum DimacsParseError {
    Io(std::io::Error),
    Format { line: usize, token: String },
}

impl Display for DimacsParseError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DimacsParseError::Io(e) => write!(f, "I/O error: {}", e),
            DimacsParseError::Format { line, token } => {
                write!(f, "line {}: invalid literal '{}'", line, token)
            }
        }
    }
}

impl std::error::Error for DimacsParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DimacsParseError::Io(e) => Some(e),
            DimacsParseError::Format { .. } => None,
        }
    }
}

impl From<std::io::Error> for DimacsParseError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
