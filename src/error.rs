use std::io;

use thiserror::Error;

/// A decoded automaton spec that cannot be turned into an automaton.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("automaton has no initial state")]
    MissingInitial,
    #[error("transition {index} has no `{field}` state")]
    MissingField { index: usize, field: &'static str },
}

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("cannot read automaton: {0}")]
    Io(#[from] io::Error),
    #[error("malformed automaton: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Build(#[from] BuildError),
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("bad test record: {0}")]
    Csv(#[from] csv::Error),
    #[error("test record on line {line} has {found} fields, expected a word and a label")]
    FieldCount { line: u64, found: usize },
    #[error("cannot write results: {0}")]
    Io(#[from] io::Error),
}
