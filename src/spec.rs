//! Automaton files.
//!
//! An automaton file is a JSON object such as
//!
//! ```json
//! {
//!   "initial": "q0",
//!   "final": ["q1"],
//!   "transitions": [
//!     { "from": "q0", "read": "a", "to": "q0" },
//!     { "from": "q0", "read": "b", "to": "q1" },
//!     { "from": "q1", "to": "q0" }
//!   ]
//! }
//! ```
//!
//! A transition without `read` (or with `"read": null`) is an epsilon transition.
//! A transition whose `read` is not a single character is kept out of the
//! automaton, since words are read one character at a time.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{BuildError, SpecError};
use crate::nfa::{Nfa, StateLabel};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AutomatonSpec {
    pub initial: Option<StateLabel>,
    #[serde(default, rename = "final")]
    pub finals: Vec<StateLabel>,
    #[serde(default)]
    pub transitions: Vec<TransitionSpec>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionSpec {
    pub from: Option<StateLabel>,
    pub read: Option<String>,
    pub to: Option<StateLabel>,
}

impl AutomatonSpec {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SpecError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json(text: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SpecError> {
        let file = File::open(path)?;
        AutomatonSpec::from_reader(BufReader::new(file))
    }

    pub fn build(&self) -> Result<Nfa<char>, BuildError> {
        Nfa::from_spec(self)
    }
}

impl TransitionSpec {
    /// `Some(Some(c))` for a transition on `c`, `Some(None)` for an epsilon transition.
    ///
    /// A `read` that is not exactly one character can never match a character
    /// of a word, so it yields `None`.
    fn symbol(&self) -> Option<Option<char>> {
        let read = match self.read {
            None => return Some(None),
            Some(ref read) => read,
        };
        let mut chars = read.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Some(Some(symbol)),
            _ => None,
        }
    }
}

impl Nfa<char> {
    /// Builds the automaton described by `spec`, or nothing at all if any part is malformed.
    pub fn from_spec(spec: &AutomatonSpec) -> Result<Self, BuildError> {
        let initial = spec.initial.clone().ok_or(BuildError::MissingInitial)?;

        let mut builder = Nfa::builder();
        // number the initial state first so it keeps the lowest state number
        builder.state(initial.clone());
        for label in &spec.finals {
            builder.mark_final(label.clone());
        }
        for (index, tr) in spec.transitions.iter().enumerate() {
            let from = tr.from.clone().ok_or(BuildError::MissingField { index, field: "from" })?;
            let to = tr.to.clone().ok_or(BuildError::MissingField { index, field: "to" })?;
            match tr.symbol() {
                Some(on) => {
                    builder.transition(from, on, to);
                }
                None => {
                    warn!("transition {} reads {:?}, which no single character matches; ignoring it",
                          index,
                          tr.read.as_deref().unwrap_or_default());
                    builder.state(from);
                    builder.state(to);
                }
            }
        }
        Ok(builder.build(initial))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SpecError> {
        Ok(AutomatonSpec::from_path(path)?.build()?)
    }
}
