pub mod automaton;
pub mod batch;
pub mod error;
pub mod nfa;
pub mod spec;

pub use automaton::Automaton;
pub use batch::{run_batch, BatchOptions, BatchSummary, Verdict};
pub use error::{BatchError, BuildError, SpecError};
pub use nfa::{Configuration, Nfa, NfaBuilder, StateLabel, StateNumber};
pub use spec::{AutomatonSpec, TransitionSpec};
