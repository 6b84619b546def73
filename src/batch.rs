//! Runs an automaton over a file of test words.
//!
//! Each input record is `word;expected` and produces one output record
//! `word;obtained;expected;seconds`, where `obtained` is `1` for an accepted
//! word and `0` for a rejected one. The expected label is copied through as is.

use std::fmt;
use std::io::{Read, Write};
use std::time::{Duration, Instant};

use csv::{ReaderBuilder, WriterBuilder};
use log::{debug, info, log_enabled, trace, Level};

use crate::automaton::Automaton;
use crate::error::BatchError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl Verdict {
    pub fn from_accepted(accepted: bool) -> Self {
        if accepted {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }

    /// Reads a `1`/`0` label
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "1" => Some(Verdict::Accepted),
            "0" => Some(Verdict::Rejected),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::Accepted => "1",
            Verdict::Rejected => "0",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    pub word: String,
    pub expected: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub word: String,
    pub obtained: Verdict,
    pub expected: String,
    pub elapsed: Duration,
}

impl Outcome {
    /// `None` when the expected label is not a verdict
    pub fn agrees(&self) -> Option<bool> {
        Verdict::from_label(&self.expected).map(|expected| expected == self.obtained)
    }

    pub fn record(&self) -> [String; 4] {
        [
            self.word.clone(),
            self.obtained.label().to_owned(),
            self.expected.clone(),
            format!("{:.6}", self.elapsed.as_secs_f64()),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchOptions {
    pub delimiter: u8,
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions { delimiter: b';' }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub agreed: usize,
    pub disagreed: usize,
    pub unlabeled: usize,
}

impl BatchSummary {
    fn count(&mut self, outcome: &Outcome) {
        self.processed += 1;
        match outcome.agrees() {
            Some(true) => self.agreed += 1,
            Some(false) => self.disagreed += 1,
            None => self.unlabeled += 1,
        }
    }
}

/// Recognizes one test word and times the call
pub fn evaluate<A>(automaton: &A, case: TestCase) -> Outcome
    where A: Automaton<char>
{
    let start = Instant::now();
    let accepted = automaton.recognize(case.word.chars());
    let elapsed = start.elapsed();
    Outcome {
        word: case.word,
        obtained: Verdict::from_accepted(accepted),
        expected: case.expected,
        elapsed,
    }
}

pub fn run_batch<A, R, W>(automaton: &A,
                          input: R,
                          output: W,
                          options: &BatchOptions)
                          -> Result<BatchSummary, BatchError>
    where A: Automaton<char>,
          A::State: Clone,
          R: Read,
          W: Write
{
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(input);
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .delimiter(options.delimiter)
        .from_writer(output);

    let mut summary = BatchSummary::default();
    for result in reader.records() {
        let record = result?;
        if record.len() != 2 {
            return Err(BatchError::FieldCount {
                line: record.position().map_or(0, |pos| pos.line()),
                found: record.len(),
            });
        }
        let case = TestCase {
            word: record[0].to_owned(),
            expected: record[1].to_owned(),
        };

        if log_enabled!(Level::Trace) {
            for (step, state) in automaton.run(case.word.chars()).enumerate() {
                trace!("{:?} after {} symbols: {:?}", case.word, step, state);
            }
        }

        let outcome = evaluate(automaton, case);
        debug!("{:?} -> {} (expected {}) in {:?}",
               outcome.word,
               outcome.obtained,
               outcome.expected,
               outcome.elapsed);
        writer.write_record(&outcome.record())?;
        summary.count(&outcome);
    }
    writer.flush()?;

    info!("processed {} tests: {} agreed, {} disagreed, {} unlabeled",
          summary.processed,
          summary.agreed,
          summary.disagreed,
          summary.unlabeled);
    Ok(summary)
}
