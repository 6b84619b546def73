use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use bit_set::BitSet;
use bit_vec::BitVec;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::automaton::Automaton;

pub type StateNumber = usize;

/// The set of states the automaton could be in at some point of a run
pub type Configuration = BitSet;

/// The name of a state as written in an automaton file.
///
/// Numbers and strings are different labels, so `1` and `"1"` name two states.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateLabel {
    Number(i64),
    Name(String),
}

impl fmt::Display for StateLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            StateLabel::Number(n) => write!(f, "{}", n),
            StateLabel::Name(ref name) => f.write_str(name),
        }
    }
}

impl From<i64> for StateLabel {
    fn from(n: i64) -> Self {
        StateLabel::Number(n)
    }
}

impl<'a> From<&'a str> for StateLabel {
    fn from(name: &'a str) -> Self {
        StateLabel::Name(name.to_owned())
    }
}

impl From<String> for StateLabel {
    fn from(name: String) -> Self {
        StateLabel::Name(name)
    }
}

#[derive(Clone, Debug)]
struct NfaState<Input> {
    transitions: HashMap<Input, HashSet<StateNumber>>,
    epsilons: HashSet<StateNumber>,
}

impl<Input: Eq + Hash> NfaState<Input> {
    fn new() -> Self {
        NfaState {
            transitions: HashMap::new(),
            epsilons: HashSet::new(),
        }
    }
}

/// A non-deterministic finite automaton with epsilon transitions.
///
/// Built once through an `NfaBuilder` and never changed afterwards, so a single
/// automaton can serve any number of concurrent runs.
#[derive(Clone, Debug)]
pub struct Nfa<Input> {
    numbers: HashMap<StateLabel, StateNumber>,
    labels: Vec<StateLabel>,
    states: Vec<NfaState<Input>>,
    initial: StateNumber,
    finals: BitVec,
}

pub struct NfaBuilder<Input> {
    numbers: HashMap<StateLabel, StateNumber>,
    labels: Vec<StateLabel>,
    states: Vec<NfaState<Input>>,
    finals: BitVec,
    transition_count: usize,
}

impl<Input: Eq + Hash> NfaBuilder<Input> {
    pub fn new() -> Self {
        NfaBuilder {
            numbers: HashMap::new(),
            labels: Vec::new(),
            states: Vec::new(),
            finals: BitVec::new(),
            transition_count: 0,
        }
    }

    /// Returns the number of the state with this label, adding the state if it is new
    pub fn state<L: Into<StateLabel>>(&mut self, label: L) -> StateNumber {
        let label = label.into();
        if let Some(&number) = self.numbers.get(&label) {
            return number;
        }
        let number = self.states.len();
        self.states.push(NfaState::new());
        self.finals.push(false);
        self.labels.push(label.clone());
        self.numbers.insert(label, number);
        number
    }

    /// Adds a transition; `None` as the symbol makes it an epsilon transition
    pub fn transition<L, M>(&mut self, from: L, on: Option<Input>, to: M) -> &mut Self
        where L: Into<StateLabel>,
              M: Into<StateLabel>
    {
        let from = self.state(from);
        let to = self.state(to);
        let from_state = &mut self.states[from];
        let added = match on {
            Some(symbol) => from_state.transitions.entry(symbol).or_insert_with(HashSet::new).insert(to),
            None => from_state.epsilons.insert(to),
        };
        if added {
            self.transition_count += 1;
        }
        self
    }

    pub fn edge<L, M>(&mut self, from: L, on: Input, to: M) -> &mut Self
        where L: Into<StateLabel>,
              M: Into<StateLabel>
    {
        self.transition(from, Some(on), to)
    }

    pub fn epsilon<L, M>(&mut self, from: L, to: M) -> &mut Self
        where L: Into<StateLabel>,
              M: Into<StateLabel>
    {
        self.transition(from, None, to)
    }

    pub fn mark_final<L: Into<StateLabel>>(&mut self, label: L) -> &mut Self {
        let state = self.state(label);
        self.finals.set(state, true);
        self
    }

    /// Finishes construction with `initial` as the start state
    pub fn build<L: Into<StateLabel>>(mut self, initial: L) -> Nfa<Input> {
        let initial = self.state(initial);
        debug!("built automaton with {} states, {} transitions and {} final states",
               self.states.len(),
               self.transition_count,
               self.finals.iter().filter(|&f| f).count());
        Nfa {
            numbers: self.numbers,
            labels: self.labels,
            states: self.states,
            initial,
            finals: self.finals,
        }
    }
}

impl<Input: Eq + Hash> Default for NfaBuilder<Input> {
    fn default() -> Self {
        NfaBuilder::new()
    }
}

impl<Input: Eq + Hash> Nfa<Input> {
    pub fn builder() -> NfaBuilder<Input> {
        NfaBuilder::new()
    }

    pub fn initial(&self) -> StateNumber {
        self.initial
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// States outside the automaton are never final
    pub fn is_final(&self, state: StateNumber) -> bool {
        self.finals.get(state).unwrap_or(false)
    }

    pub fn label(&self, state: StateNumber) -> Option<&StateLabel> {
        self.labels.get(state)
    }

    pub fn state_number(&self, label: &StateLabel) -> Option<StateNumber> {
        self.numbers.get(label).cloned()
    }

    /// Configuration holding exactly the given labelled states; unknown labels are skipped
    pub fn configuration_of<'l, I>(&self, labels: I) -> Configuration
        where I: IntoIterator<Item = &'l StateLabel>
    {
        let mut configuration = BitSet::with_capacity(self.states.len());
        for label in labels {
            if let Some(state) = self.state_number(label) {
                configuration.insert(state);
            }
        }
        configuration
    }

    /// Labels of the states in `configuration`, in state number order
    pub fn labels_of(&self, configuration: &Configuration) -> Vec<&StateLabel> {
        configuration.iter().filter_map(|state| self.label(state)).collect()
    }

    /// Renders a configuration as `{q0, q1}`
    pub fn describe(&self, configuration: &Configuration) -> String {
        let labels: Vec<String> = self.labels_of(configuration)
            .into_iter()
            .map(|label| label.to_string())
            .collect();
        format!("{{{}}}", labels.join(", "))
    }

    pub fn initial_configuration(&self) -> Configuration {
        let mut start = BitSet::with_capacity(self.states.len());
        start.insert(self.initial);
        self.epsilon_closure(&start)
    }

    /// The smallest superset of `states` closed under epsilon transitions
    pub fn epsilon_closure(&self, states: &Configuration) -> Configuration {
        let mut closure = states.clone();
        let mut worklist: Vec<StateNumber> = states.iter().collect();
        while let Some(state) = worklist.pop() {
            if let Some(from_state) = self.states.get(state) {
                for &nxt_state in &from_state.epsilons {
                    // a state is pushed only the first time it joins the closure
                    if closure.insert(nxt_state) {
                        worklist.push(nxt_state);
                    }
                }
            }
        }
        trace!("epsilon closure {} -> {}", self.describe(states), self.describe(&closure));
        closure
    }

    /// All states reachable from `states` by one transition on `symbol`
    pub fn move_on_symbol(&self, states: &Configuration, symbol: &Input) -> Configuration {
        let mut nxt_states = BitSet::with_capacity(self.states.len());
        for state in states {
            let targets = self.states
                .get(state)
                .and_then(|from_state| from_state.transitions.get(symbol));
            if let Some(targets) = targets {
                nxt_states.extend(targets.iter().cloned());
            }
        }
        nxt_states
    }
}

impl Nfa<char> {
    pub fn accepts(&self, word: &str) -> bool {
        self.recognize(word.chars())
    }
}

impl<Input: Eq + Hash> Automaton<Input> for Nfa<Input> {
    type State = Configuration;

    fn start_state(&self) -> Self::State {
        self.initial_configuration()
    }

    fn next_state(&self, states: &Self::State, symbol: &Input) -> Self::State {
        self.epsilon_closure(&self.move_on_symbol(states, symbol))
    }

    fn is_accepting(&self, states: &Self::State) -> bool {
        states.iter().any(|state| self.is_final(state))
    }

    fn is_stuck(&self, states: &Self::State) -> bool {
        states.is_empty()
    }
}
