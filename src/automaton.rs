use std::fmt::Debug;

pub trait Automaton<Input> {
    type State: Debug;

    fn start_state(&self) -> Self::State;

    fn next_state(&self, state: &Self::State, input: &Input) -> Self::State;

    fn is_accepting(&self, state: &Self::State) -> bool;

    /// A stuck state can never reach an accepting state again, whatever the remaining input.
    fn is_stuck(&self, _state: &Self::State) -> bool {
        false
    }

    fn run<'a, W>(&'a self, word: W) -> Run<'a, Input, Self, W::IntoIter>
        where Self: Sized,
              W: IntoIterator<Item = Input>
    {
        Run {
            aut: self,
            input: word.into_iter(),
            state: None,
        }
    }

    /// Decides whether the automaton accepts `word`.
    fn recognize<W>(&self, word: W) -> bool
        where Self: Sized,
              W: IntoIterator<Item = Input>
    {
        let mut state = self.start_state();
        for symbol in word {
            if self.is_stuck(&state) {
                return false;
            }
            state = self.next_state(&state, &symbol);
        }
        self.is_accepting(&state)
    }
}

/// An iterator over the states an automaton passes through on a word.
///
/// The first item is the start state, followed by one state per consumed symbol.
#[derive(Debug)]
pub struct Run<'a, Input, A: 'a + Automaton<Input>, W: Iterator<Item = Input>> {
    aut: &'a A,
    input: W,
    state: Option<A::State>,
}

impl<'a, Input, A, W> Iterator for Run<'a, Input, A, W>
    where A: Automaton<Input>,
          A::State: Clone,
          W: Iterator<Item = Input>
{
    type Item = A::State;

    fn next(&mut self) -> Option<Self::Item> {
        let next = match self.state {
            None => self.aut.start_state(),
            Some(ref state) => {
                let symbol = self.input.next()?;
                self.aut.next_state(state, &symbol)
            }
        };
        self.state = Some(next.clone());
        Some(next)
    }
}
