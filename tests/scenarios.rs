extern crate enfa;

use enfa::{Automaton, AutomatonSpec, Nfa, StateLabel};

fn from_json(text: &str) -> Nfa<char> {
    AutomatonSpec::from_json(text).unwrap().build().unwrap()
}

fn loop_then_b() -> Nfa<char> {
    from_json(r#"{
        "initial": "q0",
        "final": ["q1"],
        "transitions": [
            {"from": "q0", "read": "a", "to": "q0"},
            {"from": "q0", "read": "b", "to": "q1"}
        ]
    }"#)
}

fn split_on_epsilon() -> Nfa<char> {
    from_json(r#"{
        "initial": "q0",
        "final": ["q1", "q2"],
        "transitions": [
            {"from": "q0", "to": "q1"},
            {"from": "q0", "to": "q2"},
            {"from": "q1", "read": "x", "to": "q1"},
            {"from": "q2", "read": "y", "to": "q2"}
        ]
    }"#)
}

fn epsilon_self_loop() -> Nfa<char> {
    from_json(r#"{
        "initial": "q0",
        "final": ["q0"],
        "transitions": [{"from": "q0", "to": "q0"}]
    }"#)
}

#[test]
fn deterministic_loop() {
    let nfa = loop_then_b();
    assert!(nfa.accepts("b"));
    assert!(nfa.accepts("ab"));
    assert!(!nfa.accepts("a"));
    assert!(!nfa.accepts(""));
}

#[test]
fn epsilon_branches() {
    let nfa = split_on_epsilon();
    assert!(nfa.accepts(""));
    assert!(nfa.accepts("x"));
    assert!(nfa.accepts("y"));
    assert!(!nfa.accepts("z"));
    assert!(nfa.accepts("xxx"));
    assert!(!nfa.accepts("xy"));
}

#[test]
fn epsilon_cycle() {
    let nfa = epsilon_self_loop();
    assert!(nfa.accepts(""));
    assert!(!nfa.accepts("a"));
}

#[test]
fn two_state_epsilon_cycle_closure() {
    let nfa = from_json(r#"{
        "initial": "A",
        "transitions": [{"from": "A", "to": "B"}, {"from": "B", "to": "A"}]
    }"#);
    let a = StateLabel::from("A");
    let b = StateLabel::from("B");
    let closure = nfa.epsilon_closure(&nfa.configuration_of(&[a.clone()]));
    assert_eq!(nfa.configuration_of(&[a, b]), closure);
}

#[test]
fn recognition_is_repeatable() {
    let nfa = split_on_epsilon();
    for word in &["", "x", "y", "z", "xx", "yx"] {
        assert_eq!(nfa.accepts(word), nfa.accepts(word));
    }
}

#[test]
fn empty_word_decided_by_initial_closure() {
    for nfa in &[loop_then_b(), split_on_epsilon(), epsilon_self_loop()] {
        let start = nfa.initial_configuration();
        let expected = start.iter().any(|state| nfa.is_final(state));
        assert_eq!(expected, nfa.accepts(""));
    }
}

#[test]
fn suffix_after_dead_symbol_is_irrelevant() {
    let nfa = loop_then_b();
    for suffix in &["", "a", "b", "ab", "zzz"] {
        let word = format!("ac{}", suffix);
        assert!(!nfa.accepts(&word));
    }
    let stuck = nfa.run("ac".chars()).last().unwrap();
    assert!(stuck.is_empty());
    assert!(nfa.is_stuck(&stuck));
}

#[test]
fn closure_properties_hold_for_every_state() {
    let nfa = split_on_epsilon();
    for name in &["q0", "q1", "q2"] {
        let start = nfa.configuration_of(&[StateLabel::from(*name)]);
        let closure = nfa.epsilon_closure(&start);
        assert!(start.is_subset(&closure));
        assert_eq!(closure, nfa.epsilon_closure(&closure));
    }
}

#[test]
fn ends_in_ab_through_epsilon() {
    let mut builder = Nfa::builder();
    builder.edge("start", 'a', "start")
        .edge("start", 'b', "start")
        .edge("start", 'a', "saw_a")
        .edge("saw_a", 'b', "saw_ab")
        .epsilon("saw_ab", "done")
        .mark_final("done");
    let nfa = builder.build("start");
    for &word in &["ab", "bab", "aab", "abab"] {
        assert!(nfa.accepts(word), "{:?} ends in ab", word);
    }
    for &word in &["", "a", "ba", "abb", "abc"] {
        assert!(!nfa.accepts(word), "{:?} does not end in ab", word);
    }
}
