extern crate enfa;

use enfa::Nfa;

fn main() {
    // words over {a, b} ending in "ab"
    let mut builder = Nfa::builder();
    builder.edge("start", 'a', "start")
        .edge("start", 'b', "start")
        .edge("start", 'a', "saw_a")
        .edge("saw_a", 'b', "saw_ab")
        .epsilon("saw_ab", "done")
        .mark_final("done");
    let nfa = builder.build("start");

    println!("initial configuration: {}", nfa.describe(&nfa.initial_configuration()));
    for &word in &["", "ab", "bab", "aab", "ba", "a", "abc"] {
        println!("{:?} -> {}", word, nfa.accepts(word));
    }
}
