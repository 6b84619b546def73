use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

const AUTOMATON: &str = r#"{
    "initial": "q0",
    "final": ["q1"],
    "transitions": [
        {"from": "q0", "read": "a", "to": "q0"},
        {"from": "q0", "read": "b", "to": "q1"}
    ]
}"#;

fn enfa(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_enfa"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("enfa runs")
}

#[test]
fn no_arguments_uses_default_files() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("automato.aut"), AUTOMATON).expect("write automaton");
    fs::write(dir.path().join("testes.in"), "b;1\na;0\n").expect("write tests");

    let output = enfa(dir.path(), &[]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Processed 2 tests"));

    let results = fs::read_to_string(dir.path().join("saida.out")).expect("read results");
    let verdicts: Vec<&str> = results.lines().map(|line| line.split(';').nth(1).unwrap()).collect();
    assert_eq!(vec!["1", "0"], verdicts);
}

#[test]
fn three_arguments_name_the_files() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("m.json"), AUTOMATON).expect("write automaton");
    fs::write(dir.path().join("words.csv"), "ab;1\n").expect("write tests");

    let output = enfa(dir.path(), &["m.json", "words.csv", "out.csv"]);
    assert!(output.status.success());
    let results = fs::read_to_string(dir.path().join("out.csv")).expect("read results");
    assert!(results.starts_with("ab;1;1;"));
}

#[test]
fn one_or_two_arguments_are_a_usage_error() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("x.aut"), AUTOMATON).expect("write automaton");
    fs::write(dir.path().join("testes.in"), "b;1\n").expect("write tests");

    for args in &[&["x.aut"][..], &["x.aut", "testes.in"][..]] {
        let output = enfa(dir.path(), args);
        assert_eq!(Some(1), output.status.code());
        assert!(String::from_utf8_lossy(&output.stderr).contains("usage:"));
    }
    assert!(!dir.path().join("saida.out").exists());
}

#[test]
fn output_is_truncated_before_inputs_are_checked() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("stale.out"), "old results\n").expect("write stale output");

    let output = enfa(dir.path(), &["missing.aut", "missing.in", "stale.out"]);
    assert_eq!(Some(1), output.status.code());
    assert!(String::from_utf8_lossy(&output.stderr).contains("file not found"));
    let results = fs::read_to_string(dir.path().join("stale.out")).expect("read output");
    assert!(results.is_empty());
}

#[test]
fn malformed_automaton_exits_with_status_one() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("automato.aut"), r#"{"final": ["q0"]}"#).expect("write automaton");
    fs::write(dir.path().join("testes.in"), "b;1\n").expect("write tests");

    let output = enfa(dir.path(), &[]);
    assert_eq!(Some(1), output.status.code());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot load automaton"));
}
