use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::debug;

use enfa::{run_batch, BatchOptions, Nfa};

const USAGE: &str = "usage: enfa [<automaton.aut> <tests.in> <output.out>]";

#[derive(Parser)]
#[command(name = "enfa", about = "Runs an epsilon-NFA over a file of test words", version)]
struct Cli {
    /// Automaton definition (JSON), test words (`word;expected` per line) and
    /// results file, given all three or not at all
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
    /// Field delimiter of the test and result files
    #[arg(short, long, default_value_t = ';')]
    delimiter: char,
}

struct Files {
    automaton: PathBuf,
    tests: PathBuf,
    output: PathBuf,
}

impl Files {
    fn from_args(mut files: Vec<PathBuf>) -> Option<Self> {
        match files.len() {
            0 => Some(Files {
                automaton: PathBuf::from("automato.aut"),
                tests: PathBuf::from("testes.in"),
                output: PathBuf::from("saida.out"),
            }),
            3 => {
                let output = files.pop()?;
                let tests = files.pop()?;
                let automaton = files.pop()?;
                Some(Files { automaton, tests, output })
            }
            _ => None,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {:#}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let given = cli.files.len();
    let files = match Files::from_args(cli.files) {
        Some(files) => files,
        None => bail!("expected zero or three file arguments, got {}\n{}", given, USAGE),
    };
    if !cli.delimiter.is_ascii() {
        bail!("delimiter must be an ASCII character, got {:?}", cli.delimiter);
    }
    let options = BatchOptions { delimiter: cli.delimiter as u8 };

    // The output file is truncated even when the inputs turn out to be unusable
    let output = File::create(&files.output)
        .with_context(|| format!("cannot create output file {}", files.output.display()))?;

    for path in &[&files.automaton, &files.tests] {
        if !path.is_file() {
            bail!("file not found: {}", path.display());
        }
    }

    let nfa = Nfa::load(&files.automaton)
        .with_context(|| format!("cannot load automaton {}", files.automaton.display()))?;
    debug!("loaded {} with {} states", files.automaton.display(), nfa.state_count());

    let tests = File::open(&files.tests)
        .with_context(|| format!("cannot open tests {}", files.tests.display()))?;
    let summary = run_batch(&nfa, BufReader::new(tests), BufWriter::new(output), &options)
        .with_context(|| format!("cannot process tests from {}", files.tests.display()))?;

    println!("Processed {} tests. Output in '{}'.", summary.processed, files.output.display());
    Ok(())
}
