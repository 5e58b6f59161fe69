//! Command implementations for the Virtuoso CLI.

use std::io::{self, BufWriter, Write};

use log::info;

use crate::cli::args::VirtuosoArgs;
use crate::cli::output::output_results;
use crate::error::Result;
use crate::mutation::Solver;

/// Execute the CLI command, writing results to stdout.
pub fn execute_command(args: VirtuosoArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&args, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Load both inputs, solve every candidate and write the results to `out`.
///
/// Nothing is written unless both the dictionary and the word list could be
/// opened.
pub fn run<W: Write>(args: &VirtuosoArgs, out: &mut W) -> Result<()> {
    info!(
        "Dictionary: {}, words: {}",
        args.dictionary.display(),
        args.words.display()
    );

    let mut solver = Solver::load(&args.dictionary, &args.words, args.solver_config())?;
    solver.process();

    output_results(solver.candidates(), args, out)
}
