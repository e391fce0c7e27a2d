use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shunting::batch::{self, LineOutcome};
use shunting::logger;

#[derive(Debug, Parser)]
#[command(name = "ratcalc")]
#[command(about = "Exact fraction arithmetic over text input")]
struct Cli {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sum every number found in each file
    Sum {
        #[arg(default_values = ["input01.txt", "input02.txt", "input03.txt"])]
        files: Vec<PathBuf>,
    },
    /// Evaluate each line of each file as an infix expression
    Eval {
        #[arg(default_values = ["input01.txt"])]
        files: Vec<PathBuf>,
    },
    /// Evaluate a single expression, eg: ratcalc calc '1/2 + 1/3 * ( 2 - 1 )'
    Calc {
        #[arg(required = true, allow_hyphen_values = true)]
        expr: Vec<String>,
    },
    /// Read expressions interactively
    Repl,
}

fn repl(out: &mut impl Write) -> anyhow::Result<()> {
    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new()?;
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(e.into()),
            Ok(line) => {
                let expr = line.trim();
                if expr.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(expr);
                writeln!(out, "{}", LineOutcome::evaluate(expr))?;
                out.flush()?;
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Sum { files } => {
            let summary = batch::run_collect(&files, &mut out)?;
            tracing::info!(?summary, "collection run finished");
        }
        Command::Eval { files } => {
            let summary = batch::run_eval(&files, &mut out)?;
            tracing::info!(?summary, "expression run finished");
        }
        Command::Calc { expr } => {
            writeln!(out, "{}", LineOutcome::evaluate(&expr.join(" ")))?;
        }
        Command::Repl => repl(&mut out)?,
    }
    Ok(())
}
