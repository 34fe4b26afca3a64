use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use anyhow::{Context, Result, bail};
use calcflow::{
    error::InterpretError,
    interpreter::{
        core::Interpreter,
        evaluator::function::{builtin, core::Functions},
    },
};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// calcflow evaluates arithmetic expressions line by line, keeping the
/// variables assigned by earlier lines.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calcflow to read the script from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode prints only the last computed value of the script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Defines a variable before the script runs, as NAME=VALUE.
    #[arg(short = 'D', long = "define", value_name = "NAME=VALUE", value_parser = parse_definition)]
    defines: Vec<(String, f64)>,

    /// Script text, or a file path with `--file`. Reads stdin when omitted.
    contents: Option<String>,
}

fn parse_definition(definition: &str) -> Result<(String, f64)> {
    let Some((name, value)) = definition.split_once('=') else {
        bail!("expected NAME=VALUE, found '{definition}'");
    };
    let name = name.trim();
    if name.is_empty() {
        bail!("variable name is empty in '{definition}'");
    }
    let value = value.trim()
                     .parse()
                     .with_context(|| format!("invalid value for variable '{name}'"))?;
    Ok((name.to_string(), value))
}

fn main() -> ExitCode {
    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr))
                                  .with(EnvFilter::try_from_default_env()
                                            .unwrap_or_else(|_| EnvFilter::new("warn")))
                                  .init();

    match run(Args::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        },
    }
}

/// Runs every line of the script; returns whether all of them succeeded.
fn run(args: Args) -> Result<bool> {
    let mut variables = builtin::variables();
    variables.extend(args.defines);
    let mut interpreter = Interpreter::new(&variables, Functions::builtin());

    match args.contents {
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).with_context(|| {
                                                      format!("failed to read the input file \
                                                               '{path}'")
                                                  })?;
            run_lines(&mut interpreter, script.lines().map(Ok), args.pipe_mode)
        },
        Some(script) => run_lines(&mut interpreter, script.lines().map(Ok), args.pipe_mode),
        None => run_lines(&mut interpreter, io::stdin().lock().lines(), args.pipe_mode),
    }
}

/// Interprets each line, printing values and per-line errors.
fn run_lines<I, L>(interpreter: &mut Interpreter, lines: I, pipe_mode: bool) -> Result<bool>
    where I: IntoIterator<Item = io::Result<L>>,
          L: AsRef<str>
{
    let mut succeeded = true;
    let mut last = None;
    for line in lines {
        let line = line.context("failed to read a line")?;
        match interpreter.interpret(line.as_ref()) {
            Ok(number) => {
                if pipe_mode {
                    last = Some(number);
                } else {
                    println!("{number}");
                }
            },
            Err(InterpretError::NoCode) => {},
            Err(e) => {
                eprintln!("error: {e}");
                succeeded = false;
            },
        }
    }

    if let Some(number) = last {
        println!("{number}");
    }

    Ok(succeeded)
}
