//! `quickbeam` command-line entry point
//!
//! With a file argument the whole script is run and its final value printed.
//! Without one, an interactive REPL is started.

mod repl;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use quickbeam::{parse, Error, EvalContext, Lexer, Session, Token};

/// Run quickbeam scripts or start an interactive session.
#[derive(Parser, Debug)]
#[command(name = "quickbeam", version, about, long_about = None)]
struct Args {
    /// Script to run; starts the REPL when omitted
    file: Option<PathBuf>,

    /// Print an intermediate form of FILE as JSON instead of running it
    #[arg(long, value_enum, requires = "file")]
    emit: Option<Emit>,

    /// Maximum depth of nested function calls
    #[arg(long, default_value_t = quickbeam::context::DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// The token stream
    Tokens,
    /// The syntax tree
    Ast,
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let args = Args::parse();
    let ctx = EvalContext::with_max_call_depth(args.max_call_depth);

    let Some(path) = args.file else {
        repl::run(Session::with_context(ctx))?;
        return Ok(ExitCode::SUCCESS);
    };

    let source = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    match args.emit {
        Some(emit) => {
            println!("{}", emit_json(&source, emit)?);
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(run_script(&source, ctx)),
    }
}

/// Initialize tracing for debug output.
///
/// Enable with `RUST_LOG=quickbeam=debug` or `RUST_LOG=quickbeam=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    }
}

fn run_script(source: &str, ctx: EvalContext) -> ExitCode {
    let session = Session::with_context(ctx);
    match session.run(source) {
        Ok(Some(value)) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", render_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn emit_json(source: &str, emit: Emit) -> anyhow::Result<String> {
    let json = match emit {
        Emit::Tokens => {
            let tokens: Vec<Token> = Lexer::new(source).collect();
            serde_json::to_string_pretty(&tokens)?
        }
        Emit::Ast => {
            let (program, errors) = parse(source);
            if !errors.is_empty() {
                bail!("{}", render_error(&Error::Parse(errors)));
            }
            serde_json::to_string_pretty(&program)?
        }
    };
    Ok(json)
}

/// Format an error the way both the REPL and script runner print it.
pub(crate) fn render_error(err: &Error) -> String {
    match err {
        Error::Parse(errors) => {
            let mut out = String::from("parser errors:");
            for error in errors {
                out.push_str("\n\t");
                out.push_str(&error.to_string());
            }
            out
        }
        Error::Eval(err) => format!("ERROR: {}", err),
    }
}
