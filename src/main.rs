use std::{fs, process::ExitCode};

use clap::Parser;
use evalenv::EvalEnvironment;
use tracing_subscriber::EnvFilter;

/// evalenv evaluates an expression, list literal or map literal and prints
/// the resulting object.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Registers a constant before evaluating, e.g. `--define rate=48e3`.
    /// May be repeated; later definitions can refer to earlier ones.
    #[arg(short, long, value_name = "NAME=EXPR", value_parser = parse_define)]
    define: Vec<(String, String)>,

    /// Tells evalenv to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

/// Splits `NAME=EXPR` at the first `=`.
fn parse_define(arg: &str) -> Result<(String, String), String> {
    let (name, expr) = arg.split_once('=')
                          .ok_or_else(|| format!("expected NAME=EXPR, found '{arg}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing constant name in '{arg}'"));
    }
    Ok((name.to_string(), expr.trim().to_string()))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(text) => text.trim().to_string(),
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let env = EvalEnvironment::new();

    for (name, expr) in &args.define {
        if let Err(e) = env.register_constant_expr(name, expr) {
            eprintln!("{name}: {e}");
            return ExitCode::FAILURE;
        }
    }

    match env.eval(&source) {
        Ok(obj) => {
            println!("{obj}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
