use std::fs;

use clap::Parser;
use tally::{Environment, Value, interpreter::environment::parse_definition, parse, prelude};
use tracing_subscriber::{EnvFilter, fmt};

/// tally evaluates an arithmetic expression. All operators share one
/// precedence level and group to the right: `10 - 3 - 2` is `10 - (3 - 2)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tally to read the expression from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Binds a variable, e.g. `-D x=3`. May be repeated; overrides prelude
    /// names.
    #[arg(short = 'D', long = "define", value_name = "NAME=VALUE", value_parser = parse_definition)]
    definitions: Vec<(String, Value)>,

    /// Starts from an empty environment instead of the prelude.
    #[arg(long)]
    no_prelude: bool,

    /// Prints the parsed expression, fully parenthesized, before the result.
    #[arg(long)]
    ast: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    // RUST_LOG controls verbosity; warnings only by default.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter)
         .with_writer(std::io::stderr)
         .with_target(false)
         .init();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };
    let source = source.trim_end();

    let mut env = if args.no_prelude {
        Environment::new()
    } else {
        prelude::environment()
    };
    for (name, value) in args.definitions {
        env.set_value(name, value);
    }

    let ast = match parse(source) {
        Ok(ast) => ast,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    };
    if args.ast {
        println!("{ast}");
    }

    match ast.evaluate(&env) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
