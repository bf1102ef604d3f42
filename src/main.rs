use clap::{Args, Parser as ClapParser, Subcommand};
use cond_expr::cli::{self, CheckOptions, CliError};
use cond_expr::parser::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_OPERATORS};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "condexpr")]
#[command(about = "Validate condition expressions and print their syntax tree as JSON")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ExpressionArgs {
    /// The expression (reads from stdin if not provided)
    expression: Option<String>,

    /// Regex recognising variable names instead of the default pattern
    #[arg(long)]
    pattern: Option<String>,

    /// Pretty-print the output
    #[arg(short, long)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an expression and print `{valid, ast | error}`
    Check {
        #[command(flatten)]
        args: ExpressionArgs,

        /// Maximum parenthesis nesting
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        /// Maximum number of binary operators
        #[arg(long, default_value_t = DEFAULT_MAX_OPERATORS)]
        max_operators: usize,
    },

    /// Print the token stream of an expression
    Tokens {
        #[command(flatten)]
        args: ExpressionArgs,
    },
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check {
            args,
            max_depth,
            max_operators,
        } => run_check(args, max_depth, max_operators),
        Commands::Tokens { args } => run_tokens(args),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    }
}

fn setup_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new().filter_level(log_level).init();
}

fn read_expression(expression: Option<String>) -> Result<Option<String>, CliError> {
    match expression {
        Some(s) => Ok(Some(s)),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(Some(buffer))
        }
        None => Ok(None),
    }
}

fn options(args: ExpressionArgs) -> Result<CheckOptions, CliError> {
    Ok(CheckOptions {
        expression: read_expression(args.expression)?,
        pattern: args.pattern,
        pretty: args.pretty,
        ..CheckOptions::default()
    })
}

fn run_check(
    args: ExpressionArgs,
    max_depth: usize,
    max_operators: usize,
) -> Result<bool, CliError> {
    let opts = CheckOptions {
        max_depth,
        max_operators,
        ..options(args)?
    };
    let result = cli::execute_check(&opts)?;
    println!("{}", result.output);
    Ok(result.is_valid())
}

fn run_tokens(args: ExpressionArgs) -> Result<bool, CliError> {
    let output = cli::execute_tokens(&options(args)?)?;
    println!("{}", output);
    Ok(true)
}
