use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use keycalc::calculator::{CalcResult, evaluate_expression};
use keycalc::config::Config;
use keycalc::console::Console;
use keycalc::keypad::{Keypad, TerminalSurface, session};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// A calculator with a menu-driven console and a keypad front end.
#[derive(Parser, Debug)]
#[command(name = "keycalc", version, about)]
struct Cli {
    /// Path to a config file (defaults to <config dir>/keycalc/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colours in the keypad
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Numbered menu of pair-operand operations (default)
    Menu,
    /// Keypad driven by key labels or `tap X Y` lines on stdin
    Keypad,
    /// Evaluate one expression and print the result
    Eval {
        /// The expression; several arguments are joined with spaces
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
        expression: Vec<String>,
    },
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            info!("starting console front end");
            let mut console = Console::new(io::stdin().lock(), io::stdout(), &config.console);
            console.run().context("Console session failed")?;
        }
        Command::Keypad => {
            info!("starting keypad front end");
            let stdout = io::stdout();
            let color = !cli.no_color && stdout.is_terminal();
            let mut surface = TerminalSurface::new(stdout, &config.keypad, color);
            let mut keypad = Keypad::new();
            session::run(io::stdin().lock(), &mut surface, &mut keypad)
                .context("Keypad session failed")?;
        }
        Command::Eval { expression } => match evaluate_expression(&expression.join(" ")) {
            CalcResult::Success { display_result, .. } => println!("{display_result}"),
            CalcResult::Error {
                expression,
                message,
            } => anyhow::bail!("Cannot evaluate '{expression}': {message}"),
        },
    }

    Ok(())
}
