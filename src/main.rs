//! Binary entrypoint for pwd-check.
//!
//! Parses arguments, installs logging and hands the terminal to the library.

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use pwd_check::{Blacklist, DEFAULT_BLACKLIST_PATH, Menu};
use secrecy::{ExposeSecret, SecretBox};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

/// Rate password strength or generate a new password
#[derive(Debug, Parser)]
#[command(name = "pwd-check", about = "Password strength checker and generator")]
struct Cli {
    /// Common password list, one password per line
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_BLACKLIST_PATH)]
    wordlist: PathBuf,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Run once instead of opening the interactive menu
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print one generated password
    Generate {
        /// Password length, 2 to 1024 (random between 8 and 16 when omitted)
        #[arg(short, long)]
        length: Option<usize>,
    },
    /// Rate a password read from the first line of stdin (any encoding)
    Rate {
        /// Print the per-criterion feedback
        #[arg(short, long)]
        feedback: bool,
    },
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("pwd_check={}", level).parse()?);
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let blacklist = Blacklist::load_or_empty(&cli.wordlist);
    info!(count = blacklist.len(), path = %cli.wordlist.display(), "common passwords loaded");

    match cli.command {
        None => {
            let mut menu = Menu::new(io::stdin().lock(), io::stdout().lock(), Some(&blacklist));
            menu.run().context("running interactive menu")?;
        }
        Some(Command::Generate { length }) => {
            let password = pwd_check::generate_password(length)?;
            println!("Your New Password is: {}", password.expose_secret());
        }
        Some(Command::Rate { feedback }) => {
            let mut line = Vec::new();
            if io::stdin().lock().read_until(b'\n', &mut line).context("reading password")? == 0 {
                bail!("no password given on stdin");
            }
            if line.ends_with(b"\n") {
                line.pop();
            }
            if line.ends_with(b"\r") {
                line.pop();
            }
            let password = SecretBox::new(line.into_boxed_slice());

            let evaluation = pwd_check::evaluate_password_bytes(&password, Some(&blacklist));
            println!("Password Rating: {}", evaluation.score());
            if feedback {
                for line in evaluation.feedback() {
                    println!("{}", line);
                }
            }
        }
    }

    Ok(())
}
