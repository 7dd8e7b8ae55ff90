//! Command-line surface: argument parsing and dispatch onto the store.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};

use crate::error::StoreError;
use crate::render::{self, Style};
use crate::store::AliasStore;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const EXAMPLES: &str = "\
Examples:

- List available accounts
  $ gam ls

- Save the current account to gam
  $ gam add account1

- Switch to a different account
  $ gam use account1";

#[derive(Parser, Debug, Default)]
#[command(name = "gam")]
#[command(about = "Account Manager: save and switch between copies of your CLI account config")]
#[command(disable_version_flag = true, after_long_help = EXAMPLES)]
pub struct Cli {
    /// Print out the installed version of gam
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List available accounts
    #[command(visible_alias = "list")]
    Ls,
    /// Save the current account to gam
    Add {
        #[arg(value_name = "account-alias")]
        alias: Option<String>,
    },
    /// Remove account from gam
    #[command(visible_alias = "remove")]
    Rm {
        #[arg(value_name = "account-alias")]
        alias: Option<String>,
    },
    /// Switch to a different account
    Use {
        #[arg(value_name = "account-alias")]
        alias: Option<String>,
    },
}

/// Parse arguments. Anything clap rejects (including `help`) degrades to the
/// empty invocation, which prints usage.
pub fn parse_from<I, T>(args: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            tracing::debug!("Falling back to usage ({:?})", e.kind());
            Cli::default()
        }
    }
}

/// Full usage text, including the examples block.
pub fn usage() -> String {
    Cli::command().render_long_help().to_string()
}

/// How an invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// A precondition or I/O error was reported to the user.
    Failed,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Success => ExitCode::SUCCESS,
            Self::Failed => ExitCode::FAILURE,
        }
    }
}

/// Execute one invocation. Results go to `out`, error blocks to `err`.
pub fn run(
    cli: Cli,
    store: &AliasStore,
    style: Style,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<Outcome> {
    if cli.version {
        writeln!(out, "{VERSION}")?;
        return Ok(Outcome::Success);
    }

    let Some(command) = cli.command else {
        writeln!(out, "{}", usage())?;
        return Ok(Outcome::Success);
    };

    let result = match command {
        Command::Ls => store.list().map(|listing| {
            if listing.is_empty() {
                render::render_empty(style)
            } else {
                render::render_listing(&listing, style)
            }
        }),
        Command::Add { alias } => store
            .add(alias.as_deref())
            .map(|alias| format!("Current account saved as {alias}.\n")),
        Command::Rm { alias } => store
            .remove(alias.as_deref())
            .map(|alias| format!("Account \"{alias}\" removed.\n")),
        Command::Use { alias } => store
            .activate(alias.as_deref())
            .map(|alias| format!("Now using \"{alias}\".\n")),
    };

    match result {
        Ok(text) => {
            out.write_all(text.as_bytes())?;
            Ok(Outcome::Success)
        }
        Err(e) => {
            if let StoreError::Io(source) = &e {
                tracing::debug!("I/O failure: {}", source);
            }
            err.write_all(render::render_error(&e, style).as_bytes())?;
            Ok(Outcome::Failed)
        }
    }
}
