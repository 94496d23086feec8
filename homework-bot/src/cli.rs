//! CLI parser.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "homework-bot")]
#[command(about = "Relays homework review status changes to a Telegram chat", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Poll forever (config from env). Default when no command is given.
    Run {
        #[command(flatten)]
        cursor: CursorArgs,
    },
    /// Run a single check and exit.
    Once {
        #[command(flatten)]
        cursor: CursorArgs,
    },
}

/// Where the first fetch window starts.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct CursorArgs {
    /// Epoch seconds for the first `from_date`.
    #[arg(long, default_value_t = 0, conflicts_with = "from_now")]
    pub from_date: i64,
    /// Start from the current time instead of `--from-date`.
    #[arg(long)]
    pub from_now: bool,
}

impl CursorArgs {
    /// Resolves the initial cursor; `now` is the current epoch seconds.
    pub fn start_timestamp(&self, now: i64) -> i64 {
        if self.from_now {
            now
        } else {
            self.from_date
        }
    }
}

impl Cli {
    /// The chosen command, `run` with defaults when none was given.
    pub fn command(self) -> Commands {
        self.command.unwrap_or(Commands::Run {
            cursor: CursorArgs::default(),
        })
    }
}
