//! Terminal to-do list client.
//!
//! Renders the server's list and lets the user add, complete and delete
//! tasks. Every change is followed by a full re-fetch from the backend.
//!
//! # Usage
//!
//! ```bash
//! # Interactive view against the default backend
//! todo
//!
//! # One-shot commands
//! todo list
//! todo add "buy milk"
//! todo done 0
//! todo rm 0
//!
//! # Another backend, with a request timeout
//! TODO_API_URL=http://10.0.0.5:8000 todo --timeout-secs 5
//!
//! # Verbose logging (goes to stderr)
//! RUST_LOG=debug todo list
//! ```

mod command;
mod view;

use std::io::{self, BufRead, IsTerminal, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use todo_core::{TodoClient, TodoList, UreqTransport};
use tracing::debug;

use command::Action;
use view::Strike;

/// Terminal client for the todo REST backend
#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the todo backend
    #[arg(short = 'u', long, env = "TODO_API_URL", default_value = "http://localhost:8000")]
    api_url: String,

    /// Per-request timeout in seconds (unset waits indefinitely)
    #[arg(long, env = "TODO_TIMEOUT_SECS", value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, env = "TODO_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the list
    List,
    /// Add a task
    Add { title: String },
    /// Mark the task at a position complete
    Done { index: usize },
    /// Delete the task at a position
    Rm { index: usize },
    /// Print the task at a position
    Get { index: usize },
}

fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("todo={level},todo_core={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn strike_mode() -> Strike {
    if io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none() {
        Strike::Ansi
    } else {
        Strike::Combining
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let client = TodoClient::new(&args.api_url);
    let transport = UreqTransport::new(args.timeout_secs.map(Duration::from_secs));
    let mut list = TodoList::new(client, transport);
    debug!(api_url = %args.api_url, "client ready");

    match args.command {
        None => interactive(&mut list),
        Some(command) => one_shot(&mut list, command),
    }
}

fn one_shot(list: &mut TodoList<UreqTransport>, command: Command) -> Result<()> {
    let mode = strike_mode();
    match command {
        Command::List => {
            list.fetch_todos().context("failed to fetch todos")?;
        }
        Command::Add { title } => {
            list.set_title(title);
            list.add_todo().context("failed to add todo")?;
        }
        Command::Done { index } => {
            list.mount().context("failed to fetch todos")?;
            list.mark_complete(index)
                .with_context(|| format!("failed to complete todo {index}"))?;
        }
        Command::Rm { index } => {
            list.mount().context("failed to fetch todos")?;
            list.delete_todo(index)
                .with_context(|| format!("failed to delete todo {index}"))?;
        }
        Command::Get { index } => {
            let todo = list
                .get_todo(index)
                .with_context(|| format!("failed to fetch todo {index}"))?;
            println!("{}", view::render_item(index, &todo, mode));
            return Ok(());
        }
    }
    print!("{}", view::render_list(list.todos(), mode));
    if let Some(status) = view::render_status(list.status()) {
        println!("{status}");
    }
    Ok(())
}

fn interactive(list: &mut TodoList<UreqTransport>) -> Result<()> {
    let mode = strike_mode();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    // A failed mount is shown in the status line, like any other failure.
    if let Err(e) = list.mount() {
        debug!(error = %e, "initial fetch failed");
    }

    let mut notice: Option<String> = None;
    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "\n{}", view::render_list(list.todos(), mode))?;
        if let Some(text) = notice.take().or_else(|| view::render_status(list.status())) {
            writeln!(stdout, "{text}")?;
        }
        write!(stdout, "New task... > ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read input")?;

        let action = match command::parse(&line) {
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(e) => {
                notice = Some(format!("error: {e}"));
                continue;
            }
        };

        let outcome = match action {
            Action::Quit => break,
            Action::Help => {
                notice = Some(command::HELP.to_string());
                continue;
            }
            Action::Refresh => list.fetch_todos().map(|()| None),
            Action::Add(title) => {
                list.set_title(title);
                list.add_todo()
            }
            Action::Complete(index) => list.mark_complete(index),
            Action::Delete(index) => list.delete_todo(index),
        };
        if let Err(e) = outcome {
            debug!(error = %e, "operation failed");
        }
    }
    writeln!(stdout)?;
    Ok(())
}
