//! Argument surface and composition for the `todo` binary.
//!
//! [`run`] builds the storage backend from configuration and flags, injects
//! it into a [`TodoStore`], and hands control to the interactive shell or a
//! one-shot command.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::core::command::normalize_title;
use crate::core::position::parse_position;
use crate::exit_codes;
use crate::io::config::load_config;
use crate::io::file_store::FileStorage;
use crate::io::init::{InitOptions, TodoPaths, init_todo};
use crate::io::memory_store::MemoryStorage;
use crate::io::storage::StorageBackend;
use crate::shell::run_shell;
use crate::store::TodoStore;

#[derive(Parser, Debug)]
#[command(name = "todo", version, about = "Keep an ordered todo list between runs")]
pub struct Cli {
    /// Project root containing `.todo/`.
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Collection file to use instead of the configured one.
    #[arg(long, global = true, conflicts_with = "memory")]
    pub file: Option<PathBuf>,

    /// Keep the list in memory only; nothing is written to disk.
    #[arg(long, global = true)]
    pub memory: bool,

    /// Fail instead of starting empty when the collection file is unreadable.
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive prompt (default).
    Shell,
    /// Append an item.
    Add {
        /// Item title; must not be blank.
        title: String,
    },
    /// Print all items with their 1-based numbers.
    List,
    /// Flip completion of the item at a 1-based position.
    Toggle {
        #[arg(allow_hyphen_values = true)]
        position: String,
    },
    /// Remove the item at a 1-based position.
    Delete {
        #[arg(allow_hyphen_values = true)]
        position: String,
    },
    /// Create `.todo/` with a default config and an empty list.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
}

/// Execute `cli` and return the process exit code.
pub fn run(cli: Cli) -> Result<i32> {
    let paths = TodoPaths::new(&cli.root);
    let command = cli.command.clone().unwrap_or(Command::Shell);

    if let Command::Init { force } = command {
        let paths = init_todo(&paths.root, &InitOptions { force })?;
        println!("initialized {}", paths.todo_dir.display());
        return Ok(exit_codes::OK);
    }

    let config = load_config(&paths.config_path).context("load config")?;
    let backend = open_backend(&cli, &paths.data_path(&config));
    let mut store = if cli.strict || config.strict_load {
        TodoStore::open_strict(backend)?
    } else {
        TodoStore::open(backend)
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if command == Command::Shell {
        let stdin = std::io::stdin();
        run_shell(&mut store, stdin.lock(), &mut out)?;
        return Ok(exit_codes::OK);
    }
    run_one_shot(&mut store, &command, &mut out)
}

fn open_backend(cli: &Cli, configured: &Path) -> Box<dyn StorageBackend> {
    if cli.memory {
        debug!("using in-memory storage");
        return Box::new(MemoryStorage::new());
    }
    let path = cli.file.clone().unwrap_or_else(|| configured.to_path_buf());
    debug!(path = %path.display(), "using file storage");
    Box::new(FileStorage::new(path))
}

/// Apply a single non-interactive command. Validation failures are errors
/// (exit `INVALID`); a failed write-through exits with `STORAGE`.
pub fn run_one_shot<B, W>(
    store: &mut TodoStore<B>,
    command: &Command,
    out: &mut W,
) -> Result<i32>
where
    B: StorageBackend,
    W: Write,
{
    let saved = match command {
        Command::Shell | Command::Init { .. } => return Ok(exit_codes::OK),
        Command::List => {
            for (index, item) in store.list().iter().enumerate() {
                writeln!(out, "{}. {}", index + 1, item)?;
            }
            return Ok(exit_codes::OK);
        }
        Command::Add { title } => {
            let title = normalize_title(title).context("title must not be empty")?;
            let saved = store.add(title.as_str());
            writeln!(out, "Added: {title}")?;
            saved
        }
        Command::Toggle { position } => {
            let index = parse_position(position, store.len()).context("invalid item number")?;
            let saved = store.toggle(index).map(|_| ());
            if let Some(item) = store.list().get(index) {
                writeln!(out, "{}. {}", index + 1, item)?;
            }
            saved
        }
        Command::Delete { position } => {
            let index = parse_position(position, store.len()).context("invalid item number")?;
            let title = store.list()[index].title.clone();
            let saved = store.delete(index).map(|_| ());
            writeln!(out, "Deleted: {title}")?;
            saved
        }
    };
    match saved {
        Ok(()) => Ok(exit_codes::OK),
        Err(err) => {
            eprintln!("warning: changes were not saved: {err:#}");
            Ok(exit_codes::STORAGE)
        }
    }
}
