//! Interactive command loop.
//!
//! Reads commands line by line, validates titles and positions, calls into
//! the [`TodoStore`], and prints the outcome. Input and output are generic so
//! tests can drive a session from an in-memory buffer.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::command::{CommandKind, normalize_title};
use crate::core::position::parse_position;
use crate::io::storage::StorageBackend;
use crate::store::TodoStore;

pub const COMMAND_PROMPT: &str = "Command (add, list, toggle, delete, exit): ";
pub const TITLE_PROMPT: &str = "Title: ";
pub const POSITION_PROMPT: &str = "Item number: ";

enum Flow {
    Continue,
    Exit,
}

struct Shell<'a, B, R, W> {
    store: &'a mut TodoStore<B>,
    input: R,
    output: W,
}

/// Run the command loop until `exit` or end of input.
///
/// Validation problems are reported and the loop continues. Only failures to
/// read input or write output end the session with an error.
pub fn run_shell<B, R, W>(store: &mut TodoStore<B>, input: R, output: W) -> Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    let mut shell = Shell {
        store,
        input,
        output,
    };
    loop {
        let Some(line) = shell.ask(COMMAND_PROMPT)? else {
            debug!("end of input; leaving shell");
            writeln!(shell.output)?;
            return Ok(());
        };
        if line.trim().is_empty() {
            continue;
        }
        let flow = match line.parse::<CommandKind>() {
            Ok(kind) => shell.dispatch(kind)?,
            Err(err) => {
                writeln!(
                    shell.output,
                    "Sorry, {err}. Try add, list, toggle, delete or exit."
                )?;
                Flow::Continue
            }
        };
        if let Flow::Exit = flow {
            return Ok(());
        }
    }
}

impl<B, R, W> Shell<'_, B, R, W>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    fn dispatch(&mut self, kind: CommandKind) -> Result<Flow> {
        debug!(command = %kind, "shell command");
        match kind {
            CommandKind::Add => self.add(),
            CommandKind::List => self.list(),
            CommandKind::Toggle => self.toggle(),
            CommandKind::Delete => self.delete(),
            CommandKind::Exit => {
                writeln!(self.output, "Goodbye.")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn add(&mut self) -> Result<Flow> {
        let Some(line) = self.ask(TITLE_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        let Some(title) = normalize_title(&line) else {
            writeln!(self.output, "Title must not be empty.")?;
            return Ok(Flow::Continue);
        };
        let result = self.store.add(title.as_str());
        writeln!(self.output, "Added: {title}")?;
        self.report_save(result)?;
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> Result<Flow> {
        if self.store.is_empty() {
            writeln!(self.output, "No todos yet.")?;
            return Ok(Flow::Continue);
        }
        for (index, item) in self.store.list().iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, item)?;
        }
        Ok(Flow::Continue)
    }

    fn toggle(&mut self) -> Result<Flow> {
        let Some(index) = self.ask_position()? else {
            return Ok(Flow::Continue);
        };
        let result = self.store.toggle(index);
        if let Some(item) = self.store.list().get(index) {
            let state = if item.is_completed { "done" } else { "not done" };
            writeln!(self.output, "Marked {state}: {}", item.title)?;
        }
        self.report_save(result.map(|_| ()))?;
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        let Some(index) = self.ask_position()? else {
            return Ok(Flow::Continue);
        };
        let title = self.store.list()[index].title.clone();
        let result = self.store.delete(index);
        writeln!(self.output, "Deleted: {title}")?;
        self.report_save(result.map(|_| ()))?;
        Ok(Flow::Continue)
    }

    /// Prompt for a 1-based position and return its index, or `None` after
    /// telling the user why it was rejected.
    fn ask_position(&mut self) -> Result<Option<usize>> {
        let Some(line) = self.ask(POSITION_PROMPT)? else {
            return Ok(None);
        };
        match parse_position(&line, self.store.len()) {
            Ok(index) => Ok(Some(index)),
            Err(err) => {
                writeln!(self.output, "Invalid item number: {err}.")?;
                Ok(None)
            }
        }
    }

    fn report_save(&mut self, result: Result<()>) -> Result<()> {
        if let Err(err) = result {
            writeln!(self.output, "warning: changes were not saved: {err:#}")?;
        }
        Ok(())
    }

    /// Print `prompt` and read one line; `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush().context("flush prompt")?;
        let mut buf = Vec::new();
        let read = self.input.read_until(b'\n', &mut buf).context("read input")?;
        if read == 0 {
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD and fail validation like any other bad input.
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::memory_store::MemoryStorage;
    use crate::test_support::{FailingStorage, titles};

    fn session<B: StorageBackend>(store: &mut TodoStore<B>, script: &str) -> String {
        session_bytes(store, script.as_bytes())
    }

    fn session_bytes<B: StorageBackend>(store: &mut TodoStore<B>, script: &[u8]) -> String {
        let mut out = Vec::new();
        run_shell(store, script, &mut out).expect("shell");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn add_then_list_shows_numbered_items() {
        let mut store = TodoStore::open(MemoryStorage::new());
        let out = session(&mut store, "add\nBuy milk\nadd\nWalk dog\nlist\nexit\n");
        assert!(out.contains("Added: Buy milk"));
        assert!(out.contains("1. [ ] Buy milk\n2. [ ] Walk dog\n"));
        assert!(out.ends_with("Goodbye.\n"));
        assert_eq!(titles(store.list()), vec!["Buy milk", "Walk dog"]);
    }

    #[test]
    fn empty_title_is_rejected_without_mutation() {
        let mut store = TodoStore::open(MemoryStorage::new());
        let out = session(&mut store, "add\n   \nexit\n");
        assert!(out.contains("Title must not be empty."));
        assert!(store.is_empty());
        assert_eq!(store.backend().save_count(), 0);
    }

    #[test]
    fn unknown_command_is_rejected_and_loop_continues() {
        let mut store = TodoStore::open(MemoryStorage::new());
        let out = session(&mut store, "frobnicate\nlist\nexit\n");
        assert!(out.contains("Sorry, unknown command 'frobnicate'."));
        assert!(out.contains("No todos yet."));
    }

    #[test]
    fn toggle_and_delete_use_one_based_positions() {
        let mut store = TodoStore::open(MemoryStorage::new());
        let out = session(
            &mut store,
            "add\na\nadd\nb\ntoggle\n2\nlist\ndelete\n1\nlist\nexit\n",
        );
        assert!(out.contains("Marked done: b"));
        assert!(out.contains("1. [ ] a\n2. [x] b\n"));
        assert!(out.contains("Deleted: a"));
        assert!(out.contains("1. [x] b\n"));
        assert_eq!(titles(store.list()), vec!["b"]);
    }

    #[test]
    fn bad_positions_are_rejected_without_mutation() {
        let mut store = TodoStore::open(MemoryStorage::new());
        let out = session(
            &mut store,
            "add\na\ntoggle\n0\ntoggle\n2\ndelete\nx\ndelete\n-1\nexit\n",
        );
        assert!(out.contains("Invalid item number: item 0 does not exist (choose 1-1)."));
        assert!(out.contains("Invalid item number: item 2 does not exist (choose 1-1)."));
        assert!(out.contains("Invalid item number: 'x' is not a number."));
        assert!(out.contains("Invalid item number: item -1 does not exist (choose 1-1)."));
        assert_eq!(store.len(), 1);
        assert!(!store.list()[0].is_completed);
        assert_eq!(store.backend().save_count(), 1);
    }

    #[test]
    fn end_of_input_leaves_cleanly() {
        let mut store = TodoStore::open(MemoryStorage::new());
        let out = session(&mut store, "add\nhalf");
        assert_eq!(titles(store.list()), vec!["half"]);
        assert!(out.ends_with(&format!("{COMMAND_PROMPT}\n")));
    }

    #[test]
    fn save_failure_is_reported_and_session_continues() {
        let mut store = TodoStore::open(FailingStorage::unwritable());
        let out = session(&mut store, "add\nkeep\nlist\nexit\n");
        assert!(out.contains("warning: changes were not saved: save todos: disk full"));
        assert!(out.contains("1. [ ] keep"));
    }

    #[test]
    fn undecodable_input_is_rejected_and_session_continues() {
        let mut store = TodoStore::open(MemoryStorage::new());
        let out = session_bytes(
            &mut store,
            b"add\nkeep\n\xff\xfe\ntoggle\n\xff\xfe\nadd\nsecond\nexit\n",
        );
        assert!(out.contains("Sorry, unknown command"));
        assert!(out.contains("is not a number."));
        assert!(out.ends_with("Goodbye.\n"));
        assert_eq!(titles(store.list()), vec!["keep", "second"]);
        assert!(!store.list()[0].is_completed);
    }
}
