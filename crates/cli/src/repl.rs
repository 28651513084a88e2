//! Line sources for the menu.
//!
//! Interactive mode: rustyline prompt with in-memory history and TAB
//! completion of product names.
//! Pipe mode: read lines from any `BufRead`, prompts are echoed by the menu.

use std::io::{self, BufRead};

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};
use tracing::debug;

use crate::menu::{Menu, MenuError};
use crate::state::SessionState;

/// Where the menu reads operator input from.
pub trait LineSource {
    /// Read one line without its terminator. `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Whether the source draws the prompt itself.
    fn shows_prompt(&self) -> bool;

    /// Offer these values for TAB completion on the next read.
    fn set_completions(&mut self, _candidates: Vec<String>) {}
}

/// Line source for a terminal, backed by rustyline.
pub struct EditorSource {
    rl: Editor<NameHelper, DefaultHistory>,
}

impl EditorSource {
    /// Create an editor with list-style completion.
    pub fn new() -> Result<Self, ReadlineError> {
        let config = Config::builder()
            .history_ignore_space(true)
            .completion_type(CompletionType::List)
            .build();
        let mut rl: Editor<NameHelper, DefaultHistory> = Editor::with_config(config)?;
        rl.set_helper(Some(NameHelper::default()));
        Ok(Self { rl })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let result = self.rl.readline(prompt);
        // Candidates apply to a single prompt only.
        self.set_completions(Vec::new());
        match result {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.rl.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            // Ctrl-C abandons the current field
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Io(e)) => Err(e),
            Err(e) => Err(io::Error::new(io::ErrorKind::Other, e.to_string())),
        }
    }

    fn shows_prompt(&self) -> bool {
        true
    }

    fn set_completions(&mut self, candidates: Vec<String>) {
        if let Some(helper) = self.rl.helper_mut() {
            helper.candidates = candidates;
        }
    }
}

/// Line source over any buffered reader (piped stdin, test scripts).
pub struct PipeSource<R> {
    reader: R,
}

impl<R: BufRead> PipeSource<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for PipeSource<R> {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn shows_prompt(&self) -> bool {
        false
    }
}

/// Run the menu on a terminal.
pub fn run_interactive(state: &mut SessionState) -> anyhow::Result<()> {
    debug!(target: "stockroom::cli", "Starting interactive menu");
    let source = EditorSource::new()?;
    finish(Menu::new(state, source, io::stdout()).run())
}

/// Run the menu over piped stdin.
pub fn run_pipe(state: &mut SessionState) -> anyhow::Result<()> {
    debug!(target: "stockroom::cli", "Starting menu on piped input");
    let stdin = io::stdin();
    let source = PipeSource::new(stdin.lock());
    finish(Menu::new(state, source, io::stdout()).run())
}

fn finish(result: Result<(), MenuError>) -> anyhow::Result<()> {
    match result {
        Ok(()) | Err(MenuError::Eof) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

// =========================================================================
// TAB Completion
// =========================================================================

/// Completes product names at name prompts.
#[derive(Default)]
pub struct NameHelper {
    candidates: Vec<String>,
}

impl Helper for NameHelper {}
impl Validator for NameHelper {}
impl Highlighter for NameHelper {}
impl Hinter for NameHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for NameHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok((0, name_candidates(&self.candidates, &line[..pos])))
    }
}

/// Names starting with `prefix`, ignoring case and leading blanks.
fn name_candidates(names: &[String], prefix: &str) -> Vec<Pair> {
    let prefix = prefix.trim_start().to_lowercase();
    names
        .iter()
        .filter(|name| name.to_lowercase().starts_with(&prefix))
        .map(|name| Pair {
            display: name.clone(),
            replacement: name.clone(),
        })
        .collect()
}
