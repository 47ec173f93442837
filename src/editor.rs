use std::io::{self, BufRead, Read, Write};
use std::path::Path;

use crate::buffer::MAX_LINE;
use crate::completers::Completer;
use crate::session::Session;
use crate::hints::Hinter;
use crate::history::History;
use crate::libs::colored;
use crate::libs::fdio::FdIo;
use crate::libs::raw_mode::RawModeGuard;
use crate::libs::{self, term_size};
use crate::rcfile::Config;
use crate::tools;
use crate::types::ReadResult;

/// A line editor: the settings, history and callbacks shared by every
/// line it reads.
///
/// `input` borrows the editor mutably, so only one line can be edited at
/// a time.
pub struct Editor {
    multi_line: bool,
    max_line: usize,
    history: History,
    completer: Option<Box<dyn Completer>>,
    hinter: Option<Box<dyn Hinter>>,
}

impl Default for Editor {
    fn default() -> Self {
        Editor::new()
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("multi_line", &self.multi_line)
            .field("max_line", &self.max_line)
            .field("history", &self.history.len())
            .field("completer", &self.completer.is_some())
            .field("hinter", &self.hinter.is_some())
            .finish()
    }
}

impl Editor {
    pub fn new() -> Editor {
        Editor {
            multi_line: false,
            max_line: MAX_LINE,
            history: History::new(),
            completer: None,
            hinter: None,
        }
    }

    pub fn with_config(config: &Config) -> Editor {
        let mut editor = Editor::new();
        editor.multi_line = config.multi_line;
        editor.max_line = config.max_line;
        editor.history.set_max_size(config.history_max_size);
        editor
    }

    pub fn is_multi_line(&self) -> bool {
        self.multi_line
    }

    pub fn set_multi_line(&mut self, multi_line: bool) {
        self.multi_line = multi_line;
    }

    pub fn set_completer<C: Completer + 'static>(&mut self, completer: C) {
        self.completer = Some(Box::new(completer));
    }

    pub fn clear_completer(&mut self) {
        self.completer = None;
    }

    pub fn set_hinter<H: Hinter + 'static>(&mut self, hinter: H) {
        self.hinter = Some(Box::new(hinter));
    }

    pub fn clear_hinter(&mut self) {
        self.hinter = None;
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn add_history(&mut self, line: &str) -> bool {
        self.history.add(line)
    }

    pub fn set_history_max_size(&mut self, max_size: usize) {
        self.history.set_max_size(max_size);
    }

    pub fn load_history<P: AsRef<Path>>(&mut self, path: P) -> io::Result<()> {
        self.history.load(path)
    }

    pub fn save_history<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        self.history.save(path)
    }

    /// Reads a line, showing `prompt` first.
    ///
    /// With a terminal on stdin this edits the line in raw mode. Piped
    /// input, or a terminal we cannot drive, is read without editing.
    pub fn input(&mut self, prompt: &str) -> ReadResult {
        if !libs::isatty(libc::STDIN_FILENO) {
            return read_no_tty(&mut io::stdin().lock());
        }
        if tools::is_unsupported_term() {
            log!("unsupported terminal, reading without editing");
            return read_unsupported(&mut io::stdin().lock(), &mut io::stdout(), prompt, self.max_line);
        }
        self.input_raw(prompt)
    }

    fn input_raw(&mut self, prompt: &str) -> ReadResult {
        let guard = match RawModeGuard::enable(libc::STDIN_FILENO) {
            Ok(x) => x,
            Err(e) => {
                log!("enable raw mode failed: {}", e);
                return read_no_tty(&mut io::stdin().lock());
            }
        };

        let mut input = FdIo::stdin();
        let mut output = FdIo::stdout();
        let cols = term_size::get_columns(&mut input, &mut output);
        let result = self.edit_with(input, output, prompt, cols);

        drop(guard);
        if let Err(e) = output.write_all(b"\n") {
            log!("write error: {:?}", e);
        }
        result
    }

    /// Edits one line read from `input`, drawing on `output`, for a
    /// terminal `cols` wide. The terminal is expected to be in raw mode.
    pub fn edit_with<R: Read, W: Write>(
        &mut self,
        input: R,
        output: W,
        prompt: &str,
        cols: usize,
    ) -> ReadResult {
        self.history.begin_edit();
        let result = {
            let mut session = Session::new(
                input,
                output,
                prompt,
                cols,
                self.max_line,
                self.multi_line,
                &mut self.history,
                self.completer.as_deref(),
                self.hinter.as_deref(),
            );
            session.edit()
        };
        self.history.end_edit();
        result
    }

    /// Clears the screen, cursor to the top left.
    pub fn clear_screen(&self) {
        let mut output = FdIo::stdout();
        if let Err(e) = output.write_all(colored::CLEAR_SCREEN.as_bytes()) {
            log!("clear screen error: {:?}", e);
        }
    }
}

/// Reads a line from something that is not a terminal, of any length.
pub fn read_no_tty<R: BufRead>(input: &mut R) -> ReadResult {
    let mut line = Vec::new();
    match input.read_until(b'\n', &mut line) {
        Ok(0) => return ReadResult::Eof,
        Ok(_) => {}
        Err(e) => {
            log!("read error: {:?}", e);
            if line.is_empty() {
                return ReadResult::Eof;
            }
        }
    }
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    ReadResult::Input(String::from_utf8_lossy(&line).into_owned())
}

/// Reads a line on a terminal too dumb for escape sequences: the prompt
/// is printed as is and at most `max_line - 1` bytes are read.
pub fn read_unsupported<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    max_line: usize,
) -> ReadResult {
    if output.write_all(prompt.as_bytes()).and_then(|_| output.flush()).is_err() {
        return ReadResult::Eof;
    }

    let limit = max_line.saturating_sub(1) as u64;
    let mut line = Vec::new();
    match input.by_ref().take(limit).read_until(b'\n', &mut line) {
        Ok(0) => return ReadResult::Eof,
        Ok(_) => {}
        Err(e) => {
            log!("read error: {:?}", e);
            return ReadResult::Eof;
        }
    }
    tools::trim_newlines(&mut line);
    ReadResult::Input(String::from_utf8_lossy(&line).into_owned())
}
