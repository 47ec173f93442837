use std::io::{Read, Write};

use crate::buffer::LineBuffer;
use crate::completers::{self, Completer, Completion};
use crate::hints::{self, Hinter};
use crate::history::{Direction, History};
use crate::keys::{Key, KeyDecoder, TAB};
use crate::libs::colored;
use crate::refresh::{self, RenderState};
use crate::types::ReadResult;

/// One editing session: the state of a single `input()` call.
///
/// It expects `input` to be a terminal already in raw mode, so every key
/// arrives as soon as it is pressed.
pub struct Session<'a, R: Read, W: Write> {
    input: R,
    output: W,
    prompt: &'a str,
    line: LineBuffer,
    render: RenderState,
    multi_line: bool,
    history: &'a mut History,
    history_index: usize,
    completer: Option<&'a dyn Completer>,
    hinter: Option<&'a dyn Hinter>,
    decoder: KeyDecoder,
}

impl<'a, R: Read, W: Write> Session<'a, R, W> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        input: R,
        output: W,
        prompt: &'a str,
        cols: usize,
        max_line: usize,
        multi_line: bool,
        history: &'a mut History,
        completer: Option<&'a dyn Completer>,
        hinter: Option<&'a dyn Hinter>,
    ) -> Session<'a, R, W> {
        Session {
            input,
            output,
            prompt,
            line: LineBuffer::new(max_line),
            render: RenderState::new(cols),
            multi_line,
            history,
            history_index: 0,
            completer,
            hinter,
            decoder: KeyDecoder::new(),
        }
    }

    pub fn line(&self) -> &LineBuffer {
        &self.line
    }

    pub fn line_mut(&mut self) -> &mut LineBuffer {
        &mut self.line
    }

    pub fn completer(&self) -> Option<&'a dyn Completer> {
        self.completer
    }

    /// Reads one byte; `None` on end of input or a read error.
    pub fn read_byte(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        match self.input.read(&mut byte) {
            Ok(1) => Some(byte[0]),
            Ok(_) => None,
            Err(e) => {
                log!("read error: {:?}", e);
                None
            }
        }
    }

    fn write_all(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        self.output.write_all(bytes)?;
        self.output.flush()
    }

    // a lost screen update is not worth ending the session over
    fn write_lossy(&mut self, bytes: &[u8]) {
        if let Err(e) = self.write_all(bytes) {
            log!("write error: {:?}", e);
        }
    }

    pub fn beep(&mut self) {
        self.write_lossy(colored::BELL.as_bytes());
    }

    fn render_line(&self, buf: &[u8], pos: usize, show_hint: bool) -> (Vec<u8>, RenderState) {
        let plen = self.prompt.len();
        let hinter = if show_hint { self.hinter } else { None };
        let hint = hints::show_hint(hinter, buf, plen, self.render.cols);

        if self.multi_line {
            refresh::multi_line(self.prompt, buf, pos, &hint, &self.render)
        } else {
            let seq = refresh::single_line(self.prompt, buf, pos, self.render.cols, &hint);
            (seq, self.render)
        }
    }

    fn draw(&mut self, show_hint: bool) {
        let (seq, next) = self.render_line(self.line.as_bytes(), self.line.pos(), show_hint);
        self.render = next;
        self.write_lossy(&seq);
    }

    /// Redraws the line so the screen matches the buffer.
    pub fn refresh(&mut self) {
        self.draw(true);
    }

    /// Draws `content` as if it were the buffer, cursor at its end. The
    /// buffer itself is left alone.
    pub fn refresh_preview(&mut self, content: &[u8]) {
        let n = content.len().min(self.line.capacity());
        let (seq, next) = self.render_line(&content[..n], n, true);
        self.render = next;
        self.write_lossy(&seq);
    }

    fn apply(&mut self, op: fn(&mut LineBuffer) -> bool) {
        if op(&mut self.line) {
            self.refresh();
        }
    }

    /// Inserts `c` at the cursor. Returns false if the screen could not be
    /// written.
    fn insert(&mut self, c: u8) -> bool {
        let was_at_end = self.line.at_end();
        if !self.line.insert(c) {
            return true;
        }

        let fits = self.prompt.len() + self.line.len() < self.render.cols;
        if was_at_end && !self.multi_line && fits && self.hinter.is_none() {
            // appending to a line that fits: echoing the byte is enough
            if let Err(e) = self.write_all(&[c]) {
                log!("write error: {:?}", e);
                return false;
            }
            return true;
        }
        self.refresh();
        true
    }

    fn edit_history(&mut self, dir: Direction) {
        let current = self.line.to_string_lossy();
        if let Some(entry) = self.history.navigate(&mut self.history_index, dir, &current) {
            self.line.set_content(entry.as_bytes());
            self.refresh();
        }
    }

    fn clear_screen(&mut self) {
        self.write_lossy(colored::CLEAR_SCREEN.as_bytes());
        self.render.oldpos = 0;
        self.render.maxrows = 0;
        self.refresh();
    }

    fn accept(&mut self) -> ReadResult {
        if self.multi_line && self.line.move_end() {
            self.refresh();
        }
        if self.hinter.is_some() {
            // leave the line on screen exactly as typed
            self.draw(false);
        }
        ReadResult::Input(self.line.to_string_lossy())
    }

    /// Handles one key; returns the result once the session is over.
    pub fn dispatch(&mut self, key: Key) -> Option<ReadResult> {
        match key {
            Key::Enter => return Some(self.accept()),
            Key::CtrlC => return Some(ReadResult::Interrupted),
            Key::CtrlD => {
                // deletes forward, or means end of input on an empty line
                if self.line.is_empty() {
                    return Some(ReadResult::Eof);
                }
                self.apply(LineBuffer::delete_right);
            }
            Key::Backspace | Key::CtrlH => self.apply(LineBuffer::delete_left),
            Key::Delete => self.apply(LineBuffer::delete_right),
            Key::CtrlT => self.apply(LineBuffer::transpose),
            Key::CtrlB | Key::Left => self.apply(LineBuffer::move_left),
            Key::CtrlF | Key::Right => self.apply(LineBuffer::move_right),
            Key::CtrlA | Key::Home => self.apply(LineBuffer::move_home),
            Key::CtrlE | Key::End => self.apply(LineBuffer::move_end),
            Key::CtrlU => self.apply(LineBuffer::kill_to_start),
            Key::CtrlK => self.apply(LineBuffer::kill_to_end),
            Key::CtrlW => self.apply(LineBuffer::delete_previous_word),
            Key::CtrlP | Key::Up => self.edit_history(Direction::Prev),
            Key::CtrlN | Key::Down => self.edit_history(Direction::Next),
            Key::CtrlL => self.clear_screen(),
            Key::Tab => {
                if !self.insert(TAB) {
                    return Some(ReadResult::Eof);
                }
            }
            Key::Byte(c) => {
                if !self.insert(c) {
                    return Some(ReadResult::Eof);
                }
            }
            Key::Unknown => {}
        }
        None
    }

    /// Runs the session until Enter, Ctrl-C, Ctrl-D or end of input.
    ///
    /// If input ends or fails mid-line, the line so far is returned; on an
    /// empty line that is end of input.
    pub fn edit(&mut self) -> ReadResult {
        let prompt = self.prompt;
        if let Err(e) = self.write_all(prompt.as_bytes()) {
            log!("write prompt error: {:?}", e);
            return ReadResult::Eof;
        }

        loop {
            let mut byte = match self.read_byte() {
                Some(x) => x,
                None if self.line.is_empty() => return ReadResult::Eof,
                None => return ReadResult::Input(self.line.to_string_lossy()),
            };

            if byte == TAB && !self.decoder.is_pending() && self.completer.is_some() {
                match completers::complete_line(self) {
                    Completion::Next(c) => byte = c,
                    Completion::Consumed => continue,
                    Completion::Aborted => return ReadResult::Eof,
                }
            }

            let key = match self.decoder.feed(byte) {
                Some(x) => x,
                None => continue,
            };
            if let Some(result) = self.dispatch(key) {
                return result;
            }
        }
    }
}
