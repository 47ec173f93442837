use std::io::{Read, Write};

use crate::session::Session;
use crate::keys::{ESC, TAB};

pub mod path;

/// Produces the candidates offered when Tab is pressed. Each candidate is
/// a whole replacement for the line, not just its last word.
pub trait Completer {
    fn complete(&self, line: &str) -> Vec<String>;
}

impl<F> Completer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn complete(&self, line: &str) -> Vec<String> {
        self(line)
    }
}

/// How a round of Tab completion ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// A key that ended the cycling and still has to be handled.
    Next(u8),
    /// Nothing left to handle, read the next key.
    Consumed,
    /// Reading failed while cycling.
    Aborted,
}

/// Cycles through the candidates for the current line on repeated Tab.
///
/// Candidates are only previewed: the buffer keeps its content until a key
/// other than Tab or Esc picks the one on screen. After the last candidate
/// the original line is shown again, with a bell.
pub(crate) fn complete_line<R: Read, W: Write>(session: &mut Session<'_, R, W>) -> Completion {
    let completer = match session.completer() {
        Some(x) => x,
        None => return Completion::Consumed,
    };
    let candidates = completer.complete(&session.line().to_string_lossy());
    if candidates.is_empty() {
        session.beep();
        return Completion::Consumed;
    }

    let mut i = 0;
    loop {
        if i < candidates.len() {
            session.refresh_preview(candidates[i].as_bytes());
        } else {
            session.refresh();
        }

        let c = match session.read_byte() {
            Some(x) => x,
            None => return Completion::Aborted,
        };

        match c {
            TAB => {
                i = (i + 1) % (candidates.len() + 1);
                if i == candidates.len() {
                    session.beep();
                }
            }
            ESC => {
                if i < candidates.len() {
                    session.refresh();
                }
                return Completion::Consumed;
            }
            _ => {
                if i < candidates.len() {
                    session.line_mut().set_content(candidates[i].as_bytes());
                }
                return Completion::Next(c);
            }
        }
    }
}
