//! Screen refresh.
//!
//! Both modes build the whole update as one byte string so a refresh is a
//! single write. The functions here are pure: they take the model and
//! return the bytes, so they can be checked against literal sequences.

use crate::libs::colored;

/// What the multi-line renderer remembers between two refreshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    pub cols: usize,
    /// Cursor position at the previous refresh.
    pub oldpos: usize,
    /// Most rows the edited line has used so far.
    pub maxrows: usize,
}

impl RenderState {
    pub fn new(cols: usize) -> RenderState {
        RenderState {
            cols: cols.max(1),
            oldpos: 0,
            maxrows: 0,
        }
    }
}

/// The part of `buf` shown in single-line mode: scrolled right until the
/// cursor fits, then cut on the right to the width. Returns `(start, end,
/// cursor column relative to the window)`.
pub fn visible_window(plen: usize, len: usize, pos: usize, cols: usize) -> (usize, usize, usize) {
    let mut start = 0;
    let mut pos = pos;
    let mut len = len;
    while pos > 0 && plen + pos >= cols {
        start += 1;
        len -= 1;
        pos -= 1;
    }
    while len > 0 && plen + len > cols {
        len -= 1;
    }
    (start, start + len, pos)
}

fn set_column(seq: &mut Vec<u8>, col: usize) {
    seq.push(b'\r');
    if col > 0 {
        seq.extend_from_slice(colored::cursor_forward(col).as_bytes());
    }
}

/// Single-line refresh. `hint` is the already rendered hint overlay.
pub fn single_line(prompt: &str, buf: &[u8], pos: usize, cols: usize, hint: &[u8]) -> Vec<u8> {
    let plen = prompt.len();
    let (start, end, pos) = visible_window(plen, buf.len(), pos, cols);

    let mut seq = Vec::with_capacity(plen + (end - start) + hint.len() + 16);
    seq.push(b'\r');
    seq.extend_from_slice(prompt.as_bytes());
    seq.extend_from_slice(&buf[start..end]);
    seq.extend_from_slice(hint);
    seq.extend_from_slice(colored::ERASE_LINE_RIGHT.as_bytes());
    set_column(&mut seq, pos + plen);
    seq
}

/// Multi-line refresh: wipes the rows drawn last time, bottom up, redraws
/// prompt, buffer and hint, then walks the cursor back up to its row.
/// Returns the bytes and the state for the next call.
pub fn multi_line(
    prompt: &str,
    buf: &[u8],
    pos: usize,
    hint: &[u8],
    state: &RenderState,
) -> (Vec<u8>, RenderState) {
    let plen = prompt.len();
    let cols = state.cols.max(1);
    let len = buf.len();
    let mut next = *state;

    let mut rows = (plen + len + cols - 1) / cols;
    let rpos = (plen + state.oldpos + cols) / cols;
    let old_rows = state.maxrows;
    if rows > next.maxrows {
        next.maxrows = rows;
    }

    let mut seq = Vec::new();

    // go to the last row drawn before, then clear upwards
    if old_rows > rpos {
        seq.extend_from_slice(colored::cursor_down(old_rows - rpos).as_bytes());
    }
    for _ in 1..old_rows {
        seq.extend_from_slice(b"\r");
        seq.extend_from_slice(colored::ERASE_LINE_RIGHT.as_bytes());
        seq.extend_from_slice(colored::cursor_up(1).as_bytes());
    }
    seq.extend_from_slice(b"\r");
    seq.extend_from_slice(colored::ERASE_LINE_RIGHT.as_bytes());

    seq.extend_from_slice(prompt.as_bytes());
    seq.extend_from_slice(buf);
    seq.extend_from_slice(hint);

    // the cursor sits right on the margin at the end of the line: the
    // terminal would not wrap until the next byte, so wrap explicitly
    if pos > 0 && pos == len && (pos + plen) % cols == 0 {
        seq.extend_from_slice(b"\n\r");
        rows += 1;
        if rows > next.maxrows {
            next.maxrows = rows;
        }
    }

    let rpos2 = (plen + pos + cols) / cols;
    if rows > rpos2 {
        seq.extend_from_slice(colored::cursor_up(rows - rpos2).as_bytes());
    }

    set_column(&mut seq, (plen + pos) % cols);

    next.oldpos = pos;
    (seq, next)
}
