use std::io::{Read, Write};
use std::mem;

use crate::libs::colored;

pub const DEFAULT_COLUMNS: usize = 80;

/// Returns `(columns, rows)` for the current terminal if stdout is a TTY.
pub fn dimensions() -> Option<(usize, usize)> {
    unsafe {
        let fd = libc::STDOUT_FILENO;
        let is_tty = libc::isatty(fd) == 1;
        if !is_tty {
            log!("term_size: stdout is not a TTY.");
            return None;
        }

        let mut ws: libc::winsize = mem::zeroed();

        if libc::ioctl(fd, libc::TIOCGWINSZ, &mut ws) != 0 {
            return None;
        }

        let cols = ws.ws_col as usize;
        let rows = ws.ws_row as usize;
        if cols > 0 && rows > 0 {
            Some((cols, rows))
        } else {
            None
        }
    }
}

/// Parses a cursor position report `ESC [ rows ; cols` (the final `R`
/// already stripped) into `(row, col)`.
pub fn parse_cursor_report(report: &[u8]) -> Option<(usize, usize)> {
    let body = report.strip_prefix(b"\x1b[")?;
    let text = std::str::from_utf8(body).ok()?;
    let (rows, cols) = text.split_once(';')?;
    let rows = rows.trim().parse::<usize>().ok()?;
    let cols = cols.trim().parse::<usize>().ok()?;
    Some((rows, cols))
}

/// Asks the terminal where the cursor is and returns its column.
pub fn cursor_column<R: Read, W: Write>(input: &mut R, output: &mut W) -> Option<usize> {
    output.write_all(colored::QUERY_CURSOR.as_bytes()).ok()?;
    output.flush().ok()?;

    let mut report = Vec::with_capacity(32);
    let mut byte = [0u8; 1];
    while report.len() < 32 {
        match input.read(&mut byte) {
            Ok(1) if byte[0] != b'R' => report.push(byte[0]),
            _ => break,
        }
    }

    parse_cursor_report(&report).map(|(_, col)| col)
}

/// Finds the width by jumping to the right margin and asking where the
/// cursor ended up, then moves the cursor back where it was.
pub fn probe_columns<R: Read, W: Write>(input: &mut R, output: &mut W) -> Option<usize> {
    let start = cursor_column(input, output)?;
    output.write_all(colored::cursor_forward(999).as_bytes()).ok()?;
    let cols = cursor_column(input, output)?;
    if cols > start {
        let _ = output.write_all(colored::cursor_backward(cols - start).as_bytes());
    }
    if cols == 0 {
        return None;
    }
    Some(cols)
}

/// Terminal width: the window size if the OS knows it, else what the
/// terminal reports, else 80.
pub fn get_columns<R: Read, W: Write>(input: &mut R, output: &mut W) -> usize {
    if let Some((cols, _)) = dimensions() {
        return cols;
    }
    match probe_columns(input, output) {
        Some(cols) => cols,
        None => {
            log!("term_size: probe failed, assuming {} columns", DEFAULT_COLUMNS);
            DEFAULT_COLUMNS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cursor_report() {
        assert_eq!(parse_cursor_report(b"\x1b[12;40"), Some((12, 40)));
        assert_eq!(parse_cursor_report(b"\x1b[1;1"), Some((1, 1)));
        assert_eq!(parse_cursor_report(b"[12;40"), None);
        assert_eq!(parse_cursor_report(b"\x1b[12"), None);
        assert_eq!(parse_cursor_report(b"\x1b[a;b"), None);
        assert_eq!(parse_cursor_report(b""), None);
    }

    #[test]
    fn test_probe_columns() {
        let mut input: &[u8] = b"\x1b[5;3R\x1b[5;120R";
        let mut output = Vec::new();
        assert_eq!(probe_columns(&mut input, &mut output), Some(120));
        assert_eq!(output, b"\x1b[6n\x1b[999C\x1b[6n\x1b[117D".to_vec());
    }

    #[test]
    fn test_probe_columns_no_reply() {
        let mut input: &[u8] = b"";
        let mut output = Vec::new();
        assert_eq!(probe_columns(&mut input, &mut output), None);
    }

    #[test]
    fn test_probe_columns_garbage_reply() {
        let mut input: &[u8] = b"xyzR";
        let mut output = Vec::new();
        assert_eq!(probe_columns(&mut input, &mut output), None);
    }
}
