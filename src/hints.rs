use crate::libs::colored::{self, Color};

/// Text shown to the right of what the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub text: String,
    pub color: Option<Color>,
    pub bold: bool,
}

impl Hint {
    pub fn new(text: &str) -> Hint {
        Hint {
            text: text.to_string(),
            color: None,
            bold: false,
        }
    }

    pub fn color(mut self, color: Color) -> Hint {
        self.color = Some(color);
        self
    }

    pub fn bold(mut self, bold: bool) -> Hint {
        self.bold = bold;
        self
    }
}

/// Suggests a hint for the current buffer; asked once per refresh.
pub trait Hinter {
    fn hint(&self, line: &str) -> Option<Hint>;
}

impl<F> Hinter for F
where
    F: Fn(&str) -> Option<Hint>,
{
    fn hint(&self, line: &str) -> Option<Hint> {
        self(line)
    }
}

/// Bytes drawing `hint` after a buffer of `len` bytes behind a prompt of
/// `plen` bytes; empty when there is no room left on the row.
pub fn render_hint(hint: &Hint, plen: usize, len: usize, cols: usize) -> Vec<u8> {
    let mut seq = Vec::new();
    if plen + len >= cols {
        return seq;
    }

    let max = cols - (plen + len);
    let text = hint.text.as_bytes();
    let text = &text[..text.len().min(max)];

    let color = match (hint.color, hint.bold) {
        (None, true) => Some(Color::White),
        (c, _) => c,
    };
    match color {
        Some(c) => {
            seq.extend_from_slice(colored::sgr(hint.bold, c).as_bytes());
            seq.extend_from_slice(text);
            seq.extend_from_slice(colored::RESET.as_bytes());
        }
        None => seq.extend_from_slice(text),
    }
    seq
}

/// Asks `hinter` about `line` and renders the answer, if any.
pub fn show_hint(hinter: Option<&dyn Hinter>, line: &[u8], plen: usize, cols: usize) -> Vec<u8> {
    let hinter = match hinter {
        Some(x) => x,
        None => return Vec::new(),
    };
    if plen + line.len() >= cols {
        return Vec::new();
    }
    match hinter.hint(&String::from_utf8_lossy(line)) {
        Some(hint) => render_hint(&hint, plen, line.len(), cols),
        None => Vec::new(),
    }
}
