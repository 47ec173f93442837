/// How a call to `Editor::input` ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadResult {
    /// A finished line, without its newline.
    Input(String),
    /// End of input: Ctrl-D on an empty line, or input is exhausted.
    Eof,
    /// Ctrl-C.
    Interrupted,
}

impl ReadResult {
    pub fn input(self) -> Option<String> {
        match self {
            ReadResult::Input(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_interrupted(&self) -> bool {
        matches!(self, ReadResult::Interrupted)
    }
}
