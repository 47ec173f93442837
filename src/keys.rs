//! Turns raw input bytes into keys.
//!
//! Control bytes map straight to a key. `ESC` starts a sequence that is
//! decoded by a small state machine: `ESC` -> `[` or `O` -> optional
//! numeric parameter -> final byte, and the collected sequence is looked
//! up in `CSI_KEYS` / `SS3_KEYS`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    CtrlA,
    CtrlB,
    CtrlC,
    CtrlD,
    CtrlE,
    CtrlF,
    CtrlH,
    Tab,
    CtrlK,
    CtrlL,
    Enter,
    CtrlN,
    CtrlP,
    CtrlT,
    CtrlU,
    CtrlW,
    Backspace,
    Up,
    Down,
    Right,
    Left,
    Home,
    End,
    Delete,
    /// A complete escape sequence nobody handles.
    Unknown,
    /// Anything else goes into the buffer as is.
    Byte(u8),
}

pub const TAB: u8 = 9;
pub const ESC: u8 = 27;

const CONTROL_KEYS: &[(u8, Key)] = &[
    (1, Key::CtrlA),
    (2, Key::CtrlB),
    (3, Key::CtrlC),
    (4, Key::CtrlD),
    (5, Key::CtrlE),
    (6, Key::CtrlF),
    (8, Key::CtrlH),
    (TAB, Key::Tab),
    (11, Key::CtrlK),
    (12, Key::CtrlL),
    (13, Key::Enter),
    (14, Key::CtrlN),
    (16, Key::CtrlP),
    (20, Key::CtrlT),
    (21, Key::CtrlU),
    (23, Key::CtrlW),
    (127, Key::Backspace),
];

// (parameter, final byte) after `ESC [`
const CSI_KEYS: &[(&[u8], u8, Key)] = &[
    (b"", b'A', Key::Up),
    (b"", b'B', Key::Down),
    (b"", b'C', Key::Right),
    (b"", b'D', Key::Left),
    (b"", b'H', Key::Home),
    (b"", b'F', Key::End),
    (b"1", b'~', Key::Home),
    (b"3", b'~', Key::Delete),
    (b"4", b'~', Key::End),
    (b"7", b'~', Key::Home),
    (b"8", b'~', Key::End),
];

// final byte after `ESC O`
const SS3_KEYS: &[(u8, Key)] = &[
    (b'A', Key::Up),
    (b'B', Key::Down),
    (b'C', Key::Right),
    (b'D', Key::Left),
    (b'H', Key::Home),
    (b'F', Key::End),
];

// longest parameter we keep, e.g. `1;5` in `ESC [1;5C`
const MAX_PARAM: usize = 8;

pub fn control_key(byte: u8) -> Key {
    for (code, key) in CONTROL_KEYS {
        if *code == byte {
            return *key;
        }
    }
    Key::Byte(byte)
}

fn csi_key(param: &[u8], last: u8) -> Key {
    for (p, f, key) in CSI_KEYS {
        if *p == param && *f == last {
            return *key;
        }
    }
    Key::Unknown
}

fn ss3_key(last: u8) -> Key {
    for (f, key) in SS3_KEYS {
        if *f == last {
            return *key;
        }
    }
    Key::Unknown
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ground,
    Escape,
    Csi,
    Ss3,
}

#[derive(Debug)]
pub struct KeyDecoder {
    state: State,
    param: Vec<u8>,
}

impl Default for KeyDecoder {
    fn default() -> Self {
        KeyDecoder::new()
    }
}

impl KeyDecoder {
    pub fn new() -> KeyDecoder {
        KeyDecoder {
            state: State::Ground,
            param: Vec::with_capacity(MAX_PARAM),
        }
    }

    /// True while in the middle of an escape sequence.
    pub fn is_pending(&self) -> bool {
        self.state != State::Ground
    }

    pub fn reset(&mut self) {
        self.state = State::Ground;
        self.param.clear();
    }

    /// Feeds one byte; returns the key once a whole one has been seen.
    pub fn feed(&mut self, byte: u8) -> Option<Key> {
        match self.state {
            State::Ground => {
                if byte == ESC {
                    self.state = State::Escape;
                    None
                } else {
                    Some(control_key(byte))
                }
            }
            State::Escape => match byte {
                b'[' => {
                    self.state = State::Csi;
                    None
                }
                b'O' => {
                    self.state = State::Ss3;
                    None
                }
                _ => {
                    self.reset();
                    Some(Key::Unknown)
                }
            },
            State::Csi => {
                if byte.is_ascii_digit() || byte == b';' {
                    if self.param.len() < MAX_PARAM {
                        self.param.push(byte);
                    }
                    return None;
                }
                let key = csi_key(&self.param, byte);
                self.reset();
                Some(key)
            }
            State::Ss3 => {
                self.reset();
                Some(ss3_key(byte))
            }
        }
    }
}
