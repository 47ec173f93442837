use std::os::fd::{BorrowedFd, RawFd};
use std::sync::{Mutex, Once};

use nix::sys::termios::{self, ControlFlags, InputFlags, LocalFlags, OutputFlags};
use nix::sys::termios::{SetArg, SpecialCharacterIndices, Termios};

use crate::libs;

lazy_static! {
    // settings saved by the last successful `enable()`; `Some` while raw
    static ref ORIGINAL: Mutex<Option<(RawFd, Termios)>> = Mutex::new(None);
}

static ATEXIT: Once = Once::new();

extern "C" fn restore_at_exit() {
    disable();
}

fn borrow(fd: RawFd) -> BorrowedFd<'static> {
    // callers only pass the process's standard descriptors
    unsafe { BorrowedFd::borrow_raw(fd) }
}

#[derive(Debug)]
pub enum RawModeError {
    NotATty,
    Termios(nix::Error),
}

impl std::fmt::Display for RawModeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawModeError::NotATty => write!(f, "input is not a terminal"),
            RawModeError::Termios(e) => write!(f, "termios: {}", e),
        }
    }
}

impl std::error::Error for RawModeError {}

impl From<nix::Error> for RawModeError {
    fn from(e: nix::Error) -> Self {
        RawModeError::Termios(e)
    }
}

/// Turns the original settings into raw ones: no canonical mode, no echo,
/// no signal characters, no output post-processing, 8-bit chars, and reads
/// that return after every single byte.
pub fn make_raw(original: &Termios) -> Termios {
    let mut raw = original.clone();

    raw.input_flags.remove(
        InputFlags::BRKINT
            | InputFlags::ICRNL
            | InputFlags::INPCK
            | InputFlags::ISTRIP
            | InputFlags::IXON,
    );
    raw.output_flags.remove(OutputFlags::OPOST);
    raw.control_flags.insert(ControlFlags::CS8);
    raw.local_flags.remove(
        LocalFlags::ECHO | LocalFlags::ICANON | LocalFlags::IEXTEN | LocalFlags::ISIG,
    );
    raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 1;
    raw.control_chars[SpecialCharacterIndices::VTIME as usize] = 0;
    raw
}

pub fn enable(fd: RawFd) -> Result<(), RawModeError> {
    if !libs::isatty(fd) {
        return Err(RawModeError::NotATty);
    }

    ATEXIT.call_once(|| unsafe {
        if libc::atexit(restore_at_exit) != 0 {
            log!("raw_mode: atexit registration failed");
        }
    });

    let original = termios::tcgetattr(borrow(fd))?;
    let raw = make_raw(&original);
    termios::tcsetattr(borrow(fd), SetArg::TCSAFLUSH, &raw)?;

    if let Ok(mut saved) = ORIGINAL.lock() {
        *saved = Some((fd, original));
    }
    Ok(())
}

/// Restores the settings saved by `enable()`. A second call is a no-op.
pub fn disable() {
    let saved = match ORIGINAL.lock() {
        Ok(mut x) => x.take(),
        Err(_) => return,
    };
    if let Some((fd, original)) = saved {
        if let Err(e) = termios::tcsetattr(borrow(fd), SetArg::TCSAFLUSH, &original) {
            log!("raw_mode: restore failed: {:?}", e);
        }
    }
}

pub fn is_enabled() -> bool {
    match ORIGINAL.lock() {
        Ok(x) => x.is_some(),
        Err(_) => false,
    }
}

/// Leaves raw mode when dropped, so a panic while editing does not leave
/// the terminal unusable.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn enable(fd: RawFd) -> Result<RawModeGuard, RawModeError> {
        enable(fd)?;
        Ok(RawModeGuard { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        disable();
    }
}
