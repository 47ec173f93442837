use std::io::{self, Read, Write};

use crate::libs::fdio::FdIo;
use crate::libs::raw_mode::RawModeGuard;

pub fn describe_byte(c: u8) -> String {
    let shown = if c.is_ascii_graphic() || c == b' ' { c as char } else { '?' };
    format!("'{}' {:02x} ({}) (type quit to exit)", shown, c, c)
}

/// Prints every byte read from `input` until the last four spell `quit`.
pub fn echo_key_codes<R: Read, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    let mut quit = [b' '; 4];
    let mut byte = [0u8; 1];
    loop {
        if input.read(&mut byte)? == 0 {
            return Ok(());
        }
        let c = byte[0];
        quit.rotate_left(1);
        quit[3] = c;
        if &quit == b"quit" {
            return Ok(());
        }
        // raw mode: no output processing, so go back to the left edge by hand
        write!(output, "{}\r\n", describe_byte(c))?;
        output.flush()?;
    }
}

/// Debug mode showing the codes the terminal sends for each key.
pub fn print_key_codes() -> io::Result<()> {
    println!("Key codes debugging mode.");
    println!("Press keys to see scan codes. Type 'quit' at any time to exit.");

    let _guard = RawModeGuard::enable(libc::STDIN_FILENO)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    echo_key_codes(&mut FdIo::stdin(), &mut FdIo::stdout())
}
