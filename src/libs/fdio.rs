use std::io::{self, Read, Write};
use std::os::fd::RawFd;

use errno::errno;

/// Unbuffered `read(2)`/`write(2)` on a raw descriptor.
///
/// `std::io::Stdout` is line buffered, which would hold back escape
/// sequences until the next newline, so the editor talks to the
/// descriptors directly.
#[derive(Debug, Clone, Copy)]
pub struct FdIo {
    fd: RawFd,
}

impl FdIo {
    pub fn new(fd: RawFd) -> FdIo {
        FdIo { fd }
    }

    pub fn stdin() -> FdIo {
        FdIo::new(libc::STDIN_FILENO)
    }

    pub fn stdout() -> FdIo {
        FdIo::new(libc::STDOUT_FILENO)
    }
}

impl Read for FdIo {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            let n = unsafe { libc::read(self.fd, buf.as_mut_ptr() as *mut libc::c_void, buf.len()) };
            if n >= 0 {
                return Ok(n as usize);
            }
            let e = errno();
            if e.0 != libc::EINTR {
                return Err(io::Error::from_raw_os_error(e.0));
            }
        }
    }
}

impl Write for FdIo {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        loop {
            let n = unsafe { libc::write(self.fd, buf.as_ptr() as *const libc::c_void, buf.len()) };
            if n >= 0 {
                return Ok(n as usize);
            }
            let e = errno();
            if e.0 != libc::EINTR {
                return Err(io::Error::from_raw_os_error(e.0));
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};

    use super::FdIo;

    #[test]
    fn test_pipe_round_trip() {
        let mut fds = [0 as libc::c_int; 2];
        assert_eq!(unsafe { libc::pipe(fds.as_mut_ptr()) }, 0);
        let mut reader = FdIo::new(fds[0]);
        let mut writer = FdIo::new(fds[1]);

        writer.write_all(b"ab").unwrap();
        let mut byte = [0u8; 1];
        assert_eq!(reader.read(&mut byte).unwrap(), 1);
        assert_eq!(byte[0], b'a');
        assert_eq!(reader.read(&mut byte).unwrap(), 1);
        assert_eq!(byte[0], b'b');

        unsafe {
            libc::close(fds[0]);
            libc::close(fds[1]);
        }
    }
}
