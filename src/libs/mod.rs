pub mod colored;
pub mod fdio;
pub mod raw_mode;
pub mod term_size;

pub fn isatty(fd: i32) -> bool {
    unsafe { libc::isatty(fd) == 1 }
}
