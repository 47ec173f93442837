pub fn getpid() -> i32 {
    unsafe { libc::getpid() }
}

/// Appends a line to the file named by `RAWLINE_LOG_FILE`, if set.
///
/// Nothing is ever printed to the terminal: the editor owns the screen
/// while a line is being edited.
#[macro_export]
macro_rules! log {
    ($fmt:expr) => {{
        let log_file = if let Ok(x) = std::env::var("RAWLINE_LOG_FILE") {
            x
        } else {
            String::new()
        };

        if !log_file.is_empty() {
            use std::io::Write as _;

            let msg = $fmt;
            if let Ok(mut cfile) = std::fs::OpenOptions::new()
                .append(true)
                .create(true)
                .open(&log_file)
            {
                let pid = $crate::tlog::getpid();
                let now = $crate::ctime::DateTime::now();
                let msg = format!("[{}][{}] {}", now, pid, msg);
                let msg = if msg.ends_with('\n') { msg } else { format!("{}\n", msg) };
                let _ = cfile.write_all(msg.as_bytes());
            }
        }
    }};

    ($fmt:expr, $($arg:tt)*) => {{
        let msg = format!($fmt, $($arg)*);
        $crate::log!(&msg);
    }};
}
