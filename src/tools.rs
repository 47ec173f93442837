use std::env;

/// Terminals known not to understand the escape sequences we emit.
pub const UNSUPPORTED_TERMS: &[&str] = &["dumb", "cons25", "emacs"];

pub fn get_user_home() -> String {
    env::var("HOME").unwrap_or_default()
}

pub fn is_unsupported_term_name(term: &str) -> bool {
    UNSUPPORTED_TERMS.iter().any(|x| x.eq_ignore_ascii_case(term))
}

/// Checks `$TERM` against the denylist.
pub fn is_unsupported_term() -> bool {
    match env::var("TERM") {
        Ok(term) => is_unsupported_term_name(&term),
        Err(_) => false,
    }
}

/// Strips trailing CR and LF bytes.
pub fn trim_newlines(line: &mut Vec<u8>) {
    while let Some(&c) = line.last() {
        if c == b'\n' || c == b'\r' {
            line.pop();
        } else {
            break;
        }
    }
}
