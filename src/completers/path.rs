use std::path::MAIN_SEPARATOR;

use regex::Regex;

use crate::completers::Completer;
use crate::tools;

/// Completes the last word of the line as a file system path.
pub struct PathCompleter;

impl Completer for PathCompleter {
    fn complete(&self, line: &str) -> Vec<String> {
        complete_path(line)
    }
}

pub fn expand_home_string(text: &mut String) {
    let re = match Regex::new(r"^~(?P<tail>/|$)") {
        Ok(x) => x,
        Err(_) => return,
    };
    let home = tools::get_user_home();
    let to = format!("{}$tail", home);
    let result = re.replace(text.as_str(), to.as_str());
    *text = result.to_string();
}

/// Splits off the last space separated word.
pub fn split_last_word(line: &str) -> (&str, &str) {
    match line.rfind(' ') {
        Some(i) => (&line[..i + 1], &line[i + 1..]),
        None => ("", line),
    }
}

/// Returns the line with its last word replaced by every path that word
/// is a prefix of, sorted; directories end with a separator.
pub fn complete_path(line: &str) -> Vec<String> {
    let (head, word) = split_last_word(line);
    let mut lookup = word.to_string();
    expand_home_string(&mut lookup);

    let pattern = format!("{}*", glob::Pattern::escape(&lookup));
    let paths = match glob::glob(&pattern) {
        Ok(x) => x,
        Err(e) => {
            log!("complete_path: bad pattern {:?}: {:?}", pattern, e);
            return Vec::new();
        }
    };

    let mut res = Vec::new();
    for entry in paths.flatten() {
        let mut name = match entry.to_str() {
            Some(x) => x.to_string(),
            None => continue,
        };
        if lookup != word && name.starts_with(&lookup) {
            // keep the user's `~` rather than the expanded home
            name = format!("{}{}", word, &name[lookup.len()..]);
        }
        if entry.is_dir() {
            name.push(MAIN_SEPARATOR);
        }
        res.push(format!("{}{}", head, name));
    }
    res.sort();
    res
}
