use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use regex::Regex;

use crate::buffer::MAX_LINE;
use crate::history::DEFAULT_HISTORY_SIZE;
use crate::tools;

/// Editor settings, read from `~/.rawlinerc`.
///
/// ```text
/// # comments are fine
/// set multiline on
/// set history-size 500
/// set history-file ~/.local/share/rawline/history.txt
/// set max-line 1024
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub multi_line: bool,
    pub history_max_size: usize,
    pub history_file: Option<String>,
    pub max_line: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            multi_line: false,
            history_max_size: DEFAULT_HISTORY_SIZE,
            history_file: None,
            max_line: MAX_LINE,
        }
    }
}

pub fn get_rc_file() -> String {
    if let Ok(x) = env::var("RAWLINE_RC") {
        return x;
    }
    let home = tools::get_user_home();
    format!("{}/{}", home, ".rawlinerc")
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

fn unquote(s: &str) -> String {
    let s = s.trim();
    for q in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(q) && s.ends_with(q) {
            return s[1..s.len() - 1].to_string();
        }
    }
    s.to_string()
}

impl Config {
    /// Defaults, then the rc file, then `RAWLINE_HISTORY_FILE`.
    pub fn load() -> Config {
        let mut config = Config::default();
        let rc_file = get_rc_file();
        if Path::new(rc_file.as_str()).exists() {
            match read_file(&rc_file) {
                Ok(text) => config.apply_text(&text),
                Err(e) => log!("rawline: read rcfile {} err: {:?}", rc_file, e),
            }
        }
        if let Ok(x) = env::var("RAWLINE_HISTORY_FILE") {
            config.history_file = Some(x);
        }
        config
    }

    pub fn apply_text(&mut self, text: &str) {
        let re = match Regex::new(r"^ *set +([a-z-]+) +(.+?) *$") {
            Ok(x) => x,
            Err(e) => {
                log!("rawline: Regex error: {:?}", e);
                return;
            }
        };
        for line in text.lines() {
            if line.trim_start().starts_with('#') {
                continue;
            }
            if let Some(cap) = re.captures(line) {
                self.handle_setting(&cap[1], &unquote(&cap[2]));
            }
        }
    }

    fn handle_setting(&mut self, name: &str, value: &str) {
        match name {
            "multiline" => {
                if let Some(x) = parse_bool(value) {
                    self.multi_line = x;
                }
            }
            "history-size" => {
                if let Ok(x) = value.parse::<usize>() {
                    self.history_max_size = x;
                }
            }
            "history-file" => {
                let mut path = value.to_string();
                if let Some(rest) = path.strip_prefix("~/") {
                    path = format!("{}/{}", tools::get_user_home(), rest);
                }
                self.history_file = Some(path);
            }
            "max-line" => {
                if let Ok(x) = value.parse::<usize>() {
                    if x >= 2 {
                        self.max_line = x;
                    }
                }
            }
            _ => {
                log!("rawline: unknown setting {:?}", name);
            }
        }
    }
}

fn read_file(path: &str) -> std::io::Result<String> {
    let mut file = File::open(path)?;
    let mut text = String::new();
    file.read_to_string(&mut text)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.multi_line);
        assert_eq!(config.history_max_size, 100);
        assert_eq!(config.max_line, 4096);
        assert_eq!(config.history_file, None);
    }

    #[test]
    fn test_apply_text() {
        let mut config = Config::default();
        config.apply_text(
            "# settings\n\
             set multiline on\n\
             set history-size 500\n\
             set history-file \"/tmp/h.txt\"\n\
             set max-line 1024\n\
             set colour blue\n\
             random text\n",
        );
        assert_eq!(config, Config {
            multi_line: true,
            history_max_size: 500,
            history_file: Some("/tmp/h.txt".to_string()),
            max_line: 1024,
        });
    }

    #[test]
    fn test_bad_values_are_ignored() {
        let mut config = Config::default();
        config.apply_text("set multiline maybe\nset history-size lots\nset max-line 1\n");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_commented_setting() {
        let mut config = Config::default();
        config.apply_text("  # set multiline on\n");
        assert!(!config.multi_line);
    }

    #[test]
    fn test_history_file_home() {
        let mut config = Config::default();
        config.apply_text("set history-file ~/h.txt\n");
        let want = format!("{}/h.txt", tools::get_user_home());
        assert_eq!(config.history_file, Some(want));
    }
}
