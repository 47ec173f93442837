use std::collections::VecDeque;
use std::env;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::Path;

use crate::tools;

pub const DEFAULT_HISTORY_SIZE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards older entries (Up, Ctrl-P).
    Prev,
    /// Towards the line being edited (Down, Ctrl-N).
    Next,
}

/// Past lines, oldest first, at most `max_size` of them.
///
/// While a line is being edited the ring also holds a scratch copy of it,
/// which is what index 0 of `navigate` refers to. The scratch copy is never
/// a committed entry: it is not saved and `end_edit` drops it.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    max_size: usize,
    scratch: Option<String>,
}

impl Default for History {
    fn default() -> Self {
        History::new()
    }
}

impl History {
    pub fn new() -> History {
        History::with_max_size(DEFAULT_HISTORY_SIZE)
    }

    pub fn with_max_size(max_size: usize) -> History {
        History {
            entries: VecDeque::new(),
            max_size,
            scratch: None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.entries.iter().map(|x| x.as_str())
    }

    /// Returns false when the line was not added: history is disabled or
    /// the line repeats the latest entry.
    pub fn add(&mut self, line: &str) -> bool {
        if self.max_size == 0 {
            return false;
        }
        if let Some(last) = self.entries.back() {
            if last == line {
                return false;
            }
        }
        if self.entries.len() == self.max_size {
            self.entries.pop_front();
        }
        self.entries.push_back(line.to_string());
        true
    }

    pub fn set_max_size(&mut self, max_size: usize) {
        while self.entries.len() > max_size {
            self.entries.pop_front();
        }
        self.max_size = max_size;
    }

    /// Opens the scratch slot for a new editing session.
    pub fn begin_edit(&mut self) {
        self.scratch = Some(String::new());
    }

    /// Drops the scratch slot.
    pub fn end_edit(&mut self) {
        self.scratch = None;
    }

    pub fn is_editing(&self) -> bool {
        self.scratch.is_some()
    }

    /// Moves `index` one step in `dir` and returns the line to show there.
    ///
    /// `current` is the live buffer. When leaving the scratch slot it is
    /// kept there, so coming back down restores it. Stepping past either
    /// end returns `None` and leaves `index` alone.
    pub fn navigate(&mut self, index: &mut usize, dir: Direction, current: &str) -> Option<String> {
        if self.max_size == 0 || self.entries.is_empty() {
            return None;
        }
        if *index == 0 {
            self.scratch = Some(current.to_string());
        }

        let target = match dir {
            Direction::Prev => *index + 1,
            Direction::Next => index.checked_sub(1)?,
        };
        if target > self.entries.len() {
            return None;
        }

        *index = target;
        if target == 0 {
            return Some(self.scratch.clone().unwrap_or_default());
        }
        self.entries
            .get(self.entries.len() - target)
            .cloned()
    }

    /// Feeds every line of `path` through `add`.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> io::Result<()> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        for line in reader.split(b'\n') {
            let line = line?;
            let mut line = String::from_utf8_lossy(&line).into_owned();
            if let Some(i) = line.find('\r') {
                line.truncate(i);
            }
            self.add(&line);
        }
        Ok(())
    }

    /// Writes one entry per line; the file is readable by its owner only.
    /// Missing parent directories are created.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;

        let mut text = String::new();
        for entry in &self.entries {
            text.push_str(entry);
            text.push('\n');
        }
        file.write_all(text.as_bytes())
    }
}

pub fn get_history_file() -> String {
    if let Ok(hfile) = env::var("RAWLINE_HISTORY_FILE") {
        return hfile;
    }
    if let Ok(d) = env::var("XDG_DATA_HOME") {
        return format!("{}/{}", d, "rawline/history.txt");
    }
    let home = tools::get_user_home();
    format!("{}/{}", home, ".local/share/rawline/history.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(h: &History) -> Vec<&str> {
        h.iter().collect()
    }

    #[test]
    fn test_add_rejects_consecutive_duplicates() {
        let mut h = History::new();
        assert!(h.add("ls"));
        assert!(!h.add("ls"));
        assert_eq!(h.len(), 1);
        assert!(h.add("pwd"));
        assert!(h.add("ls"));
        assert_eq!(entries(&h), vec!["ls", "pwd", "ls"]);
    }

    #[test]
    fn test_eviction_is_fifo() {
        let mut h = History::with_max_size(2);
        h.add("a");
        h.add("b");
        h.add("c");
        assert_eq!(entries(&h), vec!["b", "c"]);

        let mut h = History::with_max_size(5);
        for i in 0..6 {
            h.add(&i.to_string());
        }
        assert_eq!(entries(&h), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_disabled_history() {
        let mut h = History::with_max_size(0);
        assert!(!h.add("a"));
        assert!(h.is_empty());
    }

    #[test]
    fn test_set_max_size() {
        let mut h = History::new();
        for x in ["a", "b", "c", "d"] {
            h.add(x);
        }
        h.set_max_size(2);
        assert_eq!(entries(&h), vec!["c", "d"]);
        h.set_max_size(2);
        assert_eq!(entries(&h), vec!["c", "d"]);
        h.set_max_size(10);
        assert_eq!(entries(&h), vec!["c", "d"]);
        assert_eq!(h.max_size(), 10);
        h.set_max_size(0);
        assert!(h.is_empty());
        assert!(!h.add("e"));
    }

    #[test]
    fn test_navigate_round_trip() {
        let mut h = History::new();
        for x in ["one", "two", "three"] {
            h.add(x);
        }
        h.begin_edit();
        let mut index = 0;

        let mut line = "typed".to_string();
        let mut seen = Vec::new();
        for _ in 0..3 {
            line = h.navigate(&mut index, Direction::Prev, &line).unwrap();
            seen.push(line.clone());
        }
        assert_eq!(seen, vec!["three", "two", "one"]);

        // the oldest entry clamps
        assert_eq!(h.navigate(&mut index, Direction::Prev, &line), None);
        assert_eq!(index, 3);

        for _ in 0..3 {
            line = h.navigate(&mut index, Direction::Next, &line).unwrap();
        }
        assert_eq!(line, "typed");
        assert_eq!(index, 0);

        // so does the scratch slot
        assert_eq!(h.navigate(&mut index, Direction::Next, &line), None);
        h.end_edit();
        assert_eq!(entries(&h), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_navigate_without_entries() {
        let mut h = History::new();
        h.begin_edit();
        let mut index = 0;
        assert_eq!(h.navigate(&mut index, Direction::Prev, "x"), None);
        assert_eq!(index, 0);
    }

    #[test]
    fn test_save_and_load() {
        let path = env::temp_dir().join(format!("rawline-history-{}.txt", crate::tlog::getpid()));
        let mut h = History::new();
        h.add("echo hi");
        h.add("ls -l");
        h.save(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);

        let mut loaded = History::with_max_size(1);
        loaded.load(&path).unwrap();
        assert_eq!(entries(&loaded), vec!["ls -l"]);

        fs::write(&path, "a\r\na\nb\n").unwrap();
        let mut loaded = History::new();
        loaded.load(&path).unwrap();
        assert_eq!(entries(&loaded), vec!["a", "b"]);

        fs::remove_file(&path).unwrap();
        assert!(loaded.load(&path).is_err());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = env::temp_dir().join(format!("rawline-fresh-{}", crate::tlog::getpid()));
        let path = dir.join("rawline").join("history.txt");
        assert!(!dir.exists());

        let mut h = History::new();
        h.add("ls");
        h.save(&path).unwrap();

        let mut loaded = History::new();
        loaded.load(&path).unwrap();
        assert_eq!(entries(&loaded), vec!["ls"]);

        fs::remove_dir_all(&dir).unwrap();
    }
}
