/// Size of the editing buffer, terminator included.
pub const MAX_LINE: usize = 4096;

/// The line being edited.
///
/// `text` always holds `capacity + 1` bytes so that `text[len]` is the
/// terminator, and every operation keeps `pos <= len <= capacity`.
/// Operations return `true` when they changed something the screen shows.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    text: Vec<u8>,
    len: usize,
    pos: usize,
    capacity: usize,
}

impl Default for LineBuffer {
    fn default() -> Self {
        LineBuffer::new(MAX_LINE)
    }
}

impl LineBuffer {
    /// `size` includes the terminator, so `size - 1` bytes are usable.
    pub fn new(size: usize) -> LineBuffer {
        let capacity = size.saturating_sub(1).max(1);
        LineBuffer {
            text: vec![0; capacity + 1],
            len: 0,
            pos: 0,
            capacity,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.text[..self.len]
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    pub fn at_end(&self) -> bool {
        self.pos == self.len
    }

    /// Replaces the content, truncated to capacity; cursor goes to the end.
    pub fn set_content(&mut self, content: &[u8]) {
        let n = content.len().min(self.capacity);
        self.text[..n].copy_from_slice(&content[..n]);
        self.len = n;
        self.pos = n;
        self.text[self.len] = 0;
    }

    pub fn insert(&mut self, c: u8) -> bool {
        if self.len >= self.capacity {
            return false;
        }
        self.text.copy_within(self.pos..self.len, self.pos + 1);
        self.text[self.pos] = c;
        self.pos += 1;
        self.len += 1;
        self.text[self.len] = 0;
        true
    }

    /// Backspace.
    pub fn delete_left(&mut self) -> bool {
        if self.pos == 0 || self.len == 0 {
            return false;
        }
        self.text.copy_within(self.pos..self.len, self.pos - 1);
        self.pos -= 1;
        self.len -= 1;
        self.text[self.len] = 0;
        true
    }

    /// The "Delete" key: removes the byte under the cursor.
    pub fn delete_right(&mut self) -> bool {
        if self.len == 0 || self.pos >= self.len {
            return false;
        }
        self.text.copy_within(self.pos + 1..self.len, self.pos);
        self.len -= 1;
        self.text[self.len] = 0;
        true
    }

    /// Deletes the word left of the cursor along with the spaces after it.
    pub fn delete_previous_word(&mut self) -> bool {
        let old_pos = self.pos;
        let mut start = self.pos;
        while start > 0 && self.text[start - 1] == b' ' {
            start -= 1;
        }
        while start > 0 && self.text[start - 1] != b' ' {
            start -= 1;
        }
        if start == old_pos {
            return false;
        }
        self.text.copy_within(old_pos..self.len, start);
        self.len -= old_pos - start;
        self.pos = start;
        self.text[self.len] = 0;
        true
    }

    /// Swaps the byte before the cursor with the one under it.
    pub fn transpose(&mut self) -> bool {
        if self.pos == 0 || self.pos >= self.len {
            return false;
        }
        self.text.swap(self.pos - 1, self.pos);
        if self.pos != self.len - 1 {
            self.pos += 1;
        }
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.pos == self.len {
            return false;
        }
        self.pos += 1;
        true
    }

    pub fn move_home(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos = 0;
        true
    }

    pub fn move_end(&mut self) -> bool {
        if self.pos == self.len {
            return false;
        }
        self.pos = self.len;
        true
    }

    /// Ctrl-U: drops the whole line, cursor back at the start.
    pub fn kill_to_start(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.len = 0;
        self.pos = 0;
        self.text[0] = 0;
        true
    }

    /// Ctrl-K: drops everything from the cursor on.
    pub fn kill_to_end(&mut self) -> bool {
        if self.pos == self.len {
            return false;
        }
        self.len = self.pos;
        self.text[self.len] = 0;
        true
    }

    #[cfg(test)]
    fn terminator(&self) -> u8 {
        self.text[self.len]
    }
}
