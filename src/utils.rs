use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shorten `s` to at most `max_width` terminal columns, ending in "..." when cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    out
}

/// Whole percent for a `score / total` fraction; 0 when there is nothing to score.
pub fn percent(score: usize, total: usize) -> u16 {
    if total == 0 {
        return 0;
    }
    ((score.min(total) * 100) / total) as u16
}

/// Byte offset of the `char_index`-th character, clamped to the end of `text`.
fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Single-line text editing with a character-based cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextCursor {
    pub position: usize,
}

impl TextCursor {
    pub fn at_end(text: &str) -> Self {
        Self {
            position: text.chars().count(),
        }
    }

    pub fn insert(&mut self, text: &mut String, ch: char) {
        let at = byte_offset(text, self.position);
        text.insert(at, ch);
        self.position += 1;
    }

    pub fn backspace(&mut self, text: &mut String) {
        if self.position == 0 {
            return;
        }
        self.position -= 1;
        let at = byte_offset(text, self.position);
        text.remove(at);
    }

    pub fn delete(&mut self, text: &mut String) {
        if self.position < text.chars().count() {
            let at = byte_offset(text, self.position);
            text.remove(at);
        }
    }

    pub fn left(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    pub fn right(&mut self, text: &str) {
        self.position = (self.position + 1).min(text.chars().count());
    }

    pub fn home(&mut self) {
        self.position = 0;
    }

    pub fn end(&mut self, text: &str) {
        self.position = text.chars().count();
    }

    pub fn clamp(&mut self, text: &str) {
        self.position = self.position.min(text.chars().count());
    }
}

/// The slice of `text` to show in a field `width` columns wide so that the cursor stays
/// visible, and the cursor's column within that slice.
pub fn visible_window(text: &str, cursor: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());

    // Walk back from the cursor until the window is full, leaving one column for the cursor.
    let mut start = cursor;
    let mut used = 1;
    while start > 0 {
        let w = chars[start - 1].width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start -= 1;
    }

    let mut shown = String::new();
    let mut shown_width = 0;
    let mut cursor_col = 0;
    for (i, ch) in chars.iter().enumerate().skip(start) {
        let w = ch.width().unwrap_or(0);
        if shown_width + w > width {
            break;
        }
        if i < cursor {
            cursor_col += w;
        }
        shown.push(*ch);
        shown_width += w;
    }
    (shown, cursor_col)
}
