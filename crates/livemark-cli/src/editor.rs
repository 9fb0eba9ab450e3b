//! Text buffer and cursor for the editor pane.

use crossterm::event::{KeyCode, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Continue,
    ContentChanged,
}

/// Editable text with a byte-offset cursor that always sits on a char
/// boundary.
#[derive(Debug, Default)]
pub struct EditorBuffer {
    content: String,
    cursor: usize,
}

impl EditorBuffer {
    pub fn new(content: String) -> Self {
        Self { content, cursor: 0 }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Handles plain editing keys. Keys it does not know are ignored.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> EditAction {
        match code {
            KeyCode::Char('a') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_line_start();
                EditAction::Continue
            }
            KeyCode::Char('e') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_line_end();
                EditAction::Continue
            }
            KeyCode::Char(_) if modifiers.contains(KeyModifiers::CONTROL) => EditAction::Continue,
            KeyCode::Char(ch) => {
                self.insert_char(ch);
                EditAction::ContentChanged
            }
            KeyCode::Enter => {
                self.insert_char('\n');
                EditAction::ContentChanged
            }
            KeyCode::Tab => {
                self.insert_char('\t');
                EditAction::ContentChanged
            }
            KeyCode::Backspace => changed_if(self.backspace()),
            KeyCode::Delete => changed_if(self.delete()),
            KeyCode::Left => {
                self.move_left();
                EditAction::Continue
            }
            KeyCode::Right => {
                self.move_right();
                EditAction::Continue
            }
            KeyCode::Up => {
                self.move_up();
                EditAction::Continue
            }
            KeyCode::Down => {
                self.move_down();
                EditAction::Continue
            }
            KeyCode::Home => {
                self.move_line_start();
                EditAction::Continue
            }
            KeyCode::End => {
                self.move_line_end();
                EditAction::Continue
            }
            _ => EditAction::Continue,
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        self.content.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Deletes the char before the cursor. Returns false at the start.
    pub fn backspace(&mut self) -> bool {
        let Some((start, _)) = self.content[..self.cursor].char_indices().next_back() else {
            return false;
        };
        self.content.drain(start..self.cursor);
        self.cursor = start;
        true
    }

    /// Deletes the char under the cursor. Returns false at the end.
    pub fn delete(&mut self) -> bool {
        let Some(ch) = self.content[self.cursor..].chars().next() else {
            return false;
        };
        self.content.drain(self.cursor..self.cursor + ch.len_utf8());
        true
    }

    pub fn move_left(&mut self) {
        if let Some((start, _)) = self.content[..self.cursor].char_indices().next_back() {
            self.cursor = start;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(ch) = self.content[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    pub fn move_line_start(&mut self) {
        self.cursor = self.line_start(self.cursor);
    }

    pub fn move_line_end(&mut self) {
        self.cursor = self.line_end(self.cursor);
    }

    /// Moves to the same column on the previous line, or its end if shorter.
    pub fn move_up(&mut self) {
        let start = self.line_start(self.cursor);
        if start == 0 {
            return;
        }
        let col = self.column();
        let prev_end = start - 1;
        let prev_start = self.line_start(prev_end);
        self.cursor = self.offset_at_column(prev_start, prev_end, col);
    }

    /// Moves to the same column on the next line, or its end if shorter.
    pub fn move_down(&mut self) {
        let end = self.line_end(self.cursor);
        if end == self.content.len() {
            return;
        }
        let col = self.column();
        let next_start = end + 1;
        let next_end = self.line_end(next_start);
        self.cursor = self.offset_at_column(next_start, next_end, col);
    }

    /// 0-based (line, column) of the cursor, with the column in chars.
    pub fn cursor_position(&self) -> (usize, usize) {
        let line = self.content[..self.cursor].matches('\n').count();
        (line, self.column())
    }

    fn column(&self) -> usize {
        self.content[self.line_start(self.cursor)..self.cursor]
            .chars()
            .count()
    }

    fn line_start(&self, pos: usize) -> usize {
        self.content[..pos].rfind('\n').map_or(0, |i| i + 1)
    }

    fn line_end(&self, pos: usize) -> usize {
        self.content[pos..]
            .find('\n')
            .map_or(self.content.len(), |i| pos + i)
    }

    fn offset_at_column(&self, start: usize, end: usize, col: usize) -> usize {
        self.content[start..end]
            .char_indices()
            .nth(col)
            .map_or(end, |(i, _)| start + i)
    }
}

fn changed_if(changed: bool) -> EditAction {
    if changed {
        EditAction::ContentChanged
    } else {
        EditAction::Continue
    }
}
