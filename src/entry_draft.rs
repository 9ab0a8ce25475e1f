use crate::config::MOODS;
use crate::diary_entry::DiaryEntry;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Mood,
    Text,
}

/// What the dialog should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftEvent {
    Continue,
    Save,
    Cancel,
}

/// The unsaved contents of the "New Entry" dialog.
///
/// `cursor` is a character index into `text`, not a byte offset.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    mood_index: usize,
    text: String,
    cursor: usize,
    focus: Focus,
}

impl Default for EntryDraft {
    fn default() -> Self {
        EntryDraft {
            mood_index: 0,
            text: String::new(),
            cursor: 0,
            focus: Focus::Text,
        }
    }
}

impl EntryDraft {
    pub fn mood(&self) -> &'static str {
        MOODS[self.mood_index]
    }

    pub fn mood_index(&self) -> usize {
        self.mood_index
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn to_entry(&self) -> DiaryEntry {
        DiaryEntry::new(self.mood(), self.text.clone())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DraftEvent {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return DraftEvent::Cancel,
            KeyCode::Char('s') if ctrl => return DraftEvent::Save,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Mood => Focus::Text,
                    Focus::Text => Focus::Mood,
                };
            }
            _ => match self.focus {
                Focus::Mood => self.mood_key(key.code),
                Focus::Text if !ctrl => self.text_key(key.code),
                Focus::Text => {}
            },
        }
        DraftEvent::Continue
    }

    fn mood_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => {
                self.mood_index = (self.mood_index + MOODS.len() - 1) % MOODS.len();
            }
            KeyCode::Right => self.mood_index = (self.mood_index + 1) % MOODS.len(),
            KeyCode::Char(c) => {
                if let Some(n) = c.to_digit(10) {
                    if (1..=MOODS.len() as u32).contains(&n) {
                        self.mood_index = n as usize - 1;
                    }
                }
            }
            KeyCode::Enter | KeyCode::Down => self.focus = Focus::Text,
            _ => {}
        }
    }

    fn text_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Enter => self.insert('\n'),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index(self.cursor);
                    self.text.remove(at);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.char_count() {
                    let at = self.byte_index(self.cursor);
                    self.text.remove(at);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.char_count()),
            KeyCode::Home => self.cursor = self.line_start(self.cursor),
            KeyCode::End => self.cursor = self.line_end(self.cursor),
            KeyCode::Up => {
                let start = self.line_start(self.cursor);
                if start == 0 {
                    self.focus = Focus::Mood;
                } else {
                    let column = self.cursor - start;
                    let prev_start = self.line_start(start - 1);
                    self.cursor = prev_start + column.min(start - 1 - prev_start);
                }
            }
            KeyCode::Down => {
                let end = self.line_end(self.cursor);
                if end < self.char_count() {
                    let column = self.cursor - self.line_start(self.cursor);
                    let next_start = end + 1;
                    let next_end = self.line_end(next_start);
                    self.cursor = next_start + column.min(next_end - next_start);
                }
            }
            _ => {}
        }
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Character index of the first character on the cursor's line.
    fn line_start(&self, char_index: usize) -> usize {
        self.text
            .chars()
            .take(char_index)
            .collect::<Vec<_>>()
            .iter()
            .rposition(|&c| c == '\n')
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    /// Character index of the newline ending the cursor's line, or the end.
    fn line_end(&self, char_index: usize) -> usize {
        self.text
            .chars()
            .skip(char_index)
            .position(|c| c == '\n')
            .map(|i| char_index + i)
            .unwrap_or_else(|| self.char_count())
    }

    /// Row and display column of the cursor within the unwrapped text.
    pub fn cursor_position(&self) -> (u16, u16) {
        let before = &self.text[..self.byte_index(self.cursor)];
        let row = before.matches('\n').count();
        let line = before.rsplit('\n').next().unwrap_or("");
        (row as u16, line.width() as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(draft: &mut EntryDraft, code: KeyCode) -> DraftEvent {
        draft.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(draft: &mut EntryDraft, s: &str) {
        for c in s.chars() {
            let code = if c == '\n' { KeyCode::Enter } else { KeyCode::Char(c) };
            press(draft, code);
        }
    }

    #[test]
    fn starts_with_happy_mood_in_text() {
        let draft = EntryDraft::default();
        assert_eq!(draft.mood(), "😊");
        assert_eq!(draft.focus(), Focus::Text);
        assert_eq!(draft.text(), "");
    }

    #[test]
    fn typing_and_editing_multibyte_text() {
        let mut draft = EntryDraft::default();
        type_str(&mut draft, "Hej på dig");
        press(&mut draft, KeyCode::Left);
        press(&mut draft, KeyCode::Left);
        press(&mut draft, KeyCode::Left);
        press(&mut draft, KeyCode::Left);
        press(&mut draft, KeyCode::Backspace);
        assert_eq!(draft.text(), "Hej p dig");
        type_str(&mut draft, "ö");
        assert_eq!(draft.text(), "Hej pö dig");
        press(&mut draft, KeyCode::Delete);
        assert_eq!(draft.text(), "Hej pödig");
    }

    #[test]
    fn up_and_down_keep_column() {
        let mut draft = EntryDraft::default();
        type_str(&mut draft, "abcdef\nxy\nlonger line");
        press(&mut draft, KeyCode::Home);
        press(&mut draft, KeyCode::Right);
        press(&mut draft, KeyCode::Right);
        press(&mut draft, KeyCode::Right);
        assert_eq!(draft.cursor_position(), (2, 3));

        press(&mut draft, KeyCode::Up);
        assert_eq!(draft.cursor_position(), (1, 2));
        press(&mut draft, KeyCode::Up);
        assert_eq!(draft.cursor_position(), (0, 2));
        press(&mut draft, KeyCode::Down);
        press(&mut draft, KeyCode::Down);
        assert_eq!(draft.cursor_position(), (2, 2));
    }

    #[test]
    fn up_from_first_line_moves_to_moods() {
        let mut draft = EntryDraft::default();
        type_str(&mut draft, "one line");
        press(&mut draft, KeyCode::Up);
        assert_eq!(draft.focus(), Focus::Mood);
        press(&mut draft, KeyCode::Right);
        press(&mut draft, KeyCode::Right);
        assert_eq!(draft.mood(), "😢");
        assert_eq!(draft.text(), "one line");
    }

    #[test]
    fn mood_picker_wraps_and_takes_digits() {
        let mut draft = EntryDraft::default();
        press(&mut draft, KeyCode::Tab);
        press(&mut draft, KeyCode::Left);
        assert_eq!(draft.mood(), "🤩");
        press(&mut draft, KeyCode::Right);
        assert_eq!(draft.mood(), "😊");
        press(&mut draft, KeyCode::Char('5'));
        assert_eq!(draft.mood(), "😴");
        press(&mut draft, KeyCode::Char('9'));
        assert_eq!(draft.mood(), "😴");
        press(&mut draft, KeyCode::Enter);
        assert_eq!(draft.focus(), Focus::Text);
    }

    #[test]
    fn ctrl_s_saves_and_esc_cancels() {
        let mut draft = EntryDraft::default();
        type_str(&mut draft, "s");
        let save = draft.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(save, DraftEvent::Save);
        assert_eq!(draft.text(), "s");
        assert_eq!(press(&mut draft, KeyCode::Esc), DraftEvent::Cancel);
    }

    #[test]
    fn entry_carries_mood_and_full_text() {
        let mut draft = EntryDraft::default();
        press(&mut draft, KeyCode::Tab);
        press(&mut draft, KeyCode::Char('6'));
        press(&mut draft, KeyCode::Tab);
        type_str(&mut draft, "Went to the zoo\nSaw a lion");
        let entry = draft.to_entry();
        assert_eq!(entry.mood, "🤩");
        assert_eq!(entry.text, "Went to the zoo\nSaw a lion");
        assert_eq!(entry.time.len(), "YYYY-MM-DD HH:MM".len());
    }

    #[test]
    fn cursor_column_uses_display_width() {
        let mut draft = EntryDraft::default();
        type_str(&mut draft, "😊a");
        assert_eq!(draft.cursor_position(), (0, 3));
    }
}
