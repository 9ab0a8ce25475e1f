use crate::config::{
    APP_COMMENTS, APP_DEVELOPER, APP_ID, APP_LICENSE, APP_NAME, APP_VERSION, APP_WEBSITE, MOODS,
    TODAY_FORMAT,
};
use crate::diary_entry::DiaryEntry;
use crate::diary_state::DiaryState;
use crate::entry_draft::{DraftEvent, EntryDraft, Focus};
use chrono::Local;
use color_eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::{stdout, Stdout};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const HIGHLIGHT_SYMBOL: &str = "> ";
/// Display columns reserved for the mood glyph in front of each row.
const MOOD_COLUMN: usize = 3;
const PAGE: usize = 5;
const PLACEHOLDER: &str = "What happened today?";
const EMPTY_HINT: &str = "No entries yet. Press + to add your first entry!";

pub enum Action {
    Write,
    Menu,
    About,
    Quit,
    Scroll(Scroll),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    About,
    Quit,
}

const MENU_ITEMS: [MenuItem; 2] = [MenuItem::About, MenuItem::Quit];

impl MenuItem {
    fn label(self) -> &'static str {
        match self {
            MenuItem::About => "About",
            MenuItem::Quit => "Quit",
        }
    }
}

/// Message shown in the footer until the next one replaces it.
#[derive(Debug, Clone)]
pub struct Status {
    pub message: String,
    pub is_error: bool,
}

pub struct UI {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    list_state: ListState,
    status: Option<Status>,
}

impl UI {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        Ok(UI {
            terminal,
            list_state: ListState::default(),
            status: None,
        })
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(Status {
            message: message.into(),
            is_error: false,
        });
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(Status {
            message: message.into(),
            is_error: true,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn display(&mut self, diary_state: &DiaryState) -> Result<()> {
        let list_state = &mut self.list_state;
        let status = self.status.as_ref();
        self.terminal
            .draw(|f| draw_main(f, diary_state, list_state, status))?;
        Ok(())
    }

    /// Read one event from the main screen. Scrolling is handled here and
    /// never reaches the caller.
    pub fn handle_input(&mut self, diary_state: &DiaryState) -> Result<Option<Action>> {
        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }
        match main_action(key) {
            Some(Action::Scroll(scroll)) => {
                let shown = diary_state.recent().len();
                let selected = scroll_selection(self.list_state.selected(), scroll, shown);
                self.list_state.select(selected);
                Ok(None)
            }
            action => Ok(action),
        }
    }

    /// Run the "New Entry" dialog until the user saves (`true`) or
    /// cancels (`false`). The draft is edited in place so a failed save
    /// can reopen it unchanged.
    pub fn compose_entry(
        &mut self,
        diary_state: &DiaryState,
        draft: &mut EntryDraft,
    ) -> Result<bool> {
        loop {
            let list_state = &mut self.list_state;
            let status = self.status.as_ref();
            self.terminal.draw(|f| {
                draw_main(f, diary_state, list_state, None);
                draw_entry_dialog(f, draft, status);
            })?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match draft.handle_key(key) {
                    DraftEvent::Save => return Ok(true),
                    DraftEvent::Cancel => return Ok(false),
                    DraftEvent::Continue => {}
                }
            }
        }
    }

    pub fn show_menu(&mut self, diary_state: &DiaryState) -> Result<Option<MenuItem>> {
        let mut selected_index = 0;

        loop {
            let list_state = &mut self.list_state;
            let status = self.status.as_ref();
            self.terminal.draw(|f| {
                draw_main(f, diary_state, list_state, status);
                draw_menu(f, selected_index);
            })?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Up => selected_index = selected_index.saturating_sub(1),
                    KeyCode::Down => {
                        if selected_index < MENU_ITEMS.len() - 1 {
                            selected_index += 1;
                        }
                    }
                    KeyCode::Enter => return Ok(Some(MENU_ITEMS[selected_index])),
                    KeyCode::Esc | KeyCode::Char('m') | KeyCode::F(10) => return Ok(None),
                    _ => {}
                }
            }
        }
    }

    pub fn show_about(&mut self, diary_state: &DiaryState) -> Result<()> {
        loop {
            let list_state = &mut self.list_state;
            let status = self.status.as_ref();
            self.terminal.draw(|f| {
                draw_main(f, diary_state, list_state, status);
                draw_about(f);
            })?;

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}

impl Drop for UI {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}

/// Leave the alternate screen before the panic report is printed.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        original_hook(info);
    }));
}

pub fn main_action(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('+') | KeyCode::Char('a') | KeyCode::Char('n') => Some(Action::Write),
        KeyCode::Char('m') | KeyCode::F(10) => Some(Action::Menu),
        KeyCode::Char('?') => Some(Action::About),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Scroll(Scroll::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Scroll(Scroll::Down)),
        KeyCode::PageUp => Some(Action::Scroll(Scroll::PageUp)),
        KeyCode::PageDown => Some(Action::Scroll(Scroll::PageDown)),
        KeyCode::Home => Some(Action::Scroll(Scroll::Top)),
        KeyCode::End => Some(Action::Scroll(Scroll::Bottom)),
        _ => None,
    }
}

pub fn scroll_selection(current: Option<usize>, scroll: Scroll, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current.unwrap_or(0).min(len - 1);
    let next = match scroll {
        Scroll::Up => current.saturating_sub(1),
        Scroll::Down => current + 1,
        Scroll::PageUp => current.saturating_sub(PAGE),
        Scroll::PageDown => current + PAGE,
        Scroll::Top => 0,
        Scroll::Bottom => len - 1,
    };
    Some(next.min(len - 1))
}

pub fn draw_main(
    f: &mut Frame,
    diary_state: &DiaryState,
    list_state: &mut ListState,
    status: Option<&Status>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(2),
            ]
            .as_ref(),
        )
        .split(f.area());

    draw_header(f, chunks[0]);

    let title = Paragraph::new("My Diary")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[1]);

    let today = Paragraph::new(Local::now().format(TODAY_FORMAT).to_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(today, chunks[2]);

    let list_area = chunks[3];
    let shown = diary_state.recent().len();
    if shown == 0 {
        list_state.select(None);
        let empty = Paragraph::new(EMPTY_HINT)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(empty, list_area);
    } else {
        let selected = list_state.selected().map_or(0, |i| i.min(shown - 1));
        list_state.select(Some(selected));

        // Borders take two columns.
        let text_width = (list_area.width as usize)
            .saturating_sub(2 + HIGHLIGHT_SYMBOL.width() + MOOD_COLUMN);
        let items: Vec<ListItem> = diary_state
            .recent()
            .map(|entry| entry_item(entry, text_width))
            .collect();

        let entries_list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(format!(
                "Entries ({shown} of {})",
                diary_state.get_entries().len()
            )))
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol(HIGHLIGHT_SYMBOL);
        f.render_stateful_widget(entries_list, list_area, list_state);
    }

    draw_footer(f, chunks[4], status);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::BOTTOM);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let key = Style::default().add_modifier(Modifier::BOLD);
    let add = Paragraph::new(Line::from(vec![
        Span::styled("[+]", key),
        Span::raw(" New entry"),
    ]));
    f.render_widget(add, inner);

    let name = Paragraph::new(APP_NAME)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(name, inner);

    let menu = Paragraph::new(Line::from(vec![
        Span::styled("[m]", key),
        Span::raw(" Menu"),
    ]))
    .alignment(Alignment::Right);
    f.render_widget(menu, inner);
}

fn draw_footer(f: &mut Frame, area: Rect, status: Option<&Status>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)].as_ref())
        .split(area);

    if let Some(status) = status {
        let color = if status.is_error {
            Color::Red
        } else {
            Color::Green
        };
        let line = Paragraph::new(status.message.as_str())
            .style(Style::default().fg(color))
            .alignment(Alignment::Center);
        f.render_widget(line, rows[0]);
    }

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let controls = Line::from(vec![
        Span::raw("Press "),
        Span::styled("+", bold),
        Span::raw(" to write, "),
        Span::styled("m", bold),
        Span::raw(" for menu, "),
        Span::styled("↑/↓", bold),
        Span::raw(" to scroll, "),
        Span::styled("q", bold),
        Span::raw(" to quit"),
    ]);
    let controls_paragraph = Paragraph::new(controls)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    f.render_widget(controls_paragraph, rows[1]);
}

fn entry_item(entry: &DiaryEntry, text_width: usize) -> ListItem<'static> {
    let mood_pad = MOOD_COLUMN.saturating_sub(entry.mood.width());
    let mut lines = vec![Line::from(vec![
        Span::raw(format!("{}{}", entry.mood, " ".repeat(mood_pad))),
        Span::styled(entry.time.clone(), Style::default().fg(Color::DarkGray)),
    ])];
    let indent = " ".repeat(MOOD_COLUMN);
    lines.extend(
        wrap_lines(entry.preview(), text_width)
            .into_iter()
            .map(|l| Line::from(format!("{indent}{l}"))),
    );
    lines.push(Line::default());
    ListItem::new(lines)
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for raw in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;
        for word in raw.split_whitespace() {
            let word_width = word.width();
            if line_width > 0 && line_width + 1 + word_width > width {
                out.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            if word_width <= width {
                line.push_str(word);
                line_width += word_width;
                continue;
            }
            for c in word.chars() {
                let char_width = c.width().unwrap_or(0);
                if line_width > 0 && line_width + char_width > width {
                    out.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(c);
                line_width += char_width;
            }
        }
        out.push(line);
    }
    out
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit.
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn draw_entry_dialog(f: &mut Frame, draft: &EntryDraft, status: Option<&Status>) {
    let area = popup_area(f.area(), 64, 18);
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" New Entry ")
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Min(3),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(inner);

    let hints = Style::default().fg(Color::Yellow);
    f.render_widget(Paragraph::new("Esc: Cancel").style(hints), chunks[0]);
    f.render_widget(
        Paragraph::new("Ctrl+S: Save")
            .style(hints.add_modifier(Modifier::BOLD))
            .alignment(Alignment::Right),
        chunks[0],
    );

    let picking = draft.focus() == Focus::Mood;
    let mut moods = Vec::with_capacity(MOODS.len() * 2);
    for (i, mood) in MOODS.iter().enumerate() {
        let style = if i == draft.mood_index() {
            let selected = Style::default().add_modifier(Modifier::REVERSED);
            if picking {
                selected.fg(Color::Cyan)
            } else {
                selected
            }
        } else {
            Style::default()
        };
        moods.push(Span::styled(format!(" {mood} "), style));
        moods.push(Span::raw(" "));
    }
    f.render_widget(
        Paragraph::new(Line::from(moods)).alignment(Alignment::Center),
        chunks[1],
    );

    let text_block = Block::default()
        .borders(Borders::ALL)
        .title("Text")
        .border_style(if picking {
            Style::default()
        } else {
            Style::default().fg(Color::Cyan)
        });
    let text_area = text_block.inner(chunks[2]);
    let (row, col) = draft.cursor_position();
    let scroll_y = row.saturating_sub(text_area.height.saturating_sub(1));
    let scroll_x = col.saturating_sub(text_area.width.saturating_sub(1));

    let text = if draft.text().is_empty() {
        Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(draft.text()).scroll((scroll_y, scroll_x))
    };
    f.render_widget(text.block(text_block), chunks[2]);
    if !picking {
        f.set_cursor_position((text_area.x + col - scroll_x, text_area.y + row - scroll_y));
    }

    let footer = match status {
        Some(status) if status.is_error => Paragraph::new(status.message.as_str())
            .style(Style::default().fg(Color::Red)),
        _ => Paragraph::new("Tab: switch between mood and text")
            .style(Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(footer.alignment(Alignment::Center), chunks[3]);
}

pub fn draw_menu(f: &mut Frame, selected_index: usize) {
    let screen = f.area();
    let width = 16;
    let area = Rect {
        x: screen.right().saturating_sub(width + 1),
        y: screen.y + 2,
        width,
        height: MENU_ITEMS.len() as u16 + 2,
    }
    .intersection(screen);
    f.render_widget(Clear, area);

    let items: Vec<ListItem> = MENU_ITEMS
        .iter()
        .map(|item| ListItem::new(item.label()))
        .collect();
    let menu = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Menu"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    f.render_stateful_widget(
        menu,
        area,
        &mut ListState::default().with_selected(Some(selected_index)),
    );
}

pub fn draw_about(f: &mut Frame) {
    let body = [
        format!("Version {APP_VERSION}"),
        String::new(),
        APP_COMMENTS.to_string(),
        String::new(),
        format!("Developed by {APP_DEVELOPER}"),
        APP_WEBSITE.to_string(),
        format!("License: {APP_LICENSE}"),
        APP_ID.to_string(),
    ];
    let width = body.iter().map(|l| l.width()).max().unwrap_or(0) + 4;
    let height = body.len() + 6;
    let area = popup_area(f.area(), width as u16, height as u16);
    f.render_widget(Clear, area);

    let mut lines = vec![
        Line::styled(
            APP_NAME,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Line::default(),
    ];
    lines.extend(body.into_iter().map(Line::from));
    lines.push(Line::default());
    lines.push(Line::styled(
        "Press any key to close",
        Style::default().fg(Color::Yellow),
    ));

    let about = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("About"));
    f.render_widget(about, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn state_with(n: usize) -> DiaryState {
        let tmp = tempfile::tempdir().unwrap();
        let mut state = DiaryState::new(tmp.path().join("diary.json"));
        let start = Local.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        for i in 0..n {
            let when = start + Duration::hours(i as i64);
            state
                .add_entry(DiaryEntry::at("😊", format!("note-{i:02}"), when))
                .unwrap();
        }
        state
    }

    fn render_main(state: &DiaryState, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, height)).unwrap();
        let mut list_state = ListState::default();
        terminal
            .draw(|f| draw_main(f, state, &mut list_state, None))
            .unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn empty_diary_shows_hint() {
        let text = render_main(&state_with(0), 30);
        assert!(text.contains("My Diary"));
        assert!(text.contains(APP_NAME));
        assert!(text.contains(EMPTY_HINT));
    }

    #[test]
    fn newest_entry_is_listed_first() {
        let text = render_main(&state_with(3), 30);
        let newest = text.find("note-02").unwrap();
        let oldest = text.find("note-00").unwrap();
        assert!(newest < oldest);
        assert!(text.contains("2024-06-01 11:00"));
        assert!(!text.contains(EMPTY_HINT));
    }

    #[test]
    fn only_the_last_twenty_are_rendered() {
        // Tall enough for every row.
        let text = render_main(&state_with(22), 120);
        assert!(text.contains("note-21"));
        assert!(text.contains("note-02"));
        assert!(!text.contains("note-01"));
        assert!(!text.contains("note-00"));
        assert!(text.contains("Entries (20 of 22)"));
    }

    #[test]
    fn long_text_is_cut_in_the_list() {
        let tmp = tempfile::tempdir().unwrap();
        let mut state = DiaryState::new(tmp.path().join("diary.json"));
        let text = format!("{}TAIL", "word ".repeat(16));
        state.add_entry(DiaryEntry::new("😐", text.clone())).unwrap();

        let rendered = render_main(&state, 30);
        assert!(!rendered.contains("TAIL"));
        assert_eq!(state.get_entries()[0].text, text);
    }

    #[test]
    fn dialog_shows_placeholder_and_status_error() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let draft = EntryDraft::default();
        let status = Status {
            message: "disk full".into(),
            is_error: true,
        };
        terminal
            .draw(|f| draw_entry_dialog(f, &draft, Some(&status)))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("New Entry"));
        assert!(text.contains(PLACEHOLDER));
        assert!(text.contains("disk full"));
        assert!(text.contains("Ctrl+S: Save"));
    }

    #[test]
    fn about_lists_app_metadata() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(draw_about).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains(APP_NAME));
        assert!(text.contains(&format!("Version {APP_VERSION}")));
        assert!(text.contains(APP_COMMENTS));
        assert!(text.contains(APP_WEBSITE));
        assert!(text.contains("License: GPL-3.0"));
    }

    #[test]
    fn menu_lists_items() {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| draw_menu(f, 1)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("About"));
        assert!(text.contains("> Quit"));
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(wrap_lines("the quick brown fox", 9), ["the quick", "brown fox"]);
        assert_eq!(wrap_lines("a\nb", 10), ["a", "b"]);
        assert_eq!(wrap_lines("", 10), [""]);
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap_lines("abcdefghij", 4), ["abcd", "efgh", "ij"]);
        assert_eq!(wrap_lines("hi abcdefgh", 4), ["hi", "abcd", "efgh"]);
    }

    #[test]
    fn wrap_measures_display_width() {
        assert_eq!(wrap_lines("😊😊😊", 4), ["😊😊", "😊"]);
    }

    #[test]
    fn scroll_stays_in_bounds() {
        assert_eq!(scroll_selection(None, Scroll::Down, 0), None);
        assert_eq!(scroll_selection(None, Scroll::Down, 3), Some(1));
        assert_eq!(scroll_selection(Some(2), Scroll::Down, 3), Some(2));
        assert_eq!(scroll_selection(Some(0), Scroll::Up, 3), Some(0));
        assert_eq!(scroll_selection(Some(1), Scroll::PageDown, 20), Some(6));
        assert_eq!(scroll_selection(Some(3), Scroll::PageUp, 20), Some(0));
        assert_eq!(scroll_selection(Some(3), Scroll::Bottom, 20), Some(19));
        assert_eq!(scroll_selection(Some(9), Scroll::Top, 20), Some(0));
        assert_eq!(scroll_selection(Some(30), Scroll::Up, 20), Some(18));
    }

    #[test]
    fn main_keys_map_to_actions() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert!(matches!(main_action(key(KeyCode::Char('+'))), Some(Action::Write)));
        assert!(matches!(main_action(key(KeyCode::Char('a'))), Some(Action::Write)));
        assert!(matches!(main_action(key(KeyCode::Char('m'))), Some(Action::Menu)));
        assert!(matches!(main_action(key(KeyCode::Char('?'))), Some(Action::About)));
        assert!(matches!(main_action(key(KeyCode::Char('q'))), Some(Action::Quit)));
        assert!(matches!(
            main_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        ));
        assert!(matches!(
            main_action(key(KeyCode::End)),
            Some(Action::Scroll(Scroll::Bottom))
        ));
        assert!(main_action(key(KeyCode::Char('x'))).is_none());
    }
}
