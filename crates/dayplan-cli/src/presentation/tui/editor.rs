//! In-place editor for one day's tasks and notes

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dayplan_types::{DateKey, DayRecord, TASK_SLOTS};

/// Task slots followed by the notes field
const FIELD_COUNT: usize = TASK_SLOTS + 1;

const LABELS: [&str; FIELD_COUNT] = ["Task 1", "Task 2", "Task 3", "Notes"];

/// What the browser should do after the editor saw a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    Continue,
    Save(DayRecord),
    Cancel,
}

#[derive(Debug, Clone)]
pub struct DayEditor {
    date: DateKey,
    fields: [String; FIELD_COUNT],
    focused: usize,
}

impl DayEditor {
    pub fn new(date: DateKey, record: &DayRecord) -> Self {
        let [first, second, third] = record.tasks.clone();
        Self {
            date,
            fields: [first, second, third, record.notes.clone()],
            focused: 0,
        }
    }

    pub fn date(&self) -> DateKey {
        self.date
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Record built from the current field contents, untrimmed
    pub fn record(&self) -> DayRecord {
        let (tasks, notes) = self.fields.split_at(TASK_SLOTS);
        DayRecord::new(tasks.iter().cloned(), notes[0].clone())
    }

    fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % FIELD_COUNT;
    }

    fn focus_prev(&mut self) {
        self.focused = self.focused.checked_sub(1).unwrap_or(FIELD_COUNT - 1);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EditorAction {
        match key.code {
            KeyCode::Enter => return EditorAction::Save(self.record()),
            KeyCode::Esc => return EditorAction::Cancel,
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::Backspace => {
                self.fields[self.focused].pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.fields[self.focused].push(c);
            }
            _ => {}
        }
        EditorAction::Continue
    }

    /// Lines for the detail pane; the focused field carries a cursor
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.date.long_label(), String::new()];
        for (index, (label, value)) in LABELS.iter().zip(&self.fields).enumerate() {
            let marker = if index == self.focused { ">" } else { " " };
            let cursor = if index == self.focused { "_" } else { "" };
            lines.push(format!("{} {}: {}{}", marker, label, value, cursor));
        }
        lines.push(String::new());
        lines.push("Enter save, Esc cancel, Tab next field".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(editor: &mut DayEditor, code: KeyCode) -> EditorAction {
        editor.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(editor: &mut DayEditor, text: &str) {
        for c in text.chars() {
            press(editor, KeyCode::Char(c));
        }
    }

    fn date() -> DateKey {
        "2025-08-10".parse().unwrap()
    }

    #[test]
    fn test_fields_start_from_record() {
        let record = DayRecord::new(["Gym", "", "Read"], "early night");
        let editor = DayEditor::new(date(), &record);
        assert_eq!(editor.record(), record);
        assert_eq!(editor.focused(), 0);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut editor = DayEditor::new(date(), &DayRecord::default());
        type_text(&mut editor, "Gym");
        press(&mut editor, KeyCode::Tab);
        press(&mut editor, KeyCode::Tab);
        press(&mut editor, KeyCode::Tab);
        type_text(&mut editor, "call mum");
        press(&mut editor, KeyCode::Backspace);

        let record = editor.record();
        assert_eq!(record.tasks[0], "Gym");
        assert_eq!(record.tasks[1], "");
        assert_eq!(record.notes, "call mu");
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut editor = DayEditor::new(date(), &DayRecord::default());
        press(&mut editor, KeyCode::Up);
        assert_eq!(editor.focused(), FIELD_COUNT - 1);
        press(&mut editor, KeyCode::Down);
        assert_eq!(editor.focused(), 0);
    }

    #[test]
    fn test_enter_saves_and_esc_cancels() {
        let mut editor = DayEditor::new(date(), &DayRecord::default());
        type_text(&mut editor, "q");
        assert_eq!(
            press(&mut editor, KeyCode::Enter),
            EditorAction::Save(DayRecord::new(["q"], ""))
        );
        assert_eq!(press(&mut editor, KeyCode::Esc), EditorAction::Cancel);
    }

    #[test]
    fn test_lines_mark_focused_field() {
        let mut editor = DayEditor::new(date(), &DayRecord::new(["Gym"], ""));
        press(&mut editor, KeyCode::Tab);
        let lines = editor.lines();
        assert_eq!(lines[2], "  Task 1: Gym");
        assert_eq!(lines[3], "> Task 2: _");
    }
}
