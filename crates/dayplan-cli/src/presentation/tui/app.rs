//! Browse application state and event loop
//!
//! Every scroll gesture moves the strip first and then hands the strip's
//! metrics to the controller, which may grow the window at either edge.
//! While a day is being edited, keys go to the editor instead.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use dayplan_engine::{GrowthConfig, RangeController, RowStrip};
use dayplan_store::DayStore;
use dayplan_types::{Bounds, DateKey, DayRecord};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::{debug, warn};

use super::{DayEditor, DayListView, EditorAction, StatusBarView, TileSource};
use crate::presentation::tile::{DayTile, TILE_HEIGHT};

/// Lines taken by the status bar
const STATUS_HEIGHT: u16 = 3;

/// Lines moved per mouse wheel notch
const WHEEL_STEP: i64 = 3;

pub struct BrowseApp<S: DayStore> {
    bounds: Bounds,
    config: GrowthConfig,
    today: DateKey,

    controller: RangeController,
    strip: RowStrip<DayTile>,
    source: TileSource<S>,
    editor: Option<DayEditor>,

    should_quit: bool,
    error_message: Option<String>,
}

impl<S: DayStore> BrowseApp<S> {
    pub fn new(bounds: Bounds, config: GrowthConfig, today: DateKey, store: S) -> Self {
        Self {
            bounds,
            config,
            today,
            controller: RangeController::new(bounds, config, today),
            strip: RowStrip::new(TILE_HEIGHT),
            source: TileSource::new(store),
            editor: None,
            should_quit: false,
            error_message: None,
        }
    }

    pub fn controller(&self) -> &RangeController {
        &self.controller
    }

    pub fn strip(&self) -> &RowStrip<DayTile> {
        &self.strip
    }

    pub fn editor(&self) -> Option<&DayEditor> {
        self.editor.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Seed the window for a list area `viewport_height` lines tall and
    /// bring today into the middle of it.
    pub fn start(&mut self, viewport_height: u32) -> Result<()> {
        self.strip.set_viewport_height(viewport_height);
        self.controller.seed(&mut self.source, &mut self.strip)?;
        self.jump_to_today();
        Ok(())
    }

    /// Day under the top edge of the list
    pub fn selected(&self) -> Option<&DayTile> {
        let index = self.strip.top_index()?;
        self.strip.get(index).map(|(_, tile)| tile)
    }

    pub fn resize(&mut self, viewport_height: u32) {
        if viewport_height != self.strip.viewport_height() {
            self.strip.set_viewport_height(viewport_height);
            self.sync();
        }
    }

    pub fn scroll_by(&mut self, delta: i64) {
        self.strip.scroll_by(delta);
        self.sync();
    }

    pub fn jump_to_today(&mut self) {
        let anchor = self.controller.anchor();
        if self.controller.locate(anchor).is_none() {
            // Evicted under a retention cap: start over around today
            debug!(%anchor, "anchor outside window, reseeding");
            self.reseed();
        }
        if let Some(index) = self.controller.locate(anchor) {
            self.strip.center_on(index);
        }
        self.sync();
    }

    fn reseed(&mut self) {
        let viewport_height = self.strip.viewport_height();
        self.controller = RangeController::new(self.bounds, self.config, self.today);
        self.strip = RowStrip::new(TILE_HEIGHT);
        self.strip.set_viewport_height(viewport_height);
        if let Err(err) = self.controller.seed(&mut self.source, &mut self.strip) {
            self.report(err);
        }
    }

    /// Report the strip's current metrics to the controller
    fn sync(&mut self) {
        let metrics = self.strip.metrics();
        match self
            .controller
            .on_scroll(metrics, &mut self.source, &mut self.strip)
        {
            Ok(outcome) if outcome.grew() => {
                self.error_message = None;
                debug!(
                    rows = self.strip.len(),
                    scroll_top = self.strip.scroll_top(),
                    "window grew"
                );
            }
            Ok(_) => {}
            Err(err) => self.report(err),
        }
    }

    fn report(&mut self, err: dayplan_store::Error) {
        warn!(error = %err, "failed to load days");
        self.error_message = Some(format!("Failed to load days: {}", err));
    }

    /// Open the editor on the selected day
    pub fn begin_edit(&mut self) {
        if let Some(tile) = self.selected() {
            debug!(date = %tile.date, "editing day");
            self.editor = Some(DayEditor::new(tile.date, &tile.record));
        }
    }

    /// Persist `record` and redraw the day's tile from what was stored
    fn save(&mut self, date: DateKey, record: DayRecord) {
        match self.source.save(date, record) {
            Ok(tile) => {
                if let Some(row) = self.strip.row_mut(date) {
                    *row = tile;
                }
                self.error_message = None;
                debug!(%date, "saved day");
            }
            Err(err) => {
                warn!(%date, error = %err, "failed to save day");
                self.error_message = Some(format!("Failed to save {}: {}", date, err));
            }
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        match editor.handle_key(key) {
            EditorAction::Continue => {}
            EditorAction::Cancel => self.editor = None,
            EditorAction::Save(record) => {
                let date = editor.date();
                self.editor = None;
                self.save(date, record);
            }
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.editor.is_some() {
            self.handle_editor_key(key);
            return;
        }

        let page = i64::from(self.strip.viewport_height().max(1));
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-page),
            KeyCode::PageDown => self.scroll_by(page),
            KeyCode::Char('t') => self.jump_to_today(),
            KeyCode::Char('e') | KeyCode::Enter => self.begin_edit(),
            _ => {}
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_STEP),
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP),
            _ => {}
        }
    }

    /// Take over the terminal until the user quits
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let size = terminal.size()?;
        self.start(list_viewport(size.height))?;

        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) => self.handle_key_event(key),
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    Event::Resize(_, height) => self.resize(list_viewport(height)),
                    _ => {}
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn render(&self, f: &mut Frame) {
        let main_chunks = Layout::vertical([
            Constraint::Min(TILE_HEIGHT as u16 + 2), // Days + detail
            Constraint::Length(STATUS_HEIGHT),       // Status bar
        ])
        .split(f.area());

        let content_chunks =
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
                .split(main_chunks[0]);

        let day_list = DayListView::new(
            &self.strip,
            self.strip.top_index(),
            self.controller.anchor(),
        );
        f.render_widget(day_list, content_chunks[0]);

        let (title, detail) = match &self.editor {
            Some(editor) => ("Edit", editor.lines()),
            None => (
                "Day",
                self.selected()
                    .map(|tile| tile.detail_lines())
                    .unwrap_or_default(),
            ),
        };
        let detail_pane = Paragraph::new(detail.into_iter().map(Line::from).collect::<Vec<_>>())
            .wrap(Wrap { trim: false })
            .block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(detail_pane, content_chunks[1]);

        let status_bar = StatusBarView::new(
            self.bounds.min(),
            self.controller.last_rendered(),
            self.strip.len(),
            self.error_message(),
        );
        f.render_widget(status_bar, main_chunks[1]);
    }
}

/// Inner height of the day list for a terminal `height` lines tall
fn list_viewport(height: u16) -> u32 {
    u32::from(height.saturating_sub(STATUS_HEIGHT + 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use dayplan_engine::Retention;
    use dayplan_store::MemoryStore;
    use dayplan_types::DayRecord;

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    fn config() -> GrowthConfig {
        GrowthConfig {
            append_threshold: 40,
            prepend_threshold: 20,
            ..GrowthConfig::default()
        }
    }

    fn app_with(store: MemoryStore, config: GrowthConfig) -> BrowseApp<MemoryStore> {
        let bounds = Bounds::starting_at(key("2025-08-01"));
        let mut app = BrowseApp::new(bounds, config, key("2025-08-10"), store);
        app.start(30).unwrap();
        app
    }

    fn press(app: &mut BrowseApp<MemoryStore>, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_start_centers_today() {
        let app = app_with(MemoryStore::new(), config());

        let window = app.controller().rendered().unwrap();
        assert_eq!(window.start(), key("2025-08-01"));
        // Centering near the lower bound scrolls into the prepend zone,
        // but nothing exists before the lower bound
        assert_eq!(app.strip().len(), window.len());

        let index = app.controller().locate(key("2025-08-10")).unwrap();
        let row_top = app.strip().offset_of(index);
        let scroll_top = app.strip().scroll_top();
        assert!(row_top >= scroll_top);
        assert!(row_top + TILE_HEIGHT <= scroll_top + 30);
    }

    #[test]
    fn test_scrolling_down_appends_days() {
        let mut app = app_with(MemoryStore::new(), config());
        let before = app.controller().last_rendered().unwrap();

        for _ in 0..400 {
            press(&mut app, KeyCode::PageDown);
        }

        let after = app.controller().last_rendered().unwrap();
        assert!(after > before);
        assert_eq!(app.strip().len(), app.controller().rendered().unwrap().len());
        assert!(app.error_message().is_none());
    }

    #[test]
    fn test_selected_day_follows_top_row() {
        let mut store = MemoryStore::new();
        store
            .set(key("2025-08-01"), DayRecord::new(["Plan week"], "kickoff"))
            .unwrap();
        let mut app = app_with(store, config());

        for _ in 0..50 {
            press(&mut app, KeyCode::Char('k'));
        }

        let selected = app.selected().unwrap();
        assert_eq!(selected.date, key("2025-08-01"));
        assert_eq!(selected.record.tasks[0], "Plan week");
    }

    #[test]
    fn test_mouse_wheel_scrolls() {
        let mut app = app_with(MemoryStore::new(), config());
        let before = app.strip().scroll_top();
        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.strip().scroll_top(), before + WHEEL_STEP as u32);
    }

    #[test]
    fn test_today_after_eviction_reseeds() {
        let capped = GrowthConfig {
            retention: Retention::Cap { max_rows: 150 },
            ..config()
        };
        let mut app = app_with(MemoryStore::new(), capped);

        for _ in 0..600 {
            press(&mut app, KeyCode::PageDown);
        }
        assert!(app.controller().locate(key("2025-08-10")).is_none());

        press(&mut app, KeyCode::Char('t'));
        assert!(app.controller().locate(key("2025-08-10")).is_some());
        assert!(app.strip().len() <= 150);
    }

    fn type_text(app: &mut BrowseApp<MemoryStore>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_edit_saves_selected_day() {
        let mut store = MemoryStore::new();
        store
            .set(key("2025-08-01"), DayRecord::new(["Plan week"], ""))
            .unwrap();
        let mut app = app_with(store, config());
        for _ in 0..50 {
            press(&mut app, KeyCode::Char('k'));
        }

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.editor().unwrap().date(), key("2025-08-01"));

        // Typed keys land in the editor, not in the list bindings
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "  quit job  ");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "tea at 5 ");
        press(&mut app, KeyCode::Enter);

        assert!(app.editor().is_none());
        assert!(!app.should_quit());

        let stored = app.source.store().get(key("2025-08-01")).unwrap();
        assert_eq!(stored, DayRecord::new(["Plan week", "quit job", ""], "tea at 5 "));

        let tile = app.selected().unwrap();
        assert_eq!(tile.date, key("2025-08-01"));
        assert_eq!(tile.record, stored);
        assert!(tile.tasks.contains("quit job"));
        assert!(tile.notes.contains("tea at 5"));
    }

    #[test]
    fn test_edit_cancel_keeps_record() {
        let mut app = app_with(MemoryStore::new(), config());
        let date = app.selected().unwrap().date;

        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "discard me");
        press(&mut app, KeyCode::Esc);

        assert!(app.editor().is_none());
        assert!(!app.should_quit());
        assert!(app.selected().unwrap().record.is_blank());
        assert!(app.source.store().all().unwrap().is_empty());
        assert_eq!(app.selected().unwrap().date, date);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app_with(MemoryStore::new(), config());
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }
}
