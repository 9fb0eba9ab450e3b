use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use livemark_engine::{GutterMark, ParsedDoc, RenderBlock, group_for_rendering, parse_document};

use crate::{
    editor::{EditAction, EditorBuffer},
    schedule::RenderScheduler,
};

/// Event-loop poll timeout while no preview render is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub render_delay: Duration,
    pub show_gutter: bool,
}

/// Live editor state.
///
/// Every edit re-parses the whole buffer straight away, so the error list
/// and gutter are always current. The preview is regrouped only when the
/// scheduler fires.
pub struct App {
    pub path: Option<PathBuf>,
    pub editor: EditorBuffer,
    pub parsed: ParsedDoc,
    pub preview: Vec<RenderBlock>,
    pub settings: Settings,
    pub status: String,
    pub dirty: bool,
    scheduler: RenderScheduler,
}

impl App {
    pub fn new(content: String, path: Option<PathBuf>, settings: Settings) -> Self {
        let parsed = parse_document(&content);
        let preview = group_for_rendering(&parsed.elements);
        let status = match &path {
            Some(p) => p.display().to_string(),
            None => "[scratch]".to_string(),
        };

        Self {
            path,
            editor: EditorBuffer::new(content),
            parsed,
            preview,
            settings,
            status,
            dirty: false,
            scheduler: RenderScheduler::new(settings.render_delay),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> AppAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('q') if ctrl => return AppAction::Quit,
            KeyCode::Char('s') if ctrl => {
                if let Err(e) = self.save() {
                    log::error!("save failed: {e:#}");
                    self.status = format!("Error: {e:#}");
                }
            }
            KeyCode::Char('r') if ctrl => self.render_now(),
            code => {
                if self.editor.handle_key(code, key.modifiers) == EditAction::ContentChanged {
                    self.content_changed(now);
                }
            }
        }
        AppAction::Continue
    }

    /// Fires the pending preview render once it is due.
    pub fn tick(&mut self, now: Instant) {
        if self.scheduler.poll(now) {
            self.render_preview();
        }
    }

    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.scheduler
            .time_until_due(now)
            .map_or(IDLE_POLL, |due| due.min(IDLE_POLL))
    }

    pub fn gutter(&self) -> Vec<GutterMark> {
        livemark_engine::gutter_marks(&self.parsed)
    }

    pub fn render_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    fn content_changed(&mut self, now: Instant) {
        self.parsed = parse_document(self.editor.content());
        self.dirty = true;
        self.scheduler.request(now);
    }

    fn render_now(&mut self) {
        self.scheduler.cancel();
        self.render_preview();
    }

    fn render_preview(&mut self) {
        self.preview = group_for_rendering(&self.parsed.elements);
    }

    fn save(&mut self) -> Result<()> {
        let Some(path) = &self.path else {
            self.status = "No file to save to; start livemark with a path".to_string();
            return Ok(());
        };
        std::fs::write(path, self.editor.content())
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("saved {}", path.display());
        self.status = format!("Saved {}", path.display());
        self.dirty = false;
        Ok(())
    }
}
