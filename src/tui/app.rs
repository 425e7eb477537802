//! TUI Application
//!
//! Owns the presentation state, the catalog, the session controller and the
//! clipboard, and maps key presses onto catalog navigation and the session
//! lifecycle.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};

use crate::catalog::{InputWidget, Tool, ToolCatalog};
use crate::clipboard::Clipboard;
use crate::error::DocHubError;
use crate::filter::Tag;
use crate::session::{CompletionEvent, Phase, SessionController, UploadedFile};

use super::input::KeyExt;
use super::state::{AppState, next_sidebar_category};

/// Main TUI application
pub struct App {
    /// Presentation state
    pub state: AppState,
    catalog: &'static ToolCatalog,
    controller: SessionController,
    clipboard: Box<dyn Clipboard>,
}

impl App {
    /// Application over the built-in catalog
    pub fn new(controller: SessionController, clipboard: Box<dyn Clipboard>) -> Self {
        Self::with_catalog(ToolCatalog::builtin(), controller, clipboard)
    }

    pub fn with_catalog(
        catalog: &'static ToolCatalog,
        controller: SessionController,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        Self {
            state: AppState::new(),
            catalog,
            controller,
            clipboard,
        }
    }

    pub fn catalog(&self) -> &'static ToolCatalog {
        self.catalog
    }

    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SessionController {
        &mut self.controller
    }

    /// Tools visible under the current selection, in catalog order
    pub fn visible_tools(&self) -> Vec<&'static Tool> {
        self.state.selection.apply(self.catalog.list_all())
    }

    pub fn selected_tool(&self) -> Option<&'static Tool> {
        self.visible_tools().get(self.state.cursor).copied()
    }

    /// Advance the spinner
    pub fn tick(&mut self) {
        self.state.spinner = self.state.spinner.wrapping_add(1);
    }

    /// Dispatch a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.controller.phase() {
            None => self.handle_catalog_key(key),
            Some(Phase::Input) => self.handle_input_key(key),
            Some(Phase::Processing) => {
                if key.code == KeyCode::Esc {
                    self.close();
                }
            }
            Some(Phase::Result) => self.handle_result_key(key),
        }
        if let Some(notice) = self.controller.take_notice() {
            self.state.status = Some(notice);
        }
    }

    /// Apply a completion from the processing task
    pub fn handle_completion(&mut self, event: CompletionEvent) {
        if self.controller.apply(event) {
            self.state.status = self.controller.take_notice();
        }
    }

    fn handle_catalog_key(&mut self, key: KeyEvent) {
        if key.is_quit() {
            self.state.should_quit = true;
            return;
        }
        match key.code {
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            KeyCode::Tab => self.select_tag(Tag::cycle(self.state.selection.tag())),
            KeyCode::BackTab => self.select_tag(Tag::cycle_back(self.state.selection.tag())),
            KeyCode::Enter => self.open_selected(),
            _ => match key.plain_char() {
                Some('k') => self.move_cursor(-1),
                Some('j') => self.move_cursor(1),
                Some('c') => {
                    let next = next_sidebar_category(self.state.selection.category());
                    self.state.selection.select_category(next);
                    self.state.cursor = 0;
                }
                Some('a') | Some('r') => {
                    self.state.selection.clear();
                    self.state.cursor = 0;
                }
                _ => {}
            },
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_tools().len();
        self.state.cursor = self.state.cursor.saturating_add_signed(delta);
        self.state.clamp_cursor(len);
    }

    fn select_tag(&mut self, tag: Option<Tag>) {
        self.state.selection.select_tag(tag);
        self.state.cursor = 0;
    }

    fn open_selected(&mut self) {
        if let Some(tool) = self.selected_tool() {
            self.state.input.clear();
            self.state.status = None;
            self.controller.open(tool.clone());
        }
    }

    fn close(&mut self) {
        self.controller.close();
        self.state.input.clear();
        self.state.status = None;
    }

    fn input_widget(&self) -> Option<InputWidget> {
        self.controller.session().map(|s| s.input_widget())
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let Some(widget) = self.input_widget() else {
            return;
        };
        if key.code == KeyCode::Esc {
            self.close();
            return;
        }
        if key.is_ctrl('d') {
            self.process();
            return;
        }

        if key.code == KeyCode::Enter {
            match widget {
                InputWidget::FileDrop if !self.state.input.is_empty() => self.attach_file(),
                InputWidget::FileDrop | InputWidget::SingleLine => self.process(),
                InputWidget::MultiLine => {
                    self.state.input.insert_newline();
                    self.sync_text();
                }
            }
            return;
        }

        if self.state.input.handle_key(&key) && widget != InputWidget::FileDrop {
            self.sync_text();
        }
    }

    fn sync_text(&mut self) {
        if let Err(e) = self.controller.set_text(self.state.input.content()) {
            self.state.status = Some(e.to_string());
        }
    }

    fn attach_file(&mut self) {
        let typed = self.state.input.content().trim().to_string();
        let path = expand_home(&typed);
        match UploadedFile::from_path(&path).and_then(|file| {
            let name = file.name.clone();
            self.controller.supply_file(file).map(|_| name)
        }) {
            Ok(name) => {
                self.state.input.clear();
                self.state.status = Some(format!("Attached {}", name));
            }
            Err(e) => {
                log::warn!("Cannot attach {}: {}", typed, e);
                self.state.status = Some(format!("Cannot attach {}: {}", typed, e));
            }
        }
    }

    fn process(&mut self) {
        match self.controller.act() {
            Ok(()) => self.state.status = None,
            Err(e @ DocHubError::InvalidAction(_)) => self.state.status = Some(e.to_string()),
            Err(e) => {
                log::error!("Process action failed: {}", e);
                self.state.status = Some(e.to_string());
            }
        }
    }

    fn handle_result_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.close(),
            _ => match key.plain_char() {
                Some('r') => {
                    if let Err(e) = self.controller.reset() {
                        self.state.status = Some(e.to_string());
                    } else {
                        self.state.input.clear();
                        self.state.status = None;
                    }
                }
                Some('y') => self.copy_result(),
                _ => {}
            },
        }
    }

    fn copy_result(&mut self) {
        let Some(text) = self
            .controller
            .session()
            .and_then(|s| s.result())
            .and_then(|r| r.text())
            .map(str::to_string)
        else {
            return;
        };
        self.state.status = Some(match self.clipboard.write_text(&text) {
            Ok(()) => "Copied to clipboard".to_string(),
            Err(e) => e.to_string(),
        });
    }
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
