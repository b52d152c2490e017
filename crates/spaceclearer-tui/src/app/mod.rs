//! Main application state and logic.

mod constants;
pub mod input;
mod render;
mod scanning;
pub mod state;

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;

use spaceclearer_session::{RemoveMode, ScanProgress, Session, SessionState, SharedSession};

use crate::TuiConfig;
use crate::event::KeyAction;
use crate::theme::Theme;

use self::constants::TICK_INTERVAL_MS;
use self::input::{InputResult, InputState};
use self::render::{RenderContext, render_app};
use self::scanning::{lock, start_scan};
use self::state::{AppMode, ListingSnapshot, ScanResult};

/// Application result type.
pub type AppResult<T> = color_eyre::Result<T>;

/// Main application state.
pub struct App {
    /// Session holding the listing; locked by background scans.
    session: SharedSession,
    mode: AppMode,
    theme: Theme,
    /// What the listing currently shows.
    listing: Option<ListingSnapshot>,
    /// Selected row within the visible page.
    selected: usize,
    /// Last operation result (success flag, message).
    status: Option<(bool, String)>,
    scan_progress: Option<ScanProgress>,
    scan_rx: Option<mpsc::Receiver<ScanResult>>,
    /// Directory to scan when the event loop starts.
    initial_path: Option<PathBuf>,
    needs_redraw: bool,
}

impl App {
    /// Create a new application with default config.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self::with_config(path, TuiConfig::default())
    }

    /// Create a new application with custom config.
    ///
    /// Without a path the directory prompt opens first.
    pub fn with_config(path: Option<PathBuf>, config: TuiConfig) -> Self {
        let session = Session::new()
            .with_scan_options(config.scan)
            .with_page_size(config.page_size)
            .shared();

        let mode = if path.is_some() {
            AppMode::Normal
        } else {
            AppMode::ChangeDirectory(InputState::with_initial(&default_prompt_path()))
        };

        Self {
            session,
            mode,
            theme: Theme::dark(),
            listing: None,
            selected: 0,
            status: None,
            scan_progress: None,
            scan_rx: None,
            initial_path: path,
            needs_redraw: true,
        }
    }

    /// Run the event loop until the user quits.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> AppResult<()> {
        if let Some(path) = self.initial_path.take() {
            self.start_scan(path);
        }

        let period = Duration::from_millis(TICK_INTERVAL_MS);
        let mut interval = tokio::time::interval(period);
        let mut events = EventStream::new();

        while !matches!(self.mode, AppMode::Quit) {
            if self.needs_redraw {
                terminal.draw(|frame| self.render(frame))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased;

                Some(Ok(event)) = events.next() => {
                    if let Event::Key(key_event) = event {
                        if key_event.kind == KeyEventKind::Press {
                            self.handle_key(key_event);
                        }
                    }
                    self.needs_redraw = true;
                }

                Some(result) = async {
                    if let Some(rx) = &mut self.scan_rx {
                        rx.recv().await
                    } else {
                        std::future::pending().await
                    }
                } => {
                    self.handle_scan_result(result);
                    self.needs_redraw = true;
                }

                _ = interval.tick() => {}
            }
        }

        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        let ctx = RenderContext {
            theme: &self.theme,
            mode: &self.mode,
            listing: self.listing.as_ref(),
            selected: self.selected,
            status: self.status.as_ref(),
            scan_progress: self.scan_progress.as_ref(),
        };
        render_app(&ctx, frame.area(), frame.buffer_mut());
    }

    /// Route a key press according to the current mode.
    fn handle_key(&mut self, key: KeyEvent) {
        match &mut self.mode {
            AppMode::ChangeDirectory(input) => match input.handle_key(key) {
                InputResult::Continue => {}
                InputResult::Submit(value) if value.is_empty() => {
                    input.set_error("Enter a directory path");
                }
                InputResult::Submit(value) => self.start_scan(PathBuf::from(value)),
                InputResult::Cancel => self.cancel_prompt(),
            },
            AppMode::Confirm { .. } => {
                let action = KeyAction::from_confirm_key(key);
                self.handle_confirm(action);
            }
            AppMode::Scanning { .. } => {
                if KeyAction::from_key_event(key) == KeyAction::ForceQuit {
                    self.mode = AppMode::Quit;
                }
            }
            AppMode::Normal => {
                let action = KeyAction::from_key_event(key);
                self.handle_action(action);
            }
            AppMode::Quit => {}
        }
    }

    /// Handle an action while browsing.
    fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit | KeyAction::ForceQuit => self.mode = AppMode::Quit,
            KeyAction::MoveDown => {
                let len = self.page_len();
                if len > 0 {
                    self.selected = (self.selected + 1).min(len - 1);
                }
            }
            KeyAction::MoveUp => self.selected = self.selected.saturating_sub(1),
            KeyAction::NextPage => {
                lock(&self.session).next_page();
                self.selected = 0;
                self.refresh_listing();
            }
            KeyAction::PreviousPage => {
                lock(&self.session).previous_page();
                self.selected = 0;
                self.refresh_listing();
            }
            KeyAction::Recycle => self.confirm_removal(RemoveMode::Recycle),
            KeyAction::PermanentDelete => self.confirm_removal(RemoveMode::PermanentDelete),
            KeyAction::Open => self.open_selected(),
            KeyAction::ChangeDirectory => {
                let initial = self
                    .listing
                    .as_ref()
                    .map(|l| l.root.display().to_string())
                    .unwrap_or_else(default_prompt_path);
                self.mode = AppMode::ChangeDirectory(InputState::with_initial(&initial));
            }
            KeyAction::Rescan => {
                if let Some(root) = self.listing.as_ref().map(|l| l.root.clone()) {
                    self.start_scan(root);
                }
            }
            KeyAction::Cancel => self.status = None,
            KeyAction::Confirm | KeyAction::None => {}
        }
    }

    fn handle_confirm(&mut self, action: KeyAction) {
        match action {
            KeyAction::Confirm => {
                if let AppMode::Confirm { entry, mode } = std::mem::take(&mut self.mode) {
                    let result = lock(&self.session).remove_entry(&entry.path, mode);
                    self.status = Some(match result {
                        Ok(removed) => (
                            true,
                            format!("{} {}", past_tense(mode), removed.name()),
                        ),
                        Err(e) => (false, e.to_string()),
                    });
                    self.refresh_listing();
                }
            }
            KeyAction::Cancel => self.mode = AppMode::Normal,
            KeyAction::ForceQuit => self.mode = AppMode::Quit,
            _ => {}
        }
    }

    /// Leave the directory prompt. Quits when nothing was ever listed.
    fn cancel_prompt(&mut self) {
        self.mode = if lock(&self.session).state() == SessionState::NoDirectory {
            AppMode::Quit
        } else {
            AppMode::Normal
        };
    }

    fn confirm_removal(&mut self, mode: RemoveMode) {
        if let Some(entry) = self.selected_entry().cloned() {
            self.mode = AppMode::Confirm { entry, mode };
        }
    }

    fn open_selected(&mut self) {
        let Some(path) = self.selected_entry().map(|e| e.path.clone()) else {
            return;
        };
        self.status = Some(match lock(&self.session).open_entry(&path) {
            Ok(()) => (true, format!("Opened {}", path.display())),
            Err(e) => (false, e.to_string()),
        });
    }

    fn start_scan(&mut self, path: PathBuf) {
        tracing::debug!(path = %path.display(), "starting scan");
        self.scan_progress = None;
        self.scan_rx = Some(start_scan(self.session.clone(), path.clone()));
        self.mode = AppMode::Scanning { path };
    }

    fn handle_scan_result(&mut self, result: ScanResult) {
        match result {
            ScanResult::Progress(progress) => self.scan_progress = Some(progress),
            ScanResult::Complete { path, result } => {
                self.scan_rx = None;
                self.scan_progress = None;
                match result {
                    Ok(count) => {
                        self.selected = 0;
                        self.refresh_listing();
                        self.status = Some((true, format!("Listed {count} files")));
                        self.mode = AppMode::Normal;
                    }
                    Err(e) => {
                        let message = e.to_string();
                        if self.listing.is_none() {
                            // Nothing to fall back to; ask again.
                            let mut input = InputState::with_initial(&path.display().to_string());
                            input.set_error(message);
                            self.mode = AppMode::ChangeDirectory(input);
                        } else {
                            self.status = Some((false, message));
                            self.mode = AppMode::Normal;
                        }
                    }
                }
            }
        }
    }

    /// Re-read the session after it changed.
    fn refresh_listing(&mut self) {
        self.listing = ListingSnapshot::capture(&lock(&self.session));
        let len = self.page_len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    fn page_len(&self) -> usize {
        self.listing.as_ref().map_or(0, |l| l.page.len())
    }

    fn selected_entry(&self) -> Option<&spaceclearer_core::FileEntry> {
        self.listing.as_ref()?.page.get(self.selected)
    }
}

fn past_tense(mode: RemoveMode) -> &'static str {
    match mode {
        RemoveMode::Recycle => "Recycled",
        RemoveMode::PermanentDelete => "Deleted",
    }
}

/// Starting text for the directory prompt.
fn default_prompt_path() -> String {
    std::env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}
