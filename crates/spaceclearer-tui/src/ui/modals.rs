//! Modal dialog widgets.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};

use spaceclearer_core::FileEntry;
use spaceclearer_session::{RemoveMode, ScanProgress};

use crate::app::input::InputState;
use crate::theme::Theme;
use crate::ui::{format_size, truncate_start};

/// Center a popup of the given size inside `area`.
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = (area.width.saturating_sub(width)) / 2 + area.x;
    let y = (area.height.saturating_sub(height)) / 2 + area.y;
    Rect::new(x, y, width, height)
}

/// Confirmation dialog before recycling or deleting a file.
pub struct ConfirmRemoveModal<'a> {
    theme: &'a Theme,
    entry: &'a FileEntry,
    mode: RemoveMode,
}

impl<'a> ConfirmRemoveModal<'a> {
    pub fn new(theme: &'a Theme, entry: &'a FileEntry, mode: RemoveMode) -> Self {
        Self { theme, entry, mode }
    }
}

impl Widget for ConfirmRemoveModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = popup_area(area, 64, 9);
        Clear.render(popup, buf);

        let (title, accent, question) = match self.mode {
            RemoveMode::Recycle => (
                " Confirm Recycle ",
                self.theme.warning,
                "Are you sure you would like to recycle this file?",
            ),
            RemoveMode::PermanentDelete => (
                " Confirm Permanent Delete ",
                self.theme.error,
                "Permanently delete this file? This cannot be undone.",
            ),
        };

        let block = Block::default()
            .title(title)
            .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let max_path = (inner.width as usize).saturating_sub(4);
        let path = self.entry.path.display().to_string();

        let lines = vec![
            Line::styled(
                question,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::raw(format!("  {}", truncate_start(&path, max_path))),
            Line::styled(
                format!("  {}", format_size(self.entry.size)),
                self.theme.help_desc,
            ),
            Line::raw(""),
            Line::from(vec![
                Span::styled(" y/Enter ", self.theme.help_key),
                Span::raw("Confirm  "),
                Span::styled(" n/Esc ", self.theme.help_key),
                Span::raw("Cancel"),
            ]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Prompt for the directory to list.
pub struct DirectoryPromptModal<'a> {
    theme: &'a Theme,
    input: &'a InputState,
    first_launch: bool,
}

impl<'a> DirectoryPromptModal<'a> {
    pub fn new(theme: &'a Theme, input: &'a InputState, first_launch: bool) -> Self {
        Self {
            theme,
            input,
            first_launch,
        }
    }
}

impl Widget for DirectoryPromptModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = popup_area(area, 70, 8);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Choose Directory ")
            .title_style(self.theme.title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.info));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let max_input = (inner.width as usize).saturating_sub(3);
        let mut input_line = vec![Span::styled("> ", self.theme.help_key)];
        input_line.push(Span::raw(truncate_start(self.input.buffer(), max_input)));
        input_line.push(Span::styled(
            " ",
            Style::default().add_modifier(Modifier::REVERSED),
        ));

        let mut lines = vec![Line::from(input_line), Line::raw("")];

        if let Some(error) = self.input.error() {
            lines.push(Line::styled(
                error.to_string(),
                Style::default().fg(self.theme.error),
            ));
        } else {
            lines.push(Line::raw(""));
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled(" Enter ", self.theme.help_key),
            Span::raw("Scan  "),
            Span::styled(" Esc ", self.theme.help_key),
            Span::raw(if self.first_launch { "Quit" } else { "Cancel" }),
        ]));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

/// Shown while a scan runs in the background.
pub struct LoadingModal<'a> {
    theme: &'a Theme,
    progress: Option<&'a ScanProgress>,
}

impl<'a> LoadingModal<'a> {
    pub fn new(theme: &'a Theme, progress: Option<&'a ScanProgress>) -> Self {
        Self { theme, progress }
    }
}

impl Widget for LoadingModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = popup_area(area, 50, 7);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Loading... ")
            .title_style(self.theme.title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.info));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = vec![Line::raw("")];
        match self.progress {
            Some(progress) => {
                lines.push(Line::from(vec![
                    Span::styled("  Files: ", self.theme.help_desc),
                    Span::raw(progress.files_scanned.to_string()),
                    Span::styled("  Size: ", self.theme.help_desc),
                    Span::raw(format_size(progress.bytes_scanned)),
                ]));
                let max_len = (inner.width as usize).saturating_sub(4);
                let current = progress.current_path.display().to_string();
                lines.push(Line::styled(
                    format!("  {}", truncate_start(&current, max_len)),
                    Style::default().fg(self.theme.muted),
                ));
            }
            None => lines.push(Line::raw("  Scanning directory...")),
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
