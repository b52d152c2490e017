//! Page listing widget.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use spaceclearer_core::FileEntry;

use crate::theme::Theme;
use crate::ui::{format_size, truncate_start};

/// Width reserved for the size column.
const SIZE_COLUMN: usize = 12;

/// One page of entries with the selected row highlighted.
pub struct ListingView<'a> {
    theme: &'a Theme,
    entries: &'a [FileEntry],
    selected: usize,
    total_size: u64,
    title: String,
}

impl<'a> ListingView<'a> {
    pub fn new(theme: &'a Theme, entries: &'a [FileEntry], selected: usize) -> Self {
        Self {
            theme,
            entries,
            selected,
            total_size: 0,
            title: String::new(),
        }
    }

    /// Total bytes of the whole listing, for size coloring.
    pub fn total_size(mut self, total_size: u64) -> Self {
        self.total_size = total_size;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Widget for ListingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title.as_str())
            .title_style(self.theme.title)
            .borders(Borders::ALL)
            .border_style(self.theme.border);

        let inner = block.inner(area);
        block.render(area, buf);

        if self.entries.is_empty() {
            Paragraph::new(Line::styled(
                "  Directory is empty",
                Style::default().fg(self.theme.muted),
            ))
            .render(inner, buf);
            return;
        }

        let name_width = (inner.width as usize).saturating_sub(SIZE_COLUMN + 4);
        let lines: Vec<Line> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let ratio = if self.total_size > 0 {
                    entry.size as f64 / self.total_size as f64
                } else {
                    0.0
                };
                let name = truncate_start(&entry.name(), name_width);
                let line = Line::from(vec![
                    Span::raw(if i == self.selected { "> " } else { "  " }),
                    Span::styled(format!("{name:<name_width$}"), self.theme.file),
                    Span::styled(
                        format!("{:>SIZE_COLUMN$}", format_size(entry.size)),
                        Style::default().fg(self.theme.size_color(ratio)),
                    ),
                ]);
                if i == self.selected {
                    line.style(self.theme.selected)
                } else {
                    line
                }
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
