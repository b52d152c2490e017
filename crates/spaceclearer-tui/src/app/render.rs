//! Application rendering.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use spaceclearer_session::ScanProgress;

use crate::theme::Theme;
use crate::ui::modals::{ConfirmRemoveModal, DirectoryPromptModal, LoadingModal};
use crate::ui::{AppLayout, ListingView, format_size, truncate_start};

use super::state::{AppMode, ListingSnapshot};

/// Shown under the listing until a status message replaces it.
const PLATFORM_NOTE: &str =
    "Recycle depends on platform trash support; permanent delete works everywhere";

/// Render context containing all the state needed for rendering.
pub struct RenderContext<'a> {
    pub theme: &'a Theme,
    pub mode: &'a AppMode,
    pub listing: Option<&'a ListingSnapshot>,
    pub selected: usize,
    pub status: Option<&'a (bool, String)>,
    pub scan_progress: Option<&'a ScanProgress>,
}

/// Main render function for the application.
pub fn render_app(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    buf.set_style(
        area,
        Style::default().bg(ctx.theme.background).fg(ctx.theme.foreground),
    );

    let layout = AppLayout::new(area);

    render_header(ctx, layout.header, buf);
    render_main(ctx, layout.main, buf);
    render_status(ctx, layout.status, buf);
    render_footer(ctx, layout.footer, buf);

    match ctx.mode {
        AppMode::Confirm { entry, mode } => {
            ConfirmRemoveModal::new(ctx.theme, entry, *mode).render(area, buf);
        }
        AppMode::ChangeDirectory(input) => {
            DirectoryPromptModal::new(ctx.theme, input, ctx.listing.is_none()).render(area, buf);
        }
        AppMode::Scanning { .. } => {
            LoadingModal::new(ctx.theme, ctx.scan_progress).render(area, buf);
        }
        AppMode::Normal | AppMode::Quit => {}
    }
}

fn render_header(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let mut spans = vec![Span::styled(" spaceclearer ", ctx.theme.title)];

    let location = match (ctx.mode, ctx.listing) {
        (AppMode::Scanning { path }, _) => Some(format!("scanning {}", path.display())),
        (_, Some(listing)) => Some(format!(
            "{}  ({} files, {})",
            listing.root.display(),
            listing.file_count,
            format_size(listing.total_size)
        )),
        _ => None,
    };

    if let Some(location) = location {
        let max = (area.width as usize).saturating_sub(16);
        spans.push(Span::raw(truncate_start(&location, max)));
    }

    Paragraph::new(Line::from(spans))
        .style(ctx.theme.header)
        .render(area, buf);
}

fn render_main(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    match ctx.listing {
        Some(listing) => {
            let title = format!(" Page {} of {} ", listing.page_number, listing.page_count);
            ListingView::new(ctx.theme, &listing.page, ctx.selected)
                .total_size(listing.total_size)
                .title(title)
                .render(area, buf);
        }
        None => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(ctx.theme.border);
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(Line::styled(
                "  No directory selected. Press c to choose one.",
                Style::default().fg(ctx.theme.muted),
            ))
            .render(inner, buf);
        }
    }
}

fn render_status(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let line = match ctx.status {
        Some((true, msg)) => Line::styled(format!(" {msg}"), Style::default().fg(ctx.theme.success)),
        Some((false, msg)) => Line::styled(format!(" {msg}"), Style::default().fg(ctx.theme.error)),
        None => Line::styled(format!(" {PLATFORM_NOTE}"), Style::default().fg(ctx.theme.muted)),
    };
    Paragraph::new(line).render(area, buf);
}

fn render_footer(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let mut hints: Vec<(&str, &str)> = Vec::new();

    if let Some(listing) = ctx.listing {
        if !listing.page.is_empty() {
            hints.extend([("r", "Recycle"), ("D", "Delete"), ("o", "Open")]);
        }
        if listing.has_next {
            hints.push(("n", "Next"));
        }
        if listing.has_previous {
            hints.push(("p", "Prev"));
        }
        hints.push(("R", "Rescan"));
    }
    hints.extend([("c", "Change dir"), ("q", "Quit")]);

    let spans: Vec<Span> = hints
        .into_iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(format!(" {key} "), ctx.theme.help_key),
                Span::styled(format!("{desc} "), ctx.theme.help_desc),
            ]
        })
        .collect();

    Paragraph::new(Line::from(spans))
        .style(ctx.theme.footer)
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use spaceclearer_core::FileEntry;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    fn snapshot(page: Vec<FileEntry>, has_next: bool) -> ListingSnapshot {
        ListingSnapshot {
            root: PathBuf::from("/data"),
            file_count: page.len(),
            total_size: page.iter().map(|e| e.size).sum(),
            page,
            page_number: 1,
            page_count: if has_next { 2 } else { 1 },
            has_next,
            has_previous: false,
        }
    }

    fn render(ctx: &RenderContext) -> String {
        let area = Rect::new(0, 0, 100, 20);
        let mut buf = Buffer::empty(area);
        render_app(ctx, area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_listing_shows_entries_and_page() {
        let theme = Theme::dark();
        let listing = snapshot(
            vec![
                FileEntry::new("/data/huge.iso", 4096),
                FileEntry::new("/data/small.txt", 10),
            ],
            true,
        );
        let text = render(&RenderContext {
            theme: &theme,
            mode: &AppMode::Normal,
            listing: Some(&listing),
            selected: 0,
            status: None,
            scan_progress: None,
        });

        assert!(text.contains("huge.iso"));
        assert!(text.contains("small.txt"));
        assert!(text.contains("Page 1 of 2"));
        assert!(text.contains("Next"));
        assert!(!text.contains("Prev"));
    }

    #[test]
    fn test_empty_listing_message() {
        let theme = Theme::dark();
        let listing = snapshot(Vec::new(), false);
        let text = render(&RenderContext {
            theme: &theme,
            mode: &AppMode::Normal,
            listing: Some(&listing),
            selected: 0,
            status: None,
            scan_progress: None,
        });

        assert!(text.contains("Directory is empty"));
        assert!(!text.contains("Open "));
    }

    #[test]
    fn test_error_status_rendered() {
        let theme = Theme::dark();
        let status = (false, "Access Denied: /root/secret".to_string());
        let text = render(&RenderContext {
            theme: &theme,
            mode: &AppMode::Normal,
            listing: None,
            selected: 0,
            status: Some(&status),
            scan_progress: None,
        });

        assert!(text.contains("Access Denied"));
    }
}
