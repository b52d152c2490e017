//! UI components and widgets.

mod listing;
pub mod modals;

pub use listing::ListingView;

use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::UnicodeWidthChar;

/// Layout areas for the application.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub status: Rect,
    pub footer: Rect,
}

impl AppLayout {
    /// Compute layout from terminal area.
    pub fn new(area: Rect) -> Self {
        let [header, main, status, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            header,
            main,
            status,
            footer,
        }
    }
}

/// Format a byte size in human-readable form.
pub fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

/// Shorten `text` to at most `max_width` terminal columns, keeping the end.
///
/// File names carry their extension at the end, so that part is kept.
pub fn truncate_start(text: &str, max_width: usize) -> String {
    let width: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if width <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut kept = Vec::new();
    let mut used = 0;
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        kept.push(c);
    }
    kept.reverse();

    let mut out = String::from("…");
    out.extend(kept);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_binary_units() {
        assert!(format_size(0).ends_with(" B"));
        let two_kib = format_size(2048);
        assert!(two_kib.starts_with('2'));
        assert!(two_kib.ends_with("KiB"));
    }

    #[test]
    fn test_truncate_start() {
        assert_eq!(truncate_start("short.txt", 20), "short.txt");
        assert_eq!(truncate_start("a-very-long-name.mkv", 8), "…ame.mkv");
        assert_eq!(truncate_start("abc", 0), "");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        let out = truncate_start("写真写真写真.jpg", 7);
        assert!(out.starts_with('…'));
        assert!(out.ends_with(".jpg"));
    }
}
