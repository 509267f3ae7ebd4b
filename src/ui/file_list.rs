use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;

use tanzfm::fs::EntryInfo;
use tanzfm::logic::formatting::{format_human_size, format_modified};
use tanzfm::model::ListingModel;

/// Width of the right-hand "size  modified" column
const INFO_WIDTH: usize = 5 + 2 + 16;

/// Build one row: icon, name, then size and timestamp right-aligned
fn build_row(entry: &EntryInfo, width: usize) -> Line<'static> {
    let icon = if entry.is_dir { "📁 " } else { "📄 " };
    let size = if entry.is_dir {
        "    -".to_string()
    } else {
        format_human_size(entry.size)
    };
    let info = format!("{}  {}", size, format_modified(entry.modified));

    let name_style = if entry.is_dir {
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
    } else if entry.is_hidden() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let used = UnicodeWidthStr::width(icon) + UnicodeWidthStr::width(entry.name.as_str());
    let mut spans = vec![Span::raw(icon), Span::styled(entry.name.clone(), name_style)];

    // Only show the info column when it fits next to the name
    if width >= used + INFO_WIDTH + 2 {
        let pad = width - used - UnicodeWidthStr::width(info.as_str());
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(info, Style::default().fg(Color::Gray)));
    }

    Line::from(spans)
}

/// Render the directory listing
///
/// Entries pending a cut are dimmed; with select-all every row is highlighted.
pub fn render_file_list(f: &mut Frame, area: Rect, listing: &ListingModel, dir: &Path, cut_sources: &[PathBuf]) {
    let title = format!(
        " {} ",
        dir.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir.display().to_string())
    );
    let block = Block::default().borders(Borders::ALL).title(title);

    if listing.entries.is_empty() {
        let empty = Paragraph::new(Span::styled("(empty)", Style::default().fg(Color::DarkGray))).block(block);
        f.render_widget(empty, area);
        return;
    }

    // Inner width minus the highlight symbol
    let row_width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = listing
        .entries
        .iter()
        .map(|entry| {
            let mut style = Style::default();
            if cut_sources.iter().any(|p| *p == dir.join(&entry.file_name)) {
                style = style.add_modifier(Modifier::DIM | Modifier::ITALIC);
            }
            if listing.all_selected {
                style = style.bg(Color::DarkGray);
            }
            ListItem::new(build_row(entry, row_width)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(listing.selected_index);
    f.render_stateful_widget(list, area, &mut state);
}
