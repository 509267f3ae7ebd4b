use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use tanzfm::logic::formatting::format_free_space;
use tanzfm::model::Model;
use tanzfm::utils;

/// Build the status text: transfer progress while busy, listing info otherwise
pub fn build_status_text(model: &Model) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(active) = &model.active_transfer {
        let detail = match &active.progress {
            Some(p) => {
                let name = p
                    .current
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                format!(
                    "{} {}/{}: {} ({})",
                    active.kind.progressive(),
                    p.item_index + 1,
                    p.item_count,
                    name,
                    utils::format_bytes(p.bytes_copied)
                )
            }
            None => format!("{}...", active.kind.progressive()),
        };
        parts.push(detail);
    }

    parts.push(format!("{} items", model.listing.entries.len()));
    parts.push(format!(
        "Sort: {}{}",
        model.listing.sort_mode.as_str(),
        if model.listing.sort_reverse { " ↓" } else { "" }
    ));
    if model.listing.show_hidden {
        parts.push("Hidden: shown".to_string());
    }
    if let Some(entry) = model.clipboard.peek() {
        parts.push(format!("Clipboard: {} {}", entry.mode().as_str(), entry.len()));
    }
    if let Some(bytes) = model.free_space {
        parts.push(format_free_space(bytes));
    }

    parts.join(" │ ")
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, model: &Model) {
    let color = if model.is_busy() { Color::Yellow } else { Color::Gray };
    let status = Paragraph::new(Line::from(Span::styled(
        build_status_text(model),
        Style::default().fg(color),
    )))
    .block(Block::default().borders(Borders::ALL).title("Status"));

    f.render_widget(status, area);
}
