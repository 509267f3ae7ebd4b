use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

use tanzfm::logic::breadcrumb::{is_truncated, BreadcrumbLayout, BreadcrumbSegment};
use tanzfm::model::ui::BreadcrumbHits;

/// Drawn in front of the bar when leading segments were dropped
const ELLIPSIS: &str = "… ";

/// Lay out `path` for a bar `budget` columns wide
///
/// Returns whether the trail was truncated; when it was, the segments fit in
/// what is left after the ellipsis.
pub fn layout_segments(path: &Path, budget: usize) -> (bool, Vec<BreadcrumbSegment>) {
    let layout = BreadcrumbLayout::default();
    let width = |label: &str| UnicodeWidthStr::width(label);

    let segments = layout.compute(path, budget, width);
    if !is_truncated(path, &segments) {
        return (false, segments);
    }
    let reserved = UnicodeWidthStr::width(ELLIPSIS);
    (true, layout.compute(path, budget.saturating_sub(reserved), width))
}

/// Render the breadcrumb bar and report where each segment landed
pub fn render_breadcrumb_bar(
    f: &mut Frame,
    area: Rect,
    path: &Path,
    can_go_back: bool,
    can_go_forward: bool,
    bookmarked: bool,
) -> BreadcrumbHits {
    let inner_width = area.width.saturating_sub(2) as usize;
    let (truncated, segments) = layout_segments(path, inner_width);

    let mut spans = Vec::with_capacity(segments.len() * 2 + 1);
    if truncated {
        spans.push(Span::styled(ELLIPSIS, Style::default().fg(Color::DarkGray)));
    }
    for segment in &segments {
        if segment.is_leaf {
            spans.push(Span::styled(
                segment.label.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        } else {
            spans.push(Span::raw(segment.label.clone()));
            spans.push(Span::styled("/", Style::default().fg(Color::DarkGray)));
        }
    }

    let arrow = |enabled: bool, glyph: &'static str| {
        let color = if enabled { Color::Yellow } else { Color::DarkGray };
        Span::styled(glyph, Style::default().fg(color))
    };
    let mut title = vec![
        Span::raw(" "),
        arrow(can_go_back, "◀"),
        Span::raw(" "),
        arrow(can_go_forward, "▶"),
        Span::raw(" "),
    ];
    if bookmarked {
        title.push(Span::styled("★ ", Style::default().fg(Color::Yellow)));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(title)),
    );
    f.render_widget(bar, area);

    let offset = if truncated { UnicodeWidthStr::width(ELLIPSIS) as u16 } else { 0 };
    BreadcrumbHits {
        x: area.x + 1 + offset,
        y: area.y + 1,
        segments,
    }
}
