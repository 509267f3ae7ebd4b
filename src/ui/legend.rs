use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, busy: bool) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    // Navigation keys (different for vim mode)
    if vim_mode {
        hotkey_spans.extend(vec![
            key("hjkl"),
            Span::raw(":Nav  "),
            key("g/G"),
            Span::raw(":First/Last  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            key("↑/↓"),
            Span::raw(":Nav  "),
            key("Enter"),
            Span::raw(":Open  "),
            key("⌫"),
            Span::raw(":Up  "),
        ]);
    }

    hotkey_spans.extend(vec![
        key("b/f"),
        Span::raw(":Back/Fwd  "),
        key("c/x/v"),
        Span::raw(":Copy/Cut/Paste  "),
        key("a"),
        Span::raw(":All  "),
        key("d"),
        Span::raw(":Trash  "),
        key("n"),
        Span::raw(":New Dir  "),
        key("r"),
        Span::raw(":Rename  "),
        key("z"),
        Span::raw(":Zip  "),
        key("p"),
        Span::raw(":Places  "),
        key("B"),
        Span::raw(":Bookmark  "),
        key("."),
        Span::raw(":Hidden  "),
        key("s/S"),
        Span::raw(":Sort/Reverse  "),
    ]);

    if busy {
        hotkey_spans.extend(vec![key("Esc"), Span::raw(":Cancel transfer  ")]);
    }

    hotkey_spans.extend(vec![key("q"), Span::raw(":Quit")]);

    hotkey_spans
}

/// Build the legend paragraph
pub fn build_legend_paragraph(vim_mode: bool, busy: bool) -> Paragraph<'static> {
    Paragraph::new(Line::from(build_hotkey_spans(vim_mode, busy)))
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, busy: bool) {
    f.render_widget(build_legend_paragraph(vim_mode, busy), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, vim_mode: bool, busy: bool) -> u16 {
    // line_count() doesn't account for borders when a block is attached
    let paragraph_for_counting = Paragraph::new(Line::from(build_hotkey_spans(vim_mode, busy)))
        .wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to convert spans to plain text for assertions
    fn spans_to_text(spans: &[Span]) -> String {
        spans.iter().map(|span| span.content.as_ref()).collect::<Vec<_>>().join("")
    }

    #[test]
    fn test_legend_vim_mode_shows_hjkl() {
        let text = spans_to_text(&build_hotkey_spans(true, false));
        assert!(text.contains("hjkl"));
        assert!(!text.contains("Enter"));
    }

    #[test]
    fn test_legend_lists_zip() {
        assert!(spans_to_text(&build_hotkey_spans(false, false)).contains("z:Zip"));
    }

    #[test]
    fn test_legend_shows_cancel_only_while_busy() {
        assert!(!spans_to_text(&build_hotkey_spans(false, false)).contains("Cancel"));
        assert!(spans_to_text(&build_hotkey_spans(false, true)).contains("Esc:Cancel transfer"));
    }

    #[test]
    fn test_legend_height_grows_when_narrow() {
        let wide = calculate_legend_height(400, false, false);
        let narrow = calculate_legend_height(40, false, false);
        assert_eq!(wide, 3);
        assert!(narrow > wide);
    }
}
