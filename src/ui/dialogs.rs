use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::path::PathBuf;

use tanzfm::model::ui::{PlacesMenuState, PromptState};

/// Centered rectangle of at most `width` x `height` within `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render the new-directory / rename prompt
pub fn render_prompt(f: &mut Frame, prompt: &PromptState) {
    let mut lines = vec![Line::from(vec![
        Span::raw(prompt.input.clone()),
        Span::styled("█", Style::default().fg(Color::Gray)),
    ])];
    match &prompt.error {
        Some(error) => lines.push(Line::from(Span::styled(
            format!("{} - choose another name", error),
            Style::default().fg(Color::Red),
        ))),
        None => lines.push(Line::from(Span::styled(
            "Enter: confirm  Esc: cancel",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    let prompt_area = centered(f.area(), 60, 4);
    let dialog = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(prompt.title())
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(Clear, prompt_area);
    f.render_widget(dialog, prompt_area);
}

/// Render the move-to-trash confirmation dialog
pub fn render_trash_confirmation(f: &mut Frame, paths: &[PathBuf]) {
    let names = paths
        .iter()
        .take(5)
        .map(|p| {
            let name = p.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
            format!("  - {}", name)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let more_text = if paths.len() > 5 {
        format!("\n  ... and {} more", paths.len() - 5)
    } else {
        String::new()
    };

    let prompt_text = format!(
        "Move {} item(s) to the trash?\n\n{}{}\n\nContinue? (y/n)",
        paths.len(),
        names,
        more_text
    );

    let shown = paths.len().min(5) as u16 + if paths.len() > 5 { 1 } else { 0 };
    let prompt_area = centered(f.area(), 50, 8 + shown);

    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm Trash")
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

/// Render the places/bookmarks menu
pub fn render_places_menu(f: &mut Frame, menu: &PlacesMenuState) {
    let items: Vec<ListItem> = menu
        .places
        .iter()
        .map(|place| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<12}", place.label), Style::default().fg(Color::Yellow)),
                Span::styled(place.path.display().to_string(), Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    let menu_area = centered(f.area(), 60, menu.places.len() as u16 + 2);
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Places")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(menu.selected_index));

    f.render_widget(Clear, menu_area);
    f.render_stateful_widget(list, menu_area, &mut state);
}
