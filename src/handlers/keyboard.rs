//! Keyboard Input Handler
//!
//! Modal dialogs get first pick of every key; everything else goes to the
//! main bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use tanzfm::model::ClipboardMode;

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.model.ui.prompt.is_some() {
        handle_prompt_key(app, key);
        return;
    }

    if app.model.ui.confirm_trash.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_trash(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.model.ui.confirm_trash = None;
            }
            _ => {} // Ignore other keys while prompt is showing
        }
        return;
    }

    if app.model.ui.places_menu.is_some() {
        handle_places_key(app, key);
        return;
    }

    let vim = app.model.ui.vim_mode;
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.model.ui.should_quit = true,

        // History
        KeyCode::Left if alt => app.go_back(),
        KeyCode::Right if alt => app.go_forward(),
        KeyCode::Char('b') => app.go_back(),
        KeyCode::Char('f') => app.go_forward(),

        // Movement
        KeyCode::Up => app.model.listing.select_previous(),
        KeyCode::Down => app.model.listing.select_next(),
        KeyCode::Home => app.model.listing.select_first(),
        KeyCode::End => app.model.listing.select_last(),
        KeyCode::Char('k') if vim => app.model.listing.select_previous(),
        KeyCode::Char('j') if vim => app.model.listing.select_next(),
        KeyCode::Char('g') if vim => app.model.listing.select_first(),
        KeyCode::Char('G') if vim => app.model.listing.select_last(),

        KeyCode::Enter | KeyCode::Right => app.open_selected(),
        KeyCode::Char('l') if vim => app.open_selected(),
        KeyCode::Backspace | KeyCode::Left => app.go_parent(),
        KeyCode::Char('h') if vim => app.go_parent(),

        // Clipboard and transfers
        KeyCode::Char('c') => app.clip_selection(ClipboardMode::Copy),
        KeyCode::Char('x') => app.clip_selection(ClipboardMode::Cut),
        KeyCode::Char('v') => app.paste(),
        KeyCode::Char('a') => app.model.listing.select_all(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_trash(),
        KeyCode::Char('n') => app.begin_new_directory(),
        KeyCode::Char('r') => app.begin_rename(),
        KeyCode::Char('z') => app.compress_selection(),
        KeyCode::Esc => app.cancel_transfer(),

        // Places
        KeyCode::Char('B') => app.toggle_bookmark(),
        KeyCode::Char('p') => app.open_places_menu(),

        // View
        KeyCode::Char('.') => app.model.listing.toggle_hidden(),
        KeyCode::Char('s') => app.model.listing.cycle_sort(),
        KeyCode::Char('S') => app.model.listing.toggle_reverse(),
        KeyCode::Char('R') => app.reload_listing(false),

        _ => {}
    }
}

fn handle_prompt_key(app: &mut App, key: KeyEvent) {
    let Some(prompt) = app.model.ui.prompt.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Enter => app.submit_prompt(),
        KeyCode::Esc => app.model.ui.prompt = None,
        KeyCode::Backspace => {
            prompt.input.pop();
            prompt.error = None;
        }
        KeyCode::Char(c) => {
            prompt.input.push(c);
            prompt.error = None;
        }
        _ => {}
    }
}

fn handle_places_key(app: &mut App, key: KeyEvent) {
    let vim = app.model.ui.vim_mode;
    let Some(menu) = app.model.ui.places_menu.as_mut() else {
        return;
    };
    let last = menu.places.len().saturating_sub(1);
    match key.code {
        KeyCode::Up => menu.selected_index = menu.selected_index.saturating_sub(1),
        KeyCode::Char('k') if vim => menu.selected_index = menu.selected_index.saturating_sub(1),
        KeyCode::Down => menu.selected_index = (menu.selected_index + 1).min(last),
        KeyCode::Char('j') if vim => menu.selected_index = (menu.selected_index + 1).min(last),
        KeyCode::Enter => app.open_selected_place(),
        KeyCode::Esc | KeyCode::Char('p') => app.model.ui.places_menu = None,
        _ => {}
    }
}
