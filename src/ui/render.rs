use ratatui::Frame;

use super::{breadcrumb, dialogs, file_list, layout, legend, status_bar, toast};
use crate::App;
use tanzfm::model::ClipboardMode;

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let busy = app.model.is_busy();
    let vim_mode = app.model.ui.vim_mode;

    let legend_height = legend::calculate_legend_height(size.width, vim_mode, busy);
    let layout_info = layout::calculate_layout(size, legend_height);

    let current = app.model.history.current().to_path_buf();

    // The hit map is rebuilt every frame so clicks always match what is shown
    app.model.ui.breadcrumb_hits = breadcrumb::render_breadcrumb_bar(
        f,
        layout_info.breadcrumb_area,
        &current,
        app.model.history.can_go_back(),
        app.model.history.can_go_forward(),
        app.model.bookmarks.contains(&current),
    );

    let cut_sources = match app.model.clipboard.peek() {
        Some(entry) if entry.mode() == ClipboardMode::Cut => entry.sources().to_vec(),
        _ => Vec::new(),
    };
    file_list::render_file_list(f, layout_info.list_area, &app.model.listing, &current, &cut_sources);

    legend::render_legend(f, layout_info.legend_area, vim_mode, busy);
    status_bar::render_status_bar(f, layout_info.status_area, &app.model);

    // Dialogs on top
    if let Some(menu) = &app.model.ui.places_menu {
        dialogs::render_places_menu(f, menu);
    }
    if let Some(paths) = &app.model.ui.confirm_trash {
        dialogs::render_trash_confirmation(f, paths);
    }
    if let Some(prompt) = &app.model.ui.prompt {
        dialogs::render_prompt(f, prompt);
    }

    if let Some((message, _)) = &app.model.ui.toast_message {
        toast::render_toast(f, layout_info.list_area, message);
    }
}
