// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (breadcrumb bar, listing, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - breadcrumb: Renders the clickable breadcrumb bar
// - file_list: Renders the directory listing
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar (listing info, clipboard, transfer progress)
// - dialogs: Renders prompts and popups (new dir/rename, trash confirmation, places)
// - toast: Renders toast notifications (brief pop-up messages)

pub mod breadcrumb;
pub mod dialogs;
pub mod file_list;
pub mod layout;
pub mod legend;
pub mod render;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
