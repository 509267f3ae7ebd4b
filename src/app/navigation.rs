//! Navigation orchestration methods
//!
//! Moving between locations (open, parent, back/forward, breadcrumb and
//! places jumps) and keeping the listing in step with the history.

use std::path::Path;

use tanzfm::logic::errors::describe;
use tanzfm::logic::path;
use tanzfm::model::ui::PlacesMenuState;
use tanzfm::model::HistoryStep;

use crate::App;

impl App {
    /// Re-read the current location
    ///
    /// `fresh` resets the cursor to the top (used after a location change);
    /// otherwise the cursor stays on the same name.
    pub(crate) fn reload_listing(&mut self, fresh: bool) {
        let current = self.model.history.current().to_path_buf();
        let result = if fresh {
            self.model.listing.load(&current, &*self.fs)
        } else {
            self.model.listing.refresh(&current, &*self.fs)
        };

        if let Err(kind) = result {
            log::warn!("listing {} failed: {}", current.display(), kind);
            self.model.show_toast(format!("Error: {}", describe(kind)));
        }

        self.model.free_space = self.fs.free_space(&current).ok();
    }

    pub(crate) fn navigate_to(&mut self, target: &Path) {
        match self.model.history.navigate(target) {
            Ok(_) => self.reload_listing(true),
            Err(kind) => self.model.show_toast(format!("Error: {}", describe(kind))),
        }
    }

    /// Enter the directory under the cursor
    pub(crate) fn open_selected(&mut self) {
        let Some(entry) = self.model.listing.selected_entry() else {
            return;
        };
        if !entry.is_dir {
            return;
        }
        let target = self.model.history.current().join(&entry.file_name);
        self.navigate_to(&target);
    }

    /// Go to the parent, leaving the cursor on the directory we came from
    pub(crate) fn go_parent(&mut self) {
        let came_from = path::file_name(self.model.history.current());
        match self.model.history.go_up() {
            Ok(HistoryStep::Moved(_)) => {
                self.reload_listing(true);
                if let Some(name) = came_from {
                    self.model.listing.select_name(&name);
                }
            }
            Ok(HistoryStep::AtBoundary) => {}
            Err(kind) => self.model.show_toast(format!("Error: {}", describe(kind))),
        }
    }

    pub(crate) fn go_back(&mut self) {
        let step = self.model.history.back();
        self.apply_history_step(step);
    }

    pub(crate) fn go_forward(&mut self) {
        let step = self.model.history.forward();
        self.apply_history_step(step);
    }

    fn apply_history_step(&mut self, step: Result<HistoryStep, tanzfm::logic::errors::ErrorKind>) {
        match step {
            Ok(HistoryStep::Moved(_)) => self.reload_listing(true),
            Ok(HistoryStep::AtBoundary) => {}
            Err(kind) => self.model.show_toast(format!("Error: {}", describe(kind))),
        }
    }

    /// Open the places popup: standard places followed by bookmarks
    pub(crate) fn open_places_menu(&mut self) {
        let mut places = self.places.clone();
        places.extend(self.model.bookmarks.as_places());
        if places.is_empty() {
            self.model.show_toast("No places available".to_string());
            return;
        }
        self.model.ui.places_menu = Some(PlacesMenuState {
            places,
            selected_index: 0,
        });
    }

    pub(crate) fn open_selected_place(&mut self) {
        let Some(menu) = self.model.ui.places_menu.take() else {
            return;
        };
        if let Some(place) = menu.places.get(menu.selected_index) {
            let target = place.path.clone();
            self.navigate_to(&target);
        }
    }

    pub(crate) fn toggle_bookmark(&mut self) {
        let current = self.model.history.current().to_path_buf();
        let label = path::file_name(&current).unwrap_or_else(|| current.display().to_string());
        let message = if self.model.bookmarks.toggle(&current) {
            format!("Bookmarked {}", label)
        } else {
            format!("Removed bookmark {}", label)
        };
        self.model.show_toast(message);
    }
}
