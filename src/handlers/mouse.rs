//! Mouse Input Handler
//!
//! Left click on a breadcrumb segment jumps to that segment's full prefix,
//! even when leading segments were dropped from the bar.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use tanzfm::logic::breadcrumb::hit_test;

use crate::App;

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.model.has_modal() {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let hits = &app.model.ui.breadcrumb_hits;
            if mouse.row != hits.y || mouse.column < hits.x {
                return;
            }
            let offset = (mouse.column - hits.x) as usize;
            let Some(segment) = hit_test(&hits.segments, offset) else {
                return;
            };
            let target = segment.prefix_path.clone();
            app.navigate_to(&target);
        }
        MouseEventKind::ScrollUp => app.model.listing.select_previous(),
        MouseEventKind::ScrollDown => app.model.listing.select_next(),
        _ => {}
    }
}
