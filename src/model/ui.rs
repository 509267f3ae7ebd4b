//! UI Model
//!
//! Prompts, dialogs, popups, toasts, and the geometry the last frame used for
//! the breadcrumb bar (needed to map mouse clicks back to segments).

use std::path::PathBuf;
use std::time::Instant;

use super::places::Place;
use crate::logic::breadcrumb::BreadcrumbSegment;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 2500;

/// What a text prompt is collecting
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptKind {
    NewDirectory,
    Rename { target: PathBuf },
}

/// Single-line text input dialog
#[derive(Clone, Debug)]
pub struct PromptState {
    pub kind: PromptKind,
    pub input: String,
    /// Message from the previous attempt (e.g. "already exists")
    pub error: Option<String>,
}

impl PromptState {
    pub fn new(kind: PromptKind, initial: &str) -> Self {
        Self {
            kind,
            input: initial.to_string(),
            error: None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            PromptKind::NewDirectory => "New Directory",
            PromptKind::Rename { .. } => "Rename",
        }
    }
}

/// Places/bookmarks popup
#[derive(Clone, Debug)]
pub struct PlacesMenuState {
    pub places: Vec<Place>,
    pub selected_index: usize,
}

/// Breadcrumb bar geometry from the last render
#[derive(Clone, Debug, Default)]
pub struct BreadcrumbHits {
    /// Screen column of the first segment
    pub x: u16,
    /// Screen row of the bar
    pub y: u16,
    pub segments: Vec<BreadcrumbSegment>,
}

#[derive(Clone, Debug)]
pub struct UiModel {
    pub vim_mode: bool,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Text prompt for new directory / rename
    pub prompt: Option<PromptState>,

    /// Trash confirmation (paths awaiting y/n)
    pub confirm_trash: Option<Vec<PathBuf>>,

    pub places_menu: Option<PlacesMenuState>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    // ============================================
    // VISUAL STATE
    // ============================================
    pub breadcrumb_hits: BreadcrumbHits,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            prompt: None,
            confirm_trash: None,
            places_menu: None,
            toast_message: None,
            breadcrumb_hits: BreadcrumbHits::default(),
            should_quit: false,
        }
    }

    /// Check if any modal dialog is currently showing
    pub fn has_modal(&self) -> bool {
        self.prompt.is_some() || self.confirm_trash.is_some() || self.places_menu.is_some()
    }

    pub fn close_all_modals(&mut self) {
        self.prompt = None;
        self.confirm_trash = None;
        self.places_menu = None;
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        match &self.toast_message {
            Some((_, timestamp)) => timestamp.elapsed().as_millis() >= TOAST_DURATION_MS,
            None => false,
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
