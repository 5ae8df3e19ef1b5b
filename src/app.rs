use crate::catalog::Portfolio;
use crate::gallery::{self, Gallery};
use crate::modal::{self, Action, HitTarget, Modal, ModalLayout, ModalState};
use crate::theme::ThemeSetting;
use crate::ui::layout::{CardGrid, ScreenLayout};
use chrono::Datelike;
use ratatui::layout::{Position, Rect};

/// Main application state.
pub struct App {
    pub portfolio: Portfolio,
    pub gallery: Option<Gallery>,
    pub modal: Modal,
    pub theme: ThemeSetting,
    pub should_quit: bool,
    pub show_help: bool,

    // Gallery selection, as a catalog index
    pub selected: usize,
    pub area: Rect,

    pub footer_year: i32,
    pub status_msg: String,
}

impl App {
    pub fn new(portfolio: Portfolio, theme: ThemeSetting) -> Self {
        let mut gallery = Gallery::new();
        gallery::render(&portfolio.projects, Some(&mut gallery));
        let status_msg = format!("{} projects", gallery.len());

        Self {
            portfolio,
            gallery: Some(gallery),
            modal: Modal::new(),
            theme,
            should_quit: false,
            show_help: false,
            selected: 0,
            area: Rect::default(),
            footer_year: chrono::Local::now().year(),
            status_msg,
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.area = Rect::new(0, 0, width, height);
        self.keep_selection_visible();
    }

    pub fn card_count(&self) -> usize {
        self.gallery.as_ref().map_or(0, Gallery::len)
    }

    fn grid(&self) -> CardGrid {
        CardGrid::new(ScreenLayout::new(self.area).grid)
    }

    fn keep_selection_visible(&mut self) {
        let grid = self.grid();
        if let Some(gallery) = self.gallery.as_mut() {
            gallery.scroll_to_row(grid.row_of(self.selected), grid.visible_rows, &self.modal);
        }
    }

    /// Move the selection by `delta` cards, staying inside the catalog.
    pub fn move_selection(&mut self, delta: isize) {
        if self.modal.is_open() || self.card_count() == 0 {
            return;
        }
        let last = self.card_count() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
        self.keep_selection_visible();
    }

    pub fn select_left(&mut self) {
        self.move_selection(-1);
    }

    pub fn select_right(&mut self) {
        self.move_selection(1);
    }

    pub fn select_up(&mut self) {
        let columns = self.grid().columns as isize;
        if self.selected as isize >= columns {
            self.move_selection(-columns);
        }
    }

    pub fn select_down(&mut self) {
        let columns = self.grid().columns;
        if self.selected + columns < self.card_count() {
            self.move_selection(columns as isize);
        }
    }

    /// Scroll the gallery by whole grid rows. No-op while the modal is open.
    /// A selection scrolled out of view moves to the first visible card.
    pub fn scroll_gallery(&mut self, delta: isize) {
        let grid = self.grid();
        let count = self.card_count();
        let Some(gallery) = self.gallery.as_mut() else {
            return;
        };
        if !gallery.scroll_by(delta, grid.total_rows(count), &self.modal) {
            return;
        }
        let first = gallery.scroll();
        let row = grid.row_of(self.selected);
        if row < first || row >= first + grid.visible_rows {
            self.selected = (first * grid.columns).min(count.saturating_sub(1));
        }
    }

    pub fn open_selected(&mut self) {
        let Some(card) = self.gallery.as_ref().and_then(|g| g.card(self.selected)) else {
            return;
        };
        card.select(&mut self.modal);
        self.status_msg = format!("Viewing {}", card.title());
    }

    pub fn close_modal(&mut self) {
        let closed = match self.modal.state() {
            ModalState::Open(project) => Some(project.title.clone()),
            ModalState::Closed => None,
        };
        self.modal.close();
        self.status_msg = closed.map_or_else(String::new, |title| format!("Closed {}", title));
    }

    /// Scroll the open modal's description, stopping at its last line.
    pub fn scroll_modal_down(&mut self) {
        let Some(content) = self.modal.content() else {
            return;
        };
        let area = ModalLayout::new(self.area).description;
        let lines = modal::wrapped_line_count(&content.description, area.width);
        self.modal.scroll_body_down(lines.saturating_sub(area.height));
    }

    /// Handle a left click at `pos`. Returns a URL to open when the click
    /// activated an action link.
    pub fn click(&mut self, pos: Position) -> Option<String> {
        if self.modal.is_open() {
            let layout = ModalLayout::new(self.area);
            let target = modal::classify(&layout, pos);
            if target == HitTarget::Content {
                return layout.action_at(pos).and_then(|a| self.activate(a));
            }
            if self.modal.handle_click(target) {
                self.status_msg.clear();
            }
            return None;
        }

        let screen = ScreenLayout::new(self.area);
        if screen.toggle.contains(pos) {
            self.toggle_theme();
            return None;
        }

        let scroll = self.gallery.as_ref().map_or(0, Gallery::scroll);
        if let Some(index) = self.grid().card_at(self.card_count(), scroll, pos) {
            self.selected = index;
            self.open_selected();
        }
        None
    }

    /// Activate an action link of the open project. Returns its URL unless
    /// it is still a placeholder.
    pub fn activate(&mut self, action: Action) -> Option<String> {
        let link = self.modal.content()?.action(action);
        match link.target() {
            Some(url) => {
                let url = url.to_string();
                self.status_msg = format!("Opening: {}", url);
                Some(url)
            }
            None => {
                self.status_msg = format!("No {} link yet", action.label());
                None
            }
        }
    }

    pub fn toggle_theme(&mut self) {
        match self.theme.toggle() {
            Ok(theme) => {
                self.status_msg = format!("Theme: {}", theme.as_str());
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not save theme preference");
                self.status_msg = format!(
                    "Theme: {} (not saved: {})",
                    self.theme.current().as_str(),
                    e.user_message()
                );
            }
        }
    }
}
