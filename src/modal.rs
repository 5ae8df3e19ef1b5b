use crate::catalog::ProjectRecord;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use std::sync::Arc;
use unicode_width::UnicodeWidthStr;

/// Whether the detail overlay is showing, and for which project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(Arc<ProjectRecord>),
}

/// Which of the two action links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Demo,
    Source,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Self::Demo => "Live Demo",
            Self::Source => "GitHub",
        }
    }

    pub const ALL: [Action; 2] = [Self::Demo, Self::Source];
}

/// An action link rendered in the modal body. Activating it opens `href`
/// outside the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLink {
    pub action: Action,
    pub href: String,
    available: bool,
}

impl ActionLink {
    /// Destination, or `None` while the link is still a placeholder.
    pub fn target(&self) -> Option<&str> {
        if self.available {
            Some(self.href.as_str())
        } else {
            None
        }
    }
}

/// Body of the modal, rebuilt from the record on every open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub title: String,
    pub image: String,
    pub description: String,
    pub tags: Vec<String>,
    pub actions: [ActionLink; 2],
}

impl From<&ProjectRecord> for ModalContent {
    fn from(project: &ProjectRecord) -> Self {
        Self {
            title: project.title.clone(),
            image: project.image.clone(),
            description: project.description.clone(),
            tags: project.tech_stack.clone(),
            actions: [
                ActionLink {
                    action: Action::Demo,
                    href: project.demo_link.clone(),
                    available: project.demo_href().is_some(),
                },
                ActionLink {
                    action: Action::Source,
                    href: project.github_link.clone(),
                    available: project.github_href().is_some(),
                },
            ],
        }
    }
}

impl ModalContent {
    pub fn action(&self, action: Action) -> &ActionLink {
        match action {
            Action::Demo => &self.actions[0],
            Action::Source => &self.actions[1],
        }
    }
}

/// What a click on the overlay landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Background,
    CloseControl,
    Content,
}

/// Overlay geometry, shared by the renderer and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    pub overlay: Rect,
    pub content: Rect,
    pub close: Rect,
    pub header: Rect,
    pub image: Rect,
    pub description: Rect,
    pub tags: Rect,
    pub demo: Rect,
    pub source: Rect,
}

pub const CLOSE_LABEL: &str = "[ x ]";

impl ModalLayout {
    pub fn new(overlay: Rect) -> Self {
        let content = centered_rect(70, 80, overlay);
        let close_width = CLOSE_LABEL.len() as u16;
        let close = Rect {
            x: content.right().saturating_sub(close_width + 2).max(content.x),
            y: content.y,
            width: close_width.min(content.width),
            height: content.height.min(1),
        };

        let inner = Rect {
            x: content.x.saturating_add(1),
            y: content.y.saturating_add(1),
            width: content.width.saturating_sub(2),
            height: content.height.saturating_sub(2),
        };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(inner);
        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[4]);

        Self {
            overlay,
            content,
            close,
            header: rows[0],
            image: rows[1],
            description: rows[2],
            tags: rows[3],
            demo: buttons[0],
            source: buttons[1],
        }
    }

    pub fn action_area(&self, action: Action) -> Rect {
        match action {
            Action::Demo => self.demo,
            Action::Source => self.source,
        }
    }

    /// Action link under `pos`, if any.
    pub fn action_at(&self, pos: Position) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|a| self.action_area(*a).contains(pos))
    }
}

/// Classify a click. The close control sits on the content border and
/// takes precedence over it; anything outside the content is background.
pub fn classify(layout: &ModalLayout, pos: Position) -> HitTarget {
    if layout.close.contains(pos) {
        HitTarget::CloseControl
    } else if layout.content.contains(pos) {
        HitTarget::Content
    } else {
        HitTarget::Background
    }
}

/// Create a centered rectangle using percentage of parent area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// Rows `text` takes when word-wrapped to `width` columns. Words wider
/// than a row are broken across rows.
pub fn wrapped_line_count(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let width = width as usize;
    let mut lines = 0usize;
    for paragraph in text.lines() {
        lines += 1;
        let mut current = 0usize;
        for word in paragraph.split_whitespace() {
            let w = word.width();
            let needed = if current == 0 { w } else { current + 1 + w };
            if needed <= width {
                current = needed;
                continue;
            }
            if current > 0 {
                lines += 1;
            }
            let extra = (w - 1) / width;
            lines += extra;
            current = w - extra * width;
        }
    }
    lines.min(u16::MAX as usize) as u16
}

/// Project detail overlay. State and the scroll lock only change through
/// `open`, `close` and `handle_click`.
#[derive(Debug, Default)]
pub struct Modal {
    state: ModalState,
    body: Option<ModalContent>,
    scroll_locked: bool,
    body_scroll: u16,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    /// Background scrolling is suspended while this is set.
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn content(&self) -> Option<&ModalContent> {
        self.body.as_ref()
    }

    pub fn body_scroll(&self) -> u16 {
        self.body_scroll
    }

    pub fn open(&mut self, project: Arc<ProjectRecord>) {
        tracing::info!(id = %project.id, "modal opened");
        self.body = Some(ModalContent::from(project.as_ref()));
        self.body_scroll = 0;
        self.state = ModalState::Open(project);
        self.scroll_locked = true;
    }

    pub fn close(&mut self) {
        if let ModalState::Open(project) = &self.state {
            tracing::info!(id = %project.id, "modal closed");
        }
        self.state = ModalState::Closed;
        self.body = None;
        self.body_scroll = 0;
        self.scroll_locked = false;
    }

    /// Apply a click. Returns true when it dismissed the modal.
    pub fn handle_click(&mut self, target: HitTarget) -> bool {
        if !self.is_open() {
            return false;
        }
        match target {
            HitTarget::Background | HitTarget::CloseControl => {
                tracing::debug!(?target, "modal dismissed");
                self.close();
                true
            }
            HitTarget::Content => false,
        }
    }

    /// Scroll the description one line, never past `max`.
    pub fn scroll_body_down(&mut self, max: u16) {
        if self.is_open() {
            self.body_scroll = self.body_scroll.saturating_add(1).min(max);
        }
    }

    pub fn scroll_body_up(&mut self) {
        self.body_scroll = self.body_scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record;

    fn layout() -> ModalLayout {
        ModalLayout::new(Rect::new(0, 0, 100, 40))
    }

    #[test]
    fn test_open_sets_state_and_lock() {
        let mut modal = Modal::new();
        assert_eq!(*modal.state(), ModalState::Closed);
        assert!(!modal.scroll_locked());

        let project = Arc::new(record("a", "A", &["X", "Y"]));
        modal.open(Arc::clone(&project));

        assert_eq!(*modal.state(), ModalState::Open(project));
        assert!(modal.scroll_locked());
        let content = modal.content().unwrap();
        assert_eq!(content.title, "A");
        assert_eq!(content.description, "All about A");
        assert_eq!(content.tags, vec!["X", "Y"]);
        assert_eq!(
            content.action(Action::Demo).target(),
            Some("https://demo.example/a")
        );
        assert_eq!(
            content.action(Action::Source).target(),
            Some("https://github.example/a")
        );
    }

    #[test]
    fn test_open_replaces_previous_content() {
        let mut modal = Modal::new();
        modal.open(Arc::new(record("a", "A", &["X"])));
        modal.scroll_body_down(5);
        modal.open(Arc::new(record("b", "B", &["Y", "Z"])));

        let content = modal.content().unwrap();
        assert_eq!(content.title, "B");
        assert_eq!(content.tags, vec!["Y", "Z"]);
        assert_eq!(modal.body_scroll(), 0);
    }

    #[test]
    fn test_placeholder_links_have_no_target() {
        let mut project = record("a", "A", &["X"]);
        project.demo_link = "#".to_string();
        let content = ModalContent::from(&project);
        assert_eq!(content.action(Action::Demo).target(), None);
        assert_eq!(content.action(Action::Demo).href, "#");
        assert!(content.action(Action::Source).target().is_some());
    }

    #[test]
    fn test_body_scroll_clamped() {
        let mut modal = Modal::new();
        modal.scroll_body_down(3);
        assert_eq!(modal.body_scroll(), 0);

        modal.open(Arc::new(record("a", "A", &["X"])));
        for _ in 0..500 {
            modal.scroll_body_down(2);
        }
        assert_eq!(modal.body_scroll(), 2);
        modal.scroll_body_up();
        assert_eq!(modal.body_scroll(), 1);
    }

    #[test]
    fn test_wrapped_line_count() {
        assert_eq!(wrapped_line_count("aaa bbb ccc", 7), 2);
        assert_eq!(wrapped_line_count("aaa bbb ccc", 3), 3);
        assert_eq!(wrapped_line_count("abcdefgh", 3), 3);
        assert_eq!(wrapped_line_count("abcdefgh x", 3), 4);
        assert_eq!(wrapped_line_count("a\n\nb", 10), 3);
        assert_eq!(wrapped_line_count("anything", 0), 0);
    }

    #[test]
    fn test_dismiss_paths_close_and_unlock() {
        for target in [HitTarget::Background, HitTarget::CloseControl] {
            let mut modal = Modal::new();
            modal.open(Arc::new(record("a", "A", &["X"])));
            assert!(modal.handle_click(target));
            assert_eq!(*modal.state(), ModalState::Closed);
            assert!(!modal.scroll_locked());
            assert!(modal.content().is_none());
        }
    }

    #[test]
    fn test_content_click_keeps_modal_open() {
        let mut modal = Modal::new();
        modal.open(Arc::new(record("a", "A", &["X"])));
        assert!(!modal.handle_click(HitTarget::Content));
        assert!(modal.is_open());
        assert!(modal.scroll_locked());
    }

    #[test]
    fn test_click_while_closed_is_ignored() {
        let mut modal = Modal::new();
        assert!(!modal.handle_click(HitTarget::Background));
        assert_eq!(*modal.state(), ModalState::Closed);
    }

    #[test]
    fn test_classify_regions() {
        let layout = layout();
        assert_eq!(classify(&layout, Position::new(0, 0)), HitTarget::Background);
        assert_eq!(
            classify(&layout, Position::new(layout.content.x + 2, layout.content.y + 2)),
            HitTarget::Content
        );
        assert_eq!(
            classify(&layout, Position::new(layout.close.x, layout.close.y)),
            HitTarget::CloseControl
        );
        // every cell of the close control counts as the control
        let last = Position::new(layout.close.right() - 1, layout.close.y);
        assert_eq!(classify(&layout, last), HitTarget::CloseControl);
        let below = Position::new(layout.content.x, layout.content.bottom());
        assert_eq!(classify(&layout, below), HitTarget::Background);
    }

    #[test]
    fn test_close_control_inside_content() {
        let layout = layout();
        assert_eq!(layout.close.width, CLOSE_LABEL.len() as u16);
        assert!(layout.close.x >= layout.content.x);
        assert!(layout.close.right() <= layout.content.right());
        assert_eq!(layout.close.y, layout.content.y);
    }

    #[test]
    fn test_action_areas_are_content() {
        let layout = layout();
        for action in Action::ALL {
            let area = layout.action_area(action);
            let pos = Position::new(area.x + 1, area.y + 1);
            assert_eq!(classify(&layout, pos), HitTarget::Content);
            assert_eq!(layout.action_at(pos), Some(action));
        }
        assert_eq!(layout.action_at(Position::new(0, 0)), None);
    }
}
