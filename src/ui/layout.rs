use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

pub const CARD_MIN_WIDTH: u16 = 34;
pub const CARD_HEIGHT: u16 = 7;
pub const TOGGLE_WIDTH: u16 = 5;

/// Top-level regions of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub hero: Rect,
    pub toggle: Rect,
    pub gallery: Rect,
    pub grid: Rect,
    pub footer: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        // hero(5) + gallery(min) + footer(2) + status(1)
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(CARD_HEIGHT + 2),
                Constraint::Length(2),
                Constraint::Length(1),
            ])
            .split(area);

        let hero = chunks[0];
        let toggle = Rect {
            x: hero.right().saturating_sub(TOGGLE_WIDTH + 2).max(hero.x),
            y: hero.y,
            width: TOGGLE_WIDTH.min(hero.width),
            height: hero.height.min(1),
        };
        let gallery = chunks[1];
        let grid = Rect {
            x: gallery.x.saturating_add(1),
            y: gallery.y.saturating_add(1),
            width: gallery.width.saturating_sub(2),
            height: gallery.height.saturating_sub(2),
        };

        Self {
            hero,
            toggle,
            gallery,
            grid,
            footer: chunks[2],
            status: chunks[3],
        }
    }
}

/// Card grid geometry for a given grid area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardGrid {
    pub area: Rect,
    pub columns: usize,
    pub visible_rows: usize,
}

impl CardGrid {
    pub fn new(area: Rect) -> Self {
        let columns = (area.width / CARD_MIN_WIDTH).max(1) as usize;
        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
        Self {
            area,
            columns,
            visible_rows,
        }
    }

    pub fn total_rows(&self, count: usize) -> usize {
        count.div_ceil(self.columns)
    }

    pub fn row_of(&self, index: usize) -> usize {
        index / self.columns
    }

    /// Visible cards as (catalog index, area), starting at grid row `scroll`.
    pub fn card_rects(&self, count: usize, scroll: usize) -> Vec<(usize, Rect)> {
        let card_width = self.area.width / self.columns as u16;
        let mut rects = Vec::new();
        for visible_row in 0..self.visible_rows {
            let y = self.area.y + visible_row as u16 * CARD_HEIGHT;
            if y >= self.area.bottom() {
                break;
            }
            let height = CARD_HEIGHT.min(self.area.bottom() - y);
            for col in 0..self.columns {
                let index = (scroll + visible_row) * self.columns + col;
                if index >= count {
                    return rects;
                }
                rects.push((
                    index,
                    Rect {
                        x: self.area.x + col as u16 * card_width,
                        y,
                        width: card_width,
                        height,
                    },
                ));
            }
        }
        rects
    }

    pub fn card_at(&self, count: usize, scroll: usize, pos: Position) -> Option<usize> {
        self.card_rects(count, scroll)
            .into_iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(index, _)| index)
    }
}
