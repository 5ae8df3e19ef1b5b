use crate::catalog::ProjectRecord;
use crate::modal::Modal;
use std::sync::Arc;

/// Compact summary of one project in the gallery grid.
#[derive(Debug, Clone)]
pub struct Card {
    project: Arc<ProjectRecord>,
}

impl Card {
    pub fn new(project: Arc<ProjectRecord>) -> Self {
        Self { project }
    }

    pub fn id(&self) -> &str {
        &self.project.id
    }

    pub fn image(&self) -> &str {
        &self.project.image
    }

    pub fn title(&self) -> &str {
        &self.project.title
    }

    pub fn short_description(&self) -> &str {
        &self.project.short_description
    }

    /// Badge text, the first entry of the tech stack.
    pub fn tag(&self) -> Option<&str> {
        self.project.primary_tag()
    }

    /// Selection handler: hands the bound record to the modal.
    pub fn select(&self, modal: &mut Modal) {
        tracing::debug!(id = %self.id(), "card selected");
        modal.open(Arc::clone(&self.project));
    }
}

/// Container the cards are appended to.
#[derive(Debug, Default)]
pub struct Gallery {
    cards: Vec<Card>,
    scroll: usize,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// First visible grid row.
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Scroll by `delta` rows, clamped to `max_rows - 1`. Ignored while the
    /// modal holds the scroll lock.
    pub fn scroll_by(&mut self, delta: isize, max_rows: usize, modal: &Modal) -> bool {
        if modal.scroll_locked() {
            return false;
        }
        let last = max_rows.saturating_sub(1);
        let next = self.scroll.saturating_add_signed(delta).min(last);
        let changed = next != self.scroll;
        self.scroll = next;
        changed
    }

    /// Bring `row` into a window of `visible_rows` rows.
    pub fn scroll_to_row(&mut self, row: usize, visible_rows: usize, modal: &Modal) {
        if modal.scroll_locked() {
            return;
        }
        let visible_rows = visible_rows.max(1);
        if row < self.scroll {
            self.scroll = row;
        } else if row >= self.scroll + visible_rows {
            self.scroll = row + 1 - visible_rows;
        }
    }
}

/// Append one card per record, in catalog order. An absent container is a no-op.
pub fn render(catalog: &[Arc<ProjectRecord>], container: Option<&mut Gallery>) {
    let Some(gallery) = container else {
        tracing::warn!("gallery container missing, skipping render");
        return;
    };
    for project in catalog {
        gallery.append(Card::new(Arc::clone(project)));
    }
    tracing::info!(cards = gallery.len(), "gallery rendered");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record;
    use crate::modal::ModalState;
    use proptest::prelude::*;

    fn catalog(records: Vec<ProjectRecord>) -> Vec<Arc<ProjectRecord>> {
        records.into_iter().map(Arc::new).collect()
    }

    #[test]
    fn test_empty_catalog_leaves_container_empty() {
        let mut gallery = Gallery::new();
        render(&[], Some(&mut gallery));
        assert_eq!(gallery.len(), 0);
    }

    #[test]
    fn test_missing_container_is_noop() {
        let projects = catalog(vec![record("a", "A", &["X"])]);
        render(&projects, None);
    }

    #[test]
    fn test_card_exposes_record_fields() {
        let projects = catalog(vec![record("a", "A", &["X", "Y"])]);
        let mut gallery = Gallery::new();
        render(&projects, Some(&mut gallery));

        let card = gallery.card(0).unwrap();
        assert_eq!(card.id(), "a");
        assert_eq!(card.title(), "A");
        assert_eq!(card.short_description(), "A in short");
        assert_eq!(card.image(), "https://img.example/a.jpg");
        assert_eq!(card.tag(), Some("X"));
    }

    #[test]
    fn test_selecting_card_opens_its_own_record() {
        let projects = catalog(vec![
            record("a", "A", &["X"]),
            record("b", "B", &["Y", "Z"]),
            record("c", "C", &["W"]),
        ]);
        let mut gallery = Gallery::new();
        render(&projects, Some(&mut gallery));

        let mut modal = Modal::new();
        for (i, card) in gallery.cards().iter().enumerate() {
            card.select(&mut modal);
            match modal.state() {
                ModalState::Open(p) => assert_eq!(**p, *projects[i]),
                ModalState::Closed => panic!("Expected modal to be open"),
            }
            let content = modal.content().unwrap();
            assert_eq!(content.title, projects[i].title);
            assert_eq!(content.tags, projects[i].tech_stack);
            modal.close();
        }
    }

    #[test]
    fn test_scroll_suspended_while_modal_open() {
        let projects = catalog(vec![record("a", "A", &["X"])]);
        let mut gallery = Gallery::new();
        render(&projects, Some(&mut gallery));
        let mut modal = Modal::new();

        assert!(gallery.scroll_by(2, 10, &modal));
        assert_eq!(gallery.scroll(), 2);

        gallery.card(0).unwrap().select(&mut modal);
        assert!(!gallery.scroll_by(3, 10, &modal));
        gallery.scroll_to_row(0, 1, &modal);
        assert_eq!(gallery.scroll(), 2);

        modal.close();
        assert!(gallery.scroll_by(-5, 10, &modal));
        assert_eq!(gallery.scroll(), 0);
    }

    #[test]
    fn test_scroll_clamped_to_last_row() {
        let mut gallery = Gallery::new();
        let modal = Modal::new();
        gallery.scroll_by(50, 4, &modal);
        assert_eq!(gallery.scroll(), 3);
        gallery.scroll_to_row(0, 2, &modal);
        assert_eq!(gallery.scroll(), 0);
        gallery.scroll_to_row(5, 2, &modal);
        assert_eq!(gallery.scroll(), 4);
    }

    proptest! {
        #[test]
        fn prop_one_card_per_record_in_order(
            stacks in prop::collection::vec(
                prop::collection::vec("[A-Za-z]{1,8}", 1..5),
                0..20,
            )
        ) {
            let projects: Vec<Arc<ProjectRecord>> = stacks
                .iter()
                .enumerate()
                .map(|(i, tags)| {
                    let tags: Vec<&str> = tags.iter().map(String::as_str).collect();
                    Arc::new(record(&format!("p{}", i), &format!("P{}", i), &tags))
                })
                .collect();

            let mut gallery = Gallery::new();
            render(&projects, Some(&mut gallery));

            prop_assert_eq!(gallery.len(), projects.len());
            for (card, project) in gallery.cards().iter().zip(&projects) {
                prop_assert_eq!(card.id(), project.id.as_str());
                prop_assert_eq!(card.tag(), Some(project.tech_stack[0].as_str()));
            }
        }
    }
}
