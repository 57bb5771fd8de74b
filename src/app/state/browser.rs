use crate::grouping::{FlatItem, GroupedView, NestedGroup};
use crate::library::Album;

/// Cursor over the flattened album list 📚
#[derive(Debug, Default)]
pub struct AlbumBrowser {
    view: GroupedView,
    selected: usize,
}

impl AlbumBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly grouped view. The cursor follows the previously
    /// selected album when it is still present, otherwise it is clamped.
    pub fn set_view(&mut self, view: GroupedView) {
        let previous = self.selected_album().cloned();
        self.view = view;

        let found = previous.and_then(|prev| {
            self.view
                .items
                .iter()
                .position(|item| item.album() == Some(&prev))
        });
        self.selected = found.unwrap_or_else(|| self.selected.min(self.view.items.len().saturating_sub(1)));
    }

    pub fn items(&self) -> &[FlatItem] {
        &self.view.items
    }

    pub fn groups(&self) -> &[NestedGroup] {
        &self.view.groups
    }

    pub fn album_count(&self) -> usize {
        self.view.album_count()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&FlatItem> {
        self.view.items.get(self.selected)
    }

    pub fn selected_album(&self) -> Option<&Album> {
        self.selected_item().and_then(|item| item.album())
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.view.items.len().saturating_sub(1));
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.view.items.len() {
            self.selected += 1;
        }
    }

    /// Jump to the next header row (any level)
    pub fn next_header(&mut self) -> bool {
        let next = self
            .view
            .items
            .iter()
            .enumerate()
            .skip(self.selected + 1)
            .find(|(_, item)| item.is_header())
            .map(|(i, _)| i);
        match next {
            Some(i) => {
                self.selected = i;
                true
            }
            None => false,
        }
    }

    pub fn prev_header(&mut self) -> bool {
        let prev = self.view.items[..self.selected.min(self.view.items.len())]
            .iter()
            .rposition(|item| item.is_header());
        match prev {
            Some(i) => {
                self.selected = i;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::{GroupField, Settings, SortCriterion, SortField, SortOrder};
    use chrono::NaiveDate;

    fn build(albums: Vec<Album>) -> GroupedView {
        let settings = Settings::new(
            vec![GroupField::Genre],
            vec![SortCriterion::new(SortField::Album, SortOrder::Ascending)],
        );
        let now = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        GroupedView::build(albums, &settings, now)
    }

    fn album(name: &str, genre: &str) -> Album {
        Album {
            genre: genre.to_string(),
            ..Album::new("Artist", name)
        }
    }

    // Rows: #Jazz, A, B, #Rock, C
    fn sample() -> Vec<Album> {
        vec![album("A", "Jazz"), album("C", "Rock"), album("B", "Jazz")]
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut browser = AlbumBrowser::new();
        browser.move_down();
        browser.move_up();
        assert_eq!(browser.selected(), 0);
        assert!(browser.selected_item().is_none());

        browser.set_view(build(sample()));
        for _ in 0..10 {
            browser.move_down();
        }
        assert_eq!(browser.selected(), 4);
        assert_eq!(browser.selected_album().unwrap().name, "C");
    }

    #[test]
    fn test_header_jumps() {
        let mut browser = AlbumBrowser::new();
        browser.set_view(build(sample()));

        assert!(browser.next_header());
        assert_eq!(browser.selected(), 3);
        assert!(!browser.next_header());
        assert!(browser.prev_header());
        assert_eq!(browser.selected(), 0);
        assert!(!browser.prev_header());
    }

    #[test]
    fn test_selection_follows_album_across_refresh() {
        let mut browser = AlbumBrowser::new();
        browser.set_view(build(sample()));
        browser.select(2);
        assert_eq!(browser.selected_album().unwrap().name, "B");

        // A new Jazz album shifts B down one row
        let mut more = sample();
        more.push(album("AA", "Jazz"));
        browser.set_view(build(more));
        assert_eq!(browser.selected(), 3);
        assert_eq!(browser.selected_album().unwrap().name, "B");

        browser.set_view(build(vec![album("Z", "Pop")]));
        assert_eq!(browser.selected(), 1);
    }
}
