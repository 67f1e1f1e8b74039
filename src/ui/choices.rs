//! Selectable answer list with a title and fixed-height pages.

/// Widget-internal movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Up,
    Down,
    PageUp,
    PageDown,
    First,
    Last,
}

/// Contents and highlight of the answer list.
///
/// Nothing is highlighted after `render` until the player moves.
#[derive(Debug, Clone, Default)]
pub struct ChoiceList {
    title: String,
    items: Vec<String>,
    highlighted: Option<usize>,
    per_page: usize,
}

impl ChoiceList {
    pub fn new(per_page: usize) -> Self {
        Self {
            per_page: per_page.max(1),
            ..Self::default()
        }
    }

    /// Replace title and items, clearing the highlight.
    pub fn render(&mut self, title: String, items: Vec<String>) {
        self.title = title;
        self.items = items;
        self.highlighted = None;
    }

    pub fn clear(&mut self) {
        self.render(String::new(), Vec::new());
    }

    pub fn current_selection(&self) -> Option<&str> {
        self.highlighted
            .and_then(|index| self.items.get(index))
            .map(String::as_str)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn per_page(&self) -> usize {
        self.per_page.max(1)
    }

    pub fn page(&self) -> usize {
        self.highlighted.unwrap_or(0) / self.per_page()
    }

    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.per_page()).max(1)
    }

    /// Items on the current page, paired with their index in the full list.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &str)> {
        let start = self.page() * self.per_page();
        self.items
            .iter()
            .enumerate()
            .skip(start)
            .take(self.per_page())
            .map(|(index, item)| (index, item.as_str()))
    }

    pub fn navigate(&mut self, navigation: Navigation) {
        let Some(last) = self.items.len().checked_sub(1) else {
            return;
        };
        let per_page = self.per_page();

        let next = match (navigation, self.highlighted) {
            (Navigation::Up, None) | (Navigation::Down, None) | (Navigation::First, _) => 0,
            (Navigation::Up, Some(index)) => index.saturating_sub(1),
            (Navigation::Down, Some(index)) => (index + 1).min(last),
            (Navigation::PageUp, index) => {
                let page = index.unwrap_or(0) / per_page;
                page.saturating_sub(1) * per_page
            }
            (Navigation::PageDown, index) => {
                let page = index.unwrap_or(0) / per_page;
                ((page + 1) * per_page).min(last)
            }
            (Navigation::Last, _) => last,
        };

        self.highlighted = Some(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str], per_page: usize) -> ChoiceList {
        let mut list = ChoiceList::new(per_page);
        list.render(
            "Question".to_string(),
            items.iter().map(|s| s.to_string()).collect(),
        );
        list
    }

    #[test]
    fn test_nothing_highlighted_after_render() {
        let list = list(&["a", "b"], 14);
        assert_eq!(list.current_selection(), None);
    }

    #[test]
    fn test_first_move_highlights_top_item() {
        let mut list = list(&["a", "b", "c"], 14);
        list.navigate(Navigation::Down);
        assert_eq!(list.current_selection(), Some("a"));

        list.navigate(Navigation::Down);
        list.navigate(Navigation::Down);
        list.navigate(Navigation::Down);
        assert_eq!(list.current_selection(), Some("c"));

        list.navigate(Navigation::Up);
        assert_eq!(list.current_selection(), Some("b"));
    }

    #[test]
    fn test_render_resets_highlight() {
        let mut list = list(&["a", "b"], 14);
        list.navigate(Navigation::Last);
        list.render("Next".to_string(), vec!["x".to_string()]);
        assert_eq!(list.highlighted(), None);
        assert_eq!(list.title(), "Next");
    }

    #[test]
    fn test_pages() {
        let mut list = list(&["a", "b", "c", "d", "e"], 2);
        assert_eq!(list.page_count(), 3);

        list.navigate(Navigation::PageDown);
        assert_eq!(list.current_selection(), Some("c"));
        assert_eq!(list.page(), 1);

        let visible: Vec<&str> = list.visible().map(|(_, item)| item).collect();
        assert_eq!(visible, vec!["c", "d"]);

        list.navigate(Navigation::PageDown);
        list.navigate(Navigation::PageDown);
        assert_eq!(list.current_selection(), Some("e"));

        list.navigate(Navigation::PageUp);
        assert_eq!(list.current_selection(), Some("c"));

        list.navigate(Navigation::First);
        assert_eq!(list.page(), 0);
    }

    #[test]
    fn test_navigation_on_empty_list_is_noop() {
        let mut list = ChoiceList::new(14);
        list.navigate(Navigation::Down);
        assert_eq!(list.highlighted(), None);
        assert_eq!(list.page_count(), 1);
    }
}
