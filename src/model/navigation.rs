//! Page navigation state machine

/// Where the viewer is. Page numbers are 1-based; "no document" is its own state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    NoDocument,
    Viewing { page: usize, page_count: usize },
}

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    state: NavState,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> NavState {
        self.state
    }

    /// Current page, if a document is being viewed
    pub fn page(&self) -> Option<usize> {
        match self.state {
            NavState::NoDocument => None,
            NavState::Viewing { page, .. } => Some(page),
        }
    }

    pub fn page_count(&self) -> usize {
        match self.state {
            NavState::NoDocument => 0,
            NavState::Viewing { page_count, .. } => page_count,
        }
    }

    /// A freshly opened document starts on page 1; an empty one has nothing to view
    pub fn document_opened(&mut self, page_count: usize) {
        self.state = if page_count == 0 {
            NavState::NoDocument
        } else {
            NavState::Viewing {
                page: 1,
                page_count,
            }
        };
    }

    pub fn document_closed(&mut self) {
        self.state = NavState::NoDocument;
    }

    /// Move to `page`, clamped into `[1, page_count]`
    pub fn jump_to(&mut self, page: usize) {
        if let NavState::Viewing { page_count, .. } = self.state {
            self.state = NavState::Viewing {
                page: page.clamp(1, page_count),
                page_count,
            };
        }
    }

    pub fn next(&mut self) {
        if let Some(page) = self.page() {
            self.jump_to(page.saturating_add(1));
        }
    }

    pub fn previous(&mut self) {
        if let Some(page) = self.page() {
            self.jump_to(page.saturating_sub(1));
        }
    }

    pub fn first(&mut self) {
        self.jump_to(1);
    }

    pub fn last(&mut self) {
        self.jump_to(self.page_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_clamps_at_last_page() {
        let mut nav = Navigator::new();
        nav.document_opened(2);
        nav.next();
        nav.next();
        nav.next();
        assert_eq!(nav.page(), Some(2));
    }

    #[test]
    fn test_previous_clamps_at_first_page() {
        let mut nav = Navigator::new();
        nav.document_opened(5);
        nav.previous();
        assert_eq!(nav.page(), Some(1));
    }

    #[test]
    fn test_empty_document_has_no_page() {
        let mut nav = Navigator::new();
        nav.document_opened(0);
        assert_eq!(nav.state(), NavState::NoDocument);
        nav.next();
        nav.last();
        assert_eq!(nav.page(), None);
    }

    #[test]
    fn test_jump_and_ends() {
        let mut nav = Navigator::new();
        nav.document_opened(10);
        nav.jump_to(0);
        assert_eq!(nav.page(), Some(1));
        nav.jump_to(42);
        assert_eq!(nav.page(), Some(10));
        nav.first();
        assert_eq!(nav.page(), Some(1));
        nav.last();
        assert_eq!(nav.page(), Some(10));
        nav.document_closed();
        assert_eq!(nav.state(), NavState::NoDocument);
    }
}
