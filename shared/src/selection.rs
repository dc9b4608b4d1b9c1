use crate::lightbox::NavKey;

/// Single-slot detail overlay state for members and events.
///
/// Closing keeps the last selection around so exit transitions can still
/// render it; [`Selection::current`] only yields it while open.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<T> {
    selected: Option<T>,
    open: bool,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self {
            selected: None,
            open: false,
        }
    }
}

impl<T> Selection<T> {
    pub fn open(&mut self, item: T) {
        self.selected = Some(item);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current(&self) -> Option<&T> {
        if self.open { self.selected.as_ref() } else { None }
    }

    pub fn last_selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// Only Escape means anything to a modal; arrows are ignored.
    pub fn handle_key(&mut self, key: NavKey) -> bool {
        if self.open && key == NavKey::Close {
            self.close();
            return true;
        }
        false
    }
}
